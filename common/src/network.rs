pub mod device;
pub mod mac;
pub mod subnet;
