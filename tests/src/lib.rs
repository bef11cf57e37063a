//! Cross-crate scenarios: generate a network, write it, read it back.

mod generation;
mod round_trip;
mod util;
