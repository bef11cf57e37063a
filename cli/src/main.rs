mod commands;
mod terminal;

use commands::{CommandLine, Commands, generate, inspect};
use terminal::{logging, print};
use topogen_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_banner: commands.no_banner,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Generate(args) => {
            print::header("generating topology", cfg.quiet);
            generate::generate(args, &cfg)
        }
        Commands::Inspect { file, device_type } => {
            print::header("inspecting topology", cfg.quiet);
            inspect::inspect(&file, device_type, &cfg)
        }
    }
}
