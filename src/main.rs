use anyhow::Result;
use clap::Parser;
use covrank::cli::{Cli, Commands};
use covrank::commands::ReportConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            input,
            format,
            output,
            package_root,
            no_demangle,
            config,
        } => covrank::commands::handle_report(ReportConfig {
            input,
            format,
            output,
            package_root,
            no_demangle,
            config,
        }),
        Commands::Init { force } => covrank::commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v flags
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
