use crate::load::InputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "covrank")]
#[command(about = "Per-function coverage report, best covered first", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a ranked coverage report
    Report {
        /// Coverage file (JSON document or LCOV tracefile)
        input: PathBuf,

        /// Input format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory LCOV package names are made relative to
        #[arg(long = "package-root")]
        package_root: Option<PathBuf>,

        /// Keep LCOV function names mangled
        #[arg(long = "no-demangle")]
        no_demangle: bool,

        /// Config file to use instead of searching for .covrank.toml
        #[arg(long, env = "COVRANK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write a default .covrank.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "covrank",
            "-vv",
            "report",
            "lcov.info",
            "--format",
            "lcov",
            "--package-root",
            "src",
            "--no-demangle",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Report {
                input,
                format,
                package_root,
                no_demangle,
                output,
                ..
            } => {
                assert_eq!(input, PathBuf::from("lcov.info"));
                assert_eq!(format, Some(InputFormat::Lcov));
                assert_eq!(package_root, Some(PathBuf::from("src")));
                assert!(no_demangle);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["covrank", "report", "x", "--format", "xml"]).is_err());
    }
}
