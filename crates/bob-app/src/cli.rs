use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bob: drive a tiling layout tree from the command line.
#[derive(Parser, Debug)]
#[command(name = "bob", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "bob=debug").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the sample layout and print it.
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },
    /// Apply the steps of a TOML script to a fresh tree and print the result.
    Replay {
        script: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,

        /// First container id (1 or more); overrides the config's id settings.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tree,
    Json,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_replay_with_globals() {
        let args = Args::try_parse_from([
            "bob",
            "replay",
            "layout.toml",
            "--format",
            "json",
            "--seed",
            "1",
            "--log-level",
            "bob=debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("bob=debug"));
        match args.command {
            Command::Replay {
                script,
                format,
                seed,
            } => {
                assert_eq!(script, PathBuf::from("layout.toml"));
                assert_eq!(format, Format::Json);
                assert_eq!(seed, Some(1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn demo_defaults_to_tree_format() {
        let args = Args::try_parse_from(["bob", "demo"]).unwrap();
        assert!(matches!(args.command, Command::Demo { format: Format::Tree }));
        assert!(args.config.is_none());
    }

    #[test]
    fn replay_rejects_zero_seed() {
        let err =
            Args::try_parse_from(["bob", "replay", "layout.toml", "--seed", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
