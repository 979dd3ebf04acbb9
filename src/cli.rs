use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::PersistenceKind;

#[derive(Parser, Debug)]
#[command(name = "servicemap")]
#[command(about = "Extract a structural model from a conventional service tree", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract modules, services, entities and enums from a project tree
    Extract {
        /// Project root containing the services directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Persistence for entities without a storage marker
        #[arg(long, value_enum)]
        default_persistence: Option<PersistenceArg>,
    },
    /// List generator plugins installed in the Go binary directory
    Plugins,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PersistenceArg {
    Db,
    Memory,
    None,
}

impl From<PersistenceArg> for PersistenceKind {
    fn from(arg: PersistenceArg) -> Self {
        match arg {
            PersistenceArg::Db => PersistenceKind::Db,
            PersistenceArg::Memory => PersistenceKind::Memory,
            PersistenceArg::None => PersistenceKind::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn extract_defaults_to_current_dir_and_text() {
        let cli = Cli::try_parse_from(["servicemap", "extract"]).unwrap();
        match cli.command {
            Commands::Extract {
                path,
                format,
                default_persistence,
            } => {
                assert_eq!(path, PathBuf::from("."));
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(default_persistence, None);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn persistence_flag_parses_all_variants() {
        for (raw, expected) in [
            ("db", PersistenceKind::Db),
            ("memory", PersistenceKind::Memory),
            ("none", PersistenceKind::None),
        ] {
            let cli = Cli::try_parse_from([
                "servicemap",
                "extract",
                "--default-persistence",
                raw,
            ])
            .unwrap();
            match cli.command {
                Commands::Extract {
                    default_persistence: Some(arg),
                    ..
                } => assert_eq!(PersistenceKind::from(arg), expected),
                _ => panic!("expected a persistence value"),
            }
        }
    }
}
