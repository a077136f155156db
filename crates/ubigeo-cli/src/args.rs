use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ubigeo
#[derive(Debug, Parser)]
#[command(
    name = "ubigeo",
    version,
    about = "Build and query the Peru UBIGEO database (departamentos, provincias, distritos)"
)]
pub struct CliArgs {
    /// Dataset to query: a CSV source, a `.bin` snapshot or an artifact
    /// directory (default: the bundled sample CSV)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Print the JSON payload instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a CSV source into ubigeo.json, search-index.json and ubigeo.bin
    Build {
        /// INEI CSV export (optionally .csv.gz)
        source: PathBuf,
        /// Output directory
        #[arg(short = 'o', long = "out", default_value = "data")]
        out: PathBuf,
    },

    /// Show a summary of the database contents
    Stats,

    /// List all departments
    Departamentos,

    /// Show a department and its provinces
    Departamento {
        /// 2-digit department code (e.g. 15)
        code: String,
    },

    /// Show a province and its districts
    Provincia {
        /// 4-digit province code (e.g. 1501)
        code: String,
    },

    /// Show a district with its province and department
    Distrito {
        /// 6-digit district code (e.g. 150131)
        code: String,
    },

    /// Search districts by name (all terms must match)
    Buscar {
        /// Search text, at least 2 characters (e.g. "san isidro")
        query: String,
        /// Maximum number of results (default 20)
        #[arg(short = 'l', long = "limit")]
        limit: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_search_with_limit() {
        let args = CliArgs::parse_from(["ubigeo", "buscar", "san isidro", "--limit", "5"]);
        match args.command {
            Commands::Buscar { query, limit } => {
                assert_eq!(query, "san isidro");
                assert_eq!(limit.as_deref(), Some("5"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let args = CliArgs::parse_from(["ubigeo", "distrito", "150101", "--json", "-i", "x.bin"]);
        assert!(args.json);
        assert_eq!(args.input, Some(PathBuf::from("x.bin")));
    }
}
