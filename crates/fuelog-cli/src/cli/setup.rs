use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "fuelog", bin_name = "fuelog", version = get_version())]
#[command(about = "Fuel consumption logbook", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory [default: $FUELOG_HOME, else the OS data directory]
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a refuel
    Add(AddArgs),

    /// Preview trip metrics without saving anything
    Metrics(MetricsArgs),

    /// List entries, most recently driven first
    #[command(alias = "ls")]
    List,

    /// Delete entries by index (3), range (1-3) or id
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Totals, averages and the efficiency trend
    #[command(alias = "stats")]
    Summary,

    /// Replace the log with generated sample entries
    Sample,

    /// Delete all entries
    Reset {
        /// Also reset mirroring settings
        #[arg(long)]
        all: bool,
    },

    /// Show or change remote mirroring of new entries
    Mirror {
        #[command(subcommand)]
        action: Option<MirrorCommands>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (currency, mirror-timeout)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Fuel brand or station
    #[arg(long)]
    pub brand: String,

    /// Amount paid
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Volume in litres
    #[arg(long, allow_hyphen_values = true)]
    pub litres: String,

    /// Odometer at the start of the trip [default: end of the last entry]
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Odometer at the end of the trip
    #[arg(long, allow_hyphen_values = true)]
    pub end: String,

    /// Date as YYYY-MM-DD [default: today]
    #[arg(long)]
    pub date: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Odometer at the start of the trip [default: end of the last entry]
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Odometer at the end of the trip
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Volume in litres
    #[arg(long, allow_hyphen_values = true)]
    pub litres: Option<String>,

    /// Amount paid
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MirrorCommands {
    /// Show the current mirroring settings
    Show,

    /// Mirror every new entry to URL
    Enable { url: String },

    /// Stop mirroring (the URL is kept)
    Disable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_means_list() {
        let cli = Cli::try_parse_from(["fuelog"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn aliases_parse() {
        let cli = Cli::try_parse_from(["fuelog", "rm", "1-2", "4"]).unwrap();
        match cli.command {
            Some(Commands::Delete { selectors }) => assert_eq!(selectors, vec!["1-2", "4"]),
            other => panic!("unexpected {:?}", other),
        }

        let cli = Cli::try_parse_from(["fuelog", "stats"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn add_requires_core_fields() {
        assert!(Cli::try_parse_from(["fuelog", "add", "--brand", "Shell"]).is_err());

        let cli = Cli::try_parse_from([
            "fuelog", "add", "--brand", "Shell", "--amount", "71.75", "--litres", "35", "--end",
            "50450",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.end, "50450");
                assert!(args.start.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["fuelog", "-v", "-q", "list"]).is_err());
    }

    #[test]
    fn data_flag_is_only_the_command_line() {
        // FUELOG_HOME is read by fuelog::init, never by clap
        let cli = Cli::try_parse_from(["fuelog", "list"]).unwrap();
        assert_eq!(cli.data, None);
    }

    #[test]
    fn global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["fuelog", "list", "--data", "/tmp/fuel"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/fuel")));
    }
}
