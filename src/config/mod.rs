pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::model::UserPreferences;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "design-matcher")]
#[command(about = "Recommends design templates from four simulator answers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Read the catalog from a local .json or .toml file
    #[arg(long, global = true, conflicts_with = "catalog_url")]
    pub catalog: Option<String>,

    /// Fetch the catalog from a URL
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shortlist three templates for a set of answers
    Recommend {
        #[command(flatten)]
        answers: AnswerArgs,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the values available on each axis
    Options {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the display label of an axis key
    Label {
        /// industry, goal, style or level
        axis: String,
        key: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Args)]
pub struct AnswerArgs {
    #[arg(long, default_value = "")]
    pub industry: String,

    #[arg(long, default_value = "")]
    pub goal: String,

    #[arg(long, default_value = "")]
    pub style: String,

    #[arg(long, default_value = "")]
    pub level: String,
}

#[cfg(feature = "cli")]
impl From<AnswerArgs> for UserPreferences {
    fn from(args: AnswerArgs) -> Self {
        UserPreferences::new(args.industry, args.goal, args.style, args.level)
    }
}
