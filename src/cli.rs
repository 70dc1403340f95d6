use app_error::Locale;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apperror")]
#[command(
    author,
    version,
    about = "Classify backend, network and unknown failures into user-facing error descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a failure given as JSON (or plain text) and print its descriptor
    Classify {
        /// Failure to classify; reads stdin when omitted or "-"
        input: Option<String>,

        /// Treat the failure as a transport-level network error
        #[clap(short, long, default_value_t = false)]
        network: bool,

        /// Call-site label recorded in the descriptor context
        #[clap(short, long)]
        source: Option<String>,

        /// Display locale for the user message (overrides the config file)
        #[clap(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Configuration file path (defaults to apperror.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Print the backend code table
    Table {
        /// Display locale for the user messages (overrides the config file)
        #[clap(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Configuration file path (defaults to apperror.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LocaleArg {
    /// English
    En,

    /// Hebrew
    He,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::He => Locale::He,
        }
    }
}
