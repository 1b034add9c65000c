use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tasklens_core::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tasklens", version)]
#[command(about = "Interpret free-text task descriptions", long_about = None)]
pub struct Cli {
    #[arg(long, global = true, help = "Configuration file to load instead of the default")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Output format (overrides config)")]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Analyze task text and print the result")]
    Analyze {
        #[arg(long, help = "Reference time as RFC 3339 (defaults to now)")]
        now: Option<String>,

        #[arg(help = "Task text; read from stdin when omitted")]
        text: Vec<String>,
    },

    #[command(about = "Build an assistant task suggestion")]
    Suggest {
        #[arg(long, help = "Reference time as RFC 3339 (defaults to now)")]
        now: Option<String>,

        #[arg(help = "Utterance; read from stdin when omitted")]
        text: Vec<String>,
    },

    #[command(about = "Print the conversational intent")]
    Intent {
        #[arg(help = "Utterance; read from stdin when omitted")]
        text: Vec<String>,
    },

    #[command(about = "Print the effective configuration and its path")]
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
