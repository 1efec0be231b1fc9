use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `phonebook` binary.
#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    version,
    long_version = long_version(),
    about = "Search a phonebook service as you type",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PHONEBOOK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        help = "Search endpoint queried with ?q=<text> (default: none, required)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long = "timeout-ms",
        value_name = "MILLIS",
        help = "Per-request timeout in milliseconds (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the input prompt title (default: endpoint host)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Level captured in the log pane: off, error, warn, info, debug, trace (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
