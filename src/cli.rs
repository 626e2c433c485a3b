//! Command line flags for the folio binary.

use clap::{Parser, ValueEnum};
use folio::theme::ThemeMode;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a command palette", version)]
pub struct Cli {
    /// Enable debug logging (logs to the temp directory)
    #[arg(short, long)]
    pub debug: bool,

    /// Skip the typing intro
    #[arg(short, long)]
    pub skip_intro: bool,

    /// Page to open on, e.g. `/projects`
    #[arg(short, long)]
    pub route: Option<String>,

    /// Override the saved theme for this session
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}
