use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// depset - resolve named dependency sets into Gradle configurations
#[derive(Parser, Debug)]
#[command(name = "depset")]
#[command(about = "Resolve named dependency sets into build configurations")]
#[command(version)]
pub struct Cli {
    /// Log every declared dependency
    #[arg(long, global = true)]
    pub info: bool,

    /// Log catalog and resolution internals
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.info {
            "info"
        } else {
            "warn"
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the appConfig selection and print the resulting build configuration
    Configure(ConfigureArgs),
    /// List available dependency sets
    DisplaySet {
        /// depset.toml with extra catalog groups
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// depset.toml with [appConfig] and [catalog] tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Kotlin DSL build script with an appConfig { } block (overrides --config)
    #[arg(short, long)]
    pub build_file: Option<PathBuf>,

    /// Server flavor substituted into server-dependent entries
    #[arg(long)]
    pub server: Option<String>,

    /// Target languages, comma separated
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Java language level, e.g. 11 or 1_8
    #[arg(long)]
    pub code_version: Option<String>,

    /// Plugins applied to the project before configuration
    #[arg(long = "plugin", default_value = "java")]
    pub plugins: Vec<String>,

    /// Project name used in log output
    #[arg(long, default_value = "app")]
    pub project_name: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Kotlin)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Kotlin DSL fragment
    Kotlin,
    /// Selection, resolved assignments and report as JSON
    Json,
}
