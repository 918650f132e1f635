mod run;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "runconv",
    about = "Convert NetBeans nbactions.xml build actions into IDE run-configuration files",
    version
)]
struct Cli {
    /// Pathname of the nbactions.xml file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Log level
    #[arg(
        long,
        short = 'l',
        value_enum,
        ignore_case = true,
        default_value = "info",
        value_name = "LEVEL"
    )]
    log_level: LogLevel,

    /// Prefix for configuration names
    #[arg(long, default_value = "")]
    name_prefix: String,

    /// Relative path of the project subdirectory
    #[arg(long, value_name = "PATH")]
    project_dir: Option<String>,

    /// Directory to write output files in; use - to dump to stdout
    #[arg(long, value_name = "DIRNAME")]
    output_dir: Option<PathBuf>,

    /// Directory containing the run configuration xml template
    /// (default: the directory containing this executable)
    #[arg(long, value_name = "DIRNAME")]
    templates_dir: Option<PathBuf>,

    /// Wildcard pattern matched against each action's displayName
    #[arg(long, value_name = "PATTERN", default_value = "*")]
    action_filter: String,

    /// Exit clean even if no actions are transformed
    #[arg(long)]
    allow_zero_actions: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr: stdout is reserved for rendered output when
    // --output-dir is '-'.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level.as_tracing().into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run::run(&cli) {
        Ok(0) if !cli.allow_zero_actions => {
            eprintln!("runconv: no actions transformed; check filter pattern");
            std::process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
