// tintgrid CLI - headless highlighting over CSV/JSON grids

mod exit_codes;
mod run;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use exit_codes::{EXIT_CONFIG, EXIT_ENGINE, EXIT_ERROR, EXIT_INPUT, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "tintgrid")]
#[command(about = "Turn highlighting instructions into per-cell formatting for tabular data")]
#[command(version)]
struct Cli {
    /// Settings file (default: <config dir>/tintgrid/config.toml)
    #[arg(long, global = true, env = "TINTGRID_CONFIG")]
    config: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG also works.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight rows from a free-text instruction
    #[command(after_help = "\
Examples:
  tintgrid highlight 'highlight top 5 in blue' sales.csv
  tintgrid highlight 'bottom 3 green' data.json -o styles.json
  cat data.csv | tintgrid highlight 'highlight rows' -f csv
  tintgrid highlight 'Highlight odd rows, column B' data.csv --mode prompt")]
    Highlight {
        /// Instruction text (keywords are case-sensitive in literal mode)
        instruction: String,

        /// Matching mode (default from settings, else literal)
        #[arg(long)]
        mode: Option<ModeArg>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Apply a preset formatting action
    #[command(after_help = "\
Examples:
  tintgrid preset highlight-top-10 sales.csv
  tintgrid preset bold-headers data.json --no-data")]
    Preset {
        /// Preset tag (see `tintgrid presets`)
        action: String,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Color cells of one column that satisfy a numeric condition
    #[command(after_help = "\
Examples:
  tintgrid where total '>100' scores.csv
  tintgrid where 'unit price' '<=9.99' items.csv --color green")]
    Where {
        /// Column header (case-insensitive substring)
        column: String,

        /// Condition: >N, >=N, <N, <=N, =N, !=N
        #[arg(allow_hyphen_values = true)]
        condition: String,

        /// Palette color (default from settings, else red)
        #[arg(long)]
        color: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// List preset tags
    Presets,

    /// Show the settings path and effective settings
    Config {
        /// Print a commented default settings file instead
        #[arg(long)]
        default: bool,
    },
}

#[derive(Args, Clone)]
pub(crate) struct IoArgs {
    /// Input file (omit to read from stdin)
    pub input: Option<PathBuf>,

    /// Input format (required when reading from stdin)
    #[arg(long, short = 'f')]
    pub from: Option<FormatArg>,

    /// CSV delimiter (overrides settings and detection)
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Output file (omit for stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Emit only the formatting grid
    #[arg(long)]
    pub no_data: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Csv,
    Tsv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    Literal,
    Prompt,
}

/// `-v` flags set the global level; without them `RUST_LOG` decides, warn otherwise.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        n => {
            let level = match n {
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            };
            EnvFilter::from_default_env().add_directive(level.into())
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match run::Context::new(cli.config.as_deref(), cli.compact) {
        Ok(ctx) => ctx,
        Err(e) => return report(e),
    };

    let result = match cli.command {
        Commands::Highlight { instruction, mode, io } => ctx.highlight(&instruction, mode, &io),
        Commands::Preset { action, io } => ctx.preset(&action, &io),
        Commands::Where { column, condition, color, io } => {
            ctx.where_cmd(&column, &condition, color.as_deref(), &io)
        }
        Commands::Presets => run::list_presets(),
        Commands::Config { default } => ctx.show_config(default),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => report(e),
    }
}

fn report(CliError { code, message, hint }: CliError) -> ExitCode {
    if !message.is_empty() {
        eprintln!("error: {}", message);
    }
    if let Some(hint) = hint {
        eprintln!("hint:  {}", hint);
    }
    ExitCode::from(code)
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INPUT, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CONFIG, message: msg.into(), hint: None }
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ENGINE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<tintgrid_engine::EngineError> for CliError {
    fn from(e: tintgrid_engine::EngineError) -> Self {
        CliError::engine(e.to_string())
    }
}

impl From<tintgrid_config::ConfigError> for CliError {
    fn from(e: tintgrid_config::ConfigError) -> Self {
        CliError::config(e.to_string())
    }
}
