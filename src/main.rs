//! Maintenance CLI for locale documents and user preferences.

use std::io::{
    self,
    Write as _,
};
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;
use std::time::Duration;

use clap::{
    Parser,
    Subcommand,
};
use command_i18n::I18nContext;
use command_i18n::config::{
    ConfigError,
    ConfigManager,
    MatcherError,
};
use command_i18n::format::FormatArg;
use command_i18n::locale::DEFAULT_LOCALE;
use command_i18n::maintenance::{
    TemplateGenerator,
    ValidationEngine,
    generate_translation_report,
};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Seconds in one day.
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Inspect, validate and bootstrap locale documents.
#[derive(Parser, Debug)]
#[command(name = "command-i18n", version, disable_help_subcommand = true)]
struct Cli {
    /// Directory holding `.command-i18n.json`; relative paths resolve against it.
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,
    /// Also write logs to daily files in this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// What to do.
    #[command(subcommand)]
    command: CliCommand,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
enum CliCommand {
    /// Lists loaded locale codes.
    Locales,
    /// Resolves a response path and formats it.
    Resolve {
        /// Path inside `responses` (for example `errors.general`).
        path: String,
        /// Locale to resolve in.
        #[arg(long, default_value = DEFAULT_LOCALE)]
        locale: String,
        /// Positional arguments; integers are passed as numbers.
        #[arg(value_name = "ARG", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Checks that every locale covers the same keys.
    Validate,
    /// Prints a skeleton document for a new locale.
    Template {
        /// Locale whose values seed the template.
        #[arg(long, default_value = DEFAULT_LOCALE)]
        base: String,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Prints a Markdown overview of every locale.
    Report,
    /// Removes stale user preferences once.
    Cleanup {
        /// Overrides `preferences.maxAgeDays`.
        #[arg(long)]
        max_age_days: Option<u32>,
    },
}

/// Failures that stop the CLI.
#[derive(Error, Debug)]
enum CliError {
    /// Settings file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Locale file pattern is invalid.
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error}");
            let _ = writeln!(io::stderr().lock(), "Error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber. The guard must live until exit.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(dir) = log_dir {
        let appender = tracing_appender::rolling::daily(dir, "command-i18n.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false).with_writer(writer).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
        None
    }
}

/// Runs one subcommand.
async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = ConfigManager::new();
    config.load_settings(Some(cli.workspace))?;
    let context = I18nContext::initialize(&config).await?;
    let localizer = context.localizer();
    let mut out = io::stdout().lock();

    match cli.command {
        CliCommand::Locales => {
            for locale in localizer.available_locales() {
                let name = localizer.locale_name(&locale, &locale);
                let flag = command_i18n::format::locale_flag(&locale);
                writeln!(out, "{flag} {locale}\t{name}")?;
            }
        }
        CliCommand::Resolve { path, locale, args } => {
            let args: Vec<FormatArg> = args.iter().map(|arg| parse_arg(arg)).collect();
            writeln!(out, "{}", localizer.get_response(&path, &locale, &args))?;
        }
        CliCommand::Validate => {
            let engine = ValidationEngine::new(
                command_i18n::maintenance::catalog::reference_catalog(),
                config.get_settings().validation.sample_size,
            );
            let result = engine.validate(localizer.store());
            write!(out, "{}", result.report())?;
            if !result.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        CliCommand::Template { base, output } => {
            let template = TemplateGenerator::default().generate(localizer.store(), &base);
            match output {
                Some(path) => {
                    tokio::fs::write(&path, template).await?;
                    tracing::info!("Wrote template to {}", path.display());
                }
                None => write!(out, "{template}")?,
            }
        }
        CliCommand::Report => {
            write!(out, "{}", generate_translation_report(localizer))?;
        }
        CliCommand::Cleanup { max_age_days } => {
            let days = max_age_days.unwrap_or(config.get_settings().preferences.max_age_days);
            let max_age = Duration::from_secs(u64::from(days) * SECONDS_PER_DAY);
            let removed = context.preferences().cleanup_old_preferences(max_age).await;
            writeln!(out, "Removed {removed} preference(s) older than {days} day(s)")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Integers become numeric arguments so `{N:Dk}` placeholders work.
fn parse_arg(arg: &str) -> FormatArg {
    arg.parse::<i64>().map_or_else(|_| FormatArg::from(arg), FormatArg::Integer)
}
