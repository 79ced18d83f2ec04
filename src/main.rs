//! Command line front end over the translation store.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use pol_i18n::config::ConfigManager;
use pol_i18n::{
    FileStorage,
    Translator,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "pol-i18n")]
#[command(version)]
#[command(about = "Resolve translation keys and manage the active language")]
struct Cli {
    /// Workspace holding `.pol-i18n.json` and the translation files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    workspace: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the text of a translation key
    Translate {
        /// Translation key
        key: String,

        /// Language to use instead of the active one
        #[arg(short, long, value_name = "CODE")]
        lang: Option<String>,

        /// Language to use when the requested one has no translations
        #[arg(short, long, value_name = "CODE")]
        fallback: Option<String>,
    },

    /// Print the active language
    Lang,

    /// Persist a new active language
    SetLang {
        /// Language code
        code: String,
    },

    /// List the languages found in the translation files
    Languages,
}

/// Runs a subcommand, writing its result to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<(), pol_i18n::Error> {
    let config = ConfigManager::load(cli.workspace)?;
    tracing::debug!(workspace = %config.workspace_root().display(), "Workspace configured");

    let store = config.load_store()?;
    let mut translator = Translator::new(&store, FileStorage::new(config.storage_path()));

    match cli.command {
        Commands::Translate { key, lang, fallback } => {
            writeln!(out, "{}", translator.resolve(&key, lang.as_deref(), fallback.as_deref()))?;
        }
        Commands::Lang => writeln!(out, "{}", translator.active_language())?,
        Commands::SetLang { code } => {
            translator.change_language(&code)?;
            writeln!(out, "{code}")?;
        }
        Commands::Languages => {
            for language in store.translation_table().languages() {
                writeln!(out, "{language}")?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
