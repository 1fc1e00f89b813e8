//! Folio CLI
//!
//! Opens the portfolio console as a full-screen TUI, or as a plain line
//! REPL for pipes and scripts.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use folio_console::tui::App;
use folio_console::{Console, Entry, FolioConfig, PreferenceStore, Profile, Submission, ThemePreference};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Folio - ask the portfolio console
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for preferences and logs (default: $FOLIO_HOME or the
    /// platform config dir)
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Theme for this run, without changing the saved preference
    #[arg(long)]
    theme: Option<ThemePreference>,

    /// Run these commands in order, print their output and exit
    #[arg(short = 'e', long = "exec", value_name = "CMD")]
    exec: Vec<String>,

    /// Disable TUI and read commands line by line from stdin
    #[arg(long)]
    no_tui: bool,

    /// Print the compiled-in profile as JSON and exit
    #[arg(long)]
    print_profile: bool,

    /// Verbose output: debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => get_folio_home()?,
    };
    let config = FolioConfig::new(config_dir)
        .with_theme_override(cli.theme)
        .with_verbose(cli.verbose);
    let profile = Profile::default();

    if cli.print_profile {
        println!("{}", profile.to_json()?);
        return Ok(());
    }

    if !cli.exec.is_empty() {
        init_stderr_logging(&config);
        return run_exec(&cli.exec, profile);
    }

    if cli.no_tui {
        init_stderr_logging(&config);
        run_plain_mode(profile).await
    } else {
        run_tui_mode(&config, profile).await
    }
}

fn log_filter(config: &FolioConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

fn init_stderr_logging(config: &FolioConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file in the config dir
fn init_file_logging(config: &FolioConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.config_dir)
        .with_context(|| format!("creating {}", config.config_dir.display()))?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("opening {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config))
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();
    Ok(())
}

async fn run_tui_mode(config: &FolioConfig, profile: Profile) -> anyhow::Result<()> {
    init_file_logging(config)?;

    let store = PreferenceStore::new(config.preferences_file());
    let theme = match config.theme_override {
        Some(theme) => theme,
        None => store.load().await,
    };
    info!("Starting Folio TUI (theme: {})", theme);

    let mut app = App::new(profile, theme, store);
    app.run().await?;
    Ok(())
}

async fn run_plain_mode(profile: Profile) -> anyhow::Result<()> {
    info!("Starting Folio (plain mode)");

    let mut console = Console::new(profile);
    console.open();

    let mut stdout = io::stdout().lock();
    write_entries(&mut stdout, console.transcript().entries())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let before = console.transcript().len();
        let outcome = console.submit(&line);
        write_entries(&mut stdout, new_entries(&console, before, &outcome))?;
    }

    console.close();
    Ok(())
}

fn run_exec(commands: &[String], profile: Profile) -> anyhow::Result<()> {
    let mut console = Console::new(profile);
    let mut stdout = io::stdout().lock();
    for command in commands {
        let before = console.transcript().len();
        let outcome = console.submit(command);
        write_entries(&mut stdout, new_entries(&console, before, &outcome))?;
    }
    Ok(())
}

/// Entries a submission added; after `clear` that is the whole transcript
fn new_entries<'a>(console: &'a Console, before: usize, outcome: &Submission) -> &'a [Entry] {
    let entries = console.transcript().entries();
    match outcome {
        Submission::Cleared => entries,
        _ => &entries[before.min(entries.len())..],
    }
}

fn write_entries(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}\n", entry.text())?;
    }
    out.flush()
}

/// Get the Folio config directory
fn get_folio_home() -> anyhow::Result<PathBuf> {
    if let Ok(home) = std::env::var("FOLIO_HOME") {
        return Ok(PathBuf::from(home));
    }

    let base = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
    Ok(base.join("folio"))
}
