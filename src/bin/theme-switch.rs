use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use theme_switch::{SystemEnvironment, ThemeConfig, ThemePreference, ThemeStore, ThemeSwitcher};

/// Read, set, or toggle the persisted light/dark theme.
#[derive(Parser)]
#[command(name = "theme-switch", version, about)]
struct Cli {
    /// Preference file (overrides config and THEME_SWITCH_STORAGE)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved theme without persisting it
    Show,
    /// Switch to the other theme
    Toggle,
    /// Persist an explicit theme
    Set {
        /// `light` or `dark`
        theme: ThemePreference,
    },
    /// Print the switcher button markup
    Button,
    /// Print the class attribute for the document root
    RootClass,
}

/// What a command produced, before terminal styling.
#[derive(Debug, PartialEq, Eq)]
enum Output {
    Theme(ThemePreference),
    Text(String),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli)? {
        Output::Theme(pref) => println!("{}", styled(pref)),
        Output::Text(text) => println!("{text}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<Output> {
    let mut config = ThemeConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = cli.storage {
        config = config.with_storage_path(path);
    }
    let env = SystemEnvironment::from_config(&config);
    let mut store = ThemeStore::with_config(env, config);

    let output = match cli.command {
        Command::Show => Output::Theme(store.resolve()),
        Command::Toggle => {
            let next = store.resolve().toggle();
            store
                .try_apply(next)
                .with_context(|| format!("applying theme '{next}'"))?;
            Output::Theme(next)
        }
        Command::Set { theme } => {
            store
                .try_apply(theme)
                .with_context(|| format!("applying theme '{theme}'"))?;
            Output::Theme(theme)
        }
        Command::Button => {
            let switcher = ThemeSwitcher::from_store(store);
            Output::Text(switcher.render_button()?)
        }
        Command::RootClass => {
            let switcher = ThemeSwitcher::from_store(store);
            Output::Text(switcher.root_class().to_string())
        }
    };
    Ok(output)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn styled(pref: ThemePreference) -> String {
    let style = match pref {
        ThemePreference::Light => Style::new().yellow().bold(),
        ThemePreference::Dark => Style::new().blue().bold(),
    };
    style.apply_to(pref).to_string()
}
