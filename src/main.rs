//! # Tickbox CLI Entry Point
//!
//! Loads a JSON catalog of items, runs the interactive multi-select prompt,
//! and prints the confirmed selection.
//!
//! ## Usage
//!
//! ```bash
//! # Pick from a catalog, one value per line on stdout
//! tickbox packages.json
//!
//! # Custom title and window size, JSON array output
//! tickbox packages.json --title "Pick packages" --max-visible 15 --json
//!
//! # Print the parsed catalog and exit
//! tickbox packages.json --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `↑` / `↓` - Move the cursor
//! - `Home` / `End` - Jump to the first / last item
//! - `Space` - Toggle the item under the cursor
//! - `Enter` - Confirm the current selection
//! - `Esc` / `Ctrl+C` - Cancel without selecting
//! - Any printable character - Narrow the list by search
//! - `Backspace` - Delete the last search character
//!
//! Cancellation exits with status 130 and prints nothing.

use tickbox::item;
use tickbox::prompt::{Config, MultiSelect, PromptResult, Theme};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;

/// Tickbox - an interactive terminal multi-select prompt
#[derive(Parser, Debug)]
#[command(name = "tickbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, navigate, and multi-select items from a categorized list", long_about = None)]
struct Args {
    /// Path to a JSON catalog of selectable items
    #[arg(value_name = "FILE", required_unless_present = "list_themes")]
    file: Option<PathBuf>,

    /// Prompt title shown in the header
    #[arg(short, long, default_value = "Select items")]
    title: String,

    /// Maximum number of visible rows (headers included)
    #[arg(long, value_name = "N")]
    max_visible: Option<usize>,

    /// Theme name (see --list-themes)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// List the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the confirmed selection as a JSON array instead of lines
    #[arg(long)]
    json: bool,

    /// Print debug information about the parsed catalog and exit
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_prompt(args);

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn run_prompt(args: Args) -> Result<()> {
    let config = Config::load();

    let Some(file) = args.file.as_deref() else {
        bail!("Missing catalog file");
    };

    let items = item::load_items(file)?;
    if items.is_empty() {
        eprintln!("Warning: catalog is empty: {}", file.display());
        eprintln!("Add at least one item, e.g.:");
        eprintln!(r#"  [{{ "value": "nginx", "label": "Nginx", "category": "Services" }}]"#);
        std::process::exit(1);
    }

    // Debug mode: print parsed items and exit
    if args.debug {
        println!("=== Parsed Catalog ===");
        for item in &items {
            println!(
                "  Value: {}\n    Label: {}\n    Category: {}\n",
                item.value,
                item.label,
                item.category.as_deref().unwrap_or(item::DEFAULT_CATEGORY)
            );
        }
        println!("Total: {} items", items.len());
        return Ok(());
    }

    let theme = resolve_theme(args.theme.as_deref(), &config)?;

    if !io::stdout().is_terminal() {
        bail!("The interactive prompt requires a terminal (stdout is not a tty)");
    }

    let max_visible = args.max_visible.unwrap_or(config.max_visible);
    let result = MultiSelect::new(args.title, items)
        .max_visible(max_visible)
        .theme(theme)
        .run()
        .context("Prompt failed")?;

    match result {
        PromptResult::Selected(values) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string(&values).context("Failed to encode selection")?
                );
            } else {
                for value in values {
                    println!("{value}");
                }
            }
            Ok(())
        }
        PromptResult::Cancelled => std::process::exit(130),
    }
}

/// Resolve the active theme: an explicit flag must name a real theme, a
/// stale config value falls back to the default with a warning.
fn resolve_theme(flag: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = flag {
        return match Theme::by_name(name) {
            Some(theme) => Ok(theme.clone()),
            None => {
                let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
                bail!("Unknown theme: {name}. Available themes: {}", names.join(", "));
            }
        };
    }

    match Theme::by_name(&config.theme) {
        Some(theme) => Ok(theme.clone()),
        None => {
            eprintln!(
                "Warning: unknown theme {:?} in config, using {}",
                config.theme,
                Theme::default_theme().name
            );
            Ok(Theme::default_theme().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme_flag_overrides_config() {
        let config = Config {
            theme: "Nord".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(Some("Dracula"), &config).expect("resolve");
        assert_eq!(theme.name, "Dracula");
    }

    #[test]
    fn test_resolve_theme_unknown_flag_is_an_error() {
        let config = Config::default();
        let result = resolve_theme(Some("Not A Theme"), &config);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Available themes"), "unexpected error: {msg}");
    }

    #[test]
    fn test_resolve_theme_stale_config_falls_back_to_default() {
        let config = Config {
            theme: "Gone Theme".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(None, &config).expect("resolve");
        assert_eq!(theme.name, Theme::default_theme().name);
    }

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::parse_from(["tickbox", "items.json"]);
        assert_eq!(args.file, Some(PathBuf::from("items.json")));
        assert_eq!(args.title, "Select items");
        assert_eq!(args.max_visible, None);
        assert!(!args.json);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parse_overrides() {
        let args = Args::parse_from([
            "tickbox",
            "items.json",
            "--title",
            "Pick",
            "--max-visible",
            "5",
            "--theme",
            "Nord",
            "--json",
        ]);
        assert_eq!(args.title, "Pick");
        assert_eq!(args.max_visible, Some(5));
        assert_eq!(args.theme.as_deref(), Some("Nord"));
        assert!(args.json);
    }
}
