// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menu_compare::{
    currency, load_state, Action, AppState, CategoryFilter, MenuConfig,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "menu-compare", version, about = "Compare café menu prices across venues")]
struct Cli {
    /// Config file (defaults to ./menu-compare.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Load the built-in demo venues and items
    #[arg(long, global = true)]
    demo: bool,

    /// Import menu items from a CSV file (venue,address,item,category,price)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,

    /// Print stats, items and category averages for a filter
    Summary(SummaryArgs),
}

#[derive(Debug, clap::Args)]
struct SummaryArgs {
    /// Case-insensitive search over item, venue and category
    #[arg(long, default_value = "")]
    query: String,

    /// Only this category
    #[arg(long)]
    category: Option<String>,

    /// Lowest price
    #[arg(long)]
    min: Option<f64>,

    /// Highest price
    #[arg(long)]
    max: Option<f64>,

    /// Only these venues, by name (repeatable)
    #[arg(long = "venue")]
    venues: Vec<String>,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("❌ {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = MenuConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.demo {
        config.catalog.demo = true;
    }
    if let Some(path) = &cli.csv {
        config.catalog.csv = Some(path.clone());
    }

    let state = load_state(&config).context("failed to load menu data")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_ui_mode(state),
        Command::Summary(args) => run_summary(state, args),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MENU_COMPARE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

/// Translate command-line filters into actions on a fresh state
fn apply_summary_filters(mut state: AppState, args: SummaryArgs) -> Result<AppState> {
    state.dispatch(Action::SetQuery(args.query));

    if let Some(category) = args.category {
        state.dispatch(Action::SetCategory(CategoryFilter::Category(category)));
    }

    let low = args.min.unwrap_or(state.bounds.min);
    let high = args.max.unwrap_or(state.bounds.max);
    state.dispatch(Action::SetPriceRange(low, high));

    if !args.venues.is_empty() {
        let ids = args
            .venues
            .iter()
            .map(|name| {
                state
                    .venues
                    .find_by_name(name)
                    .map(|v| v.id.clone())
                    .with_context(|| format!("no venue named '{}'", name))
            })
            .collect::<Result<Vec<_>>>()?;
        state.venues.set_active(ids)?;
    }

    Ok(state)
}

fn run_summary(state: AppState, args: SummaryArgs) -> Result<()> {
    let state = apply_summary_filters(state, args)?;
    let view = state.view();

    println!("📊 Menu Compare - Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Minimum {}  |  Maximum {}  |  Average {}  |  Median {}",
        currency(view.stats.min),
        currency(view.stats.max),
        currency(view.stats.avg),
        currency(view.stats.median)
    );

    println!("\n🧾 Items ({})", view.filtered.len());
    for item in &view.filtered {
        println!(
            "  {:<28} {:<24} {:<12} {:>9}",
            item.name,
            item.venue_name,
            item.category,
            currency(item.price)
        );
    }
    println!("  {}", view.caption());

    if !view.by_category.is_empty() {
        println!("\n📈 Average Price by Category");
        for agg in &view.by_category {
            println!(
                "  {:<16} {:>9}  ({} items, median {})",
                agg.category,
                currency(agg.avg),
                agg.count,
                currency(agg.median)
            );
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(state: AppState) -> Result<()> {
    println!("🖥️  Loading Menu Compare...\n");
    println!(
        "✓ {} venues, {} items",
        state.venues.len(),
        state.catalog.len()
    );
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(state);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_state: AppState) -> Result<()> {
    anyhow::bail!(
        "TUI mode not available; rebuild with `--features tui` or use the `summary` command"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_compare::{demo, PriceBounds};

    fn demo_state() -> AppState {
        let (venues, catalog) = demo();
        AppState::with_data(PriceBounds::default(), venues, catalog)
    }

    fn args(query: &str) -> SummaryArgs {
        SummaryArgs {
            query: query.to_string(),
            category: None,
            min: None,
            max: None,
            venues: vec![],
        }
    }

    #[test]
    fn test_cli_parses_summary() {
        let cli = Cli::try_parse_from([
            "menu-compare",
            "--demo",
            "summary",
            "--category",
            "Coffee",
            "--venue",
            "Bean & Bloom",
            "--venue",
            "Riverfront Roasters",
        ])
        .unwrap();

        assert!(cli.demo);
        match cli.command {
            Some(Command::Summary(args)) => {
                assert_eq!(args.category.as_deref(), Some("Coffee"));
                assert_eq!(args.venues.len(), 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_summary_filters_by_venue_name() {
        let mut summary = args("");
        summary.venues = vec!["Riverfront Roasters".to_string()];

        let state = apply_summary_filters(demo_state(), summary).unwrap();
        let ids: Vec<String> = state.view().filtered.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["i3", "i4"]);
    }

    #[test]
    fn test_summary_unknown_venue_is_error() {
        let mut summary = args("");
        summary.venues = vec!["Nope".to_string()];

        assert!(apply_summary_filters(demo_state(), summary).is_err());
    }

    #[test]
    fn test_summary_repeated_venue_counts_once() {
        let mut summary = args("");
        summary.venues = vec!["Market Square Café".to_string(), "Market Square Café".to_string()];

        let state = apply_summary_filters(demo_state(), summary).unwrap();
        let ids: Vec<String> = state.view().filtered.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec!["i6"]);
    }

    #[test]
    fn test_summary_price_bounds() {
        let mut summary = args("");
        summary.min = Some(5.0);

        let state = apply_summary_filters(demo_state(), summary).unwrap();
        assert_eq!(state.view().filtered.len(), 2);
    }
}
