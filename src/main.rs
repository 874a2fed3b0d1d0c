//! Warmth CLI
//!
//! Usage:
//!   warmth                                   # Dashboard for the demo contacts
//!   warmth --contacts people.json            # Dashboard for your contacts
//!   warmth --contacts people.json --rings    # Radial layout, ring by ring
//!   warmth --search "tech club"              # People search
//!   warmth --today 2026-02-26 --json         # JSON output for a fixed day

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warmth::config::{ConfigError, WarmthConfig};
use warmth::core::{
    demo_contacts, load_contacts, search, section_preview, summarize_contact, ContactSummary,
    Dashboard, LoadError, RingLayoutEngine, ScoredContact, WarmthClassifier,
};
use warmth::types::{Contact, Ring, RingNode};
use warmth::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "warmth",
    version = VERSION,
    about = "Warmth - see which relationships need attention",
    long_about = "Warmth sorts your contacts into rings by how recently you were in touch\n\
                  and suggests who to reach out to this week.\n\n\
                  Modes:\n  \
                  (default)   Dashboard: outreach shortlist, going cold, at risk, local, long distance\n  \
                  --rings     Radial layout with node positions per ring\n  \
                  --search    People search over name, tags and location\n\n\
                  Rings:\n  \
                  WEEKLY    - seen within 7 days\n  \
                  MONTHLY   - seen within 30 days\n  \
                  QUARTERLY - seen within 90 days\n  \
                  DRIFTING  - longer, or never"
)]
struct Args {
    /// JSON file with an array of contacts (demo contacts when omitted)
    #[arg(short, long)]
    contacts: Option<PathBuf>,

    /// Reference day as YYYY-MM-DD (default: today)
    #[arg(short, long, value_parser = parse_day)]
    today: Option<NaiveDate>,

    /// Show the radial ring layout
    #[arg(short, long)]
    rings: bool,

    /// Search people by name, tag or location
    #[arg(short, long)]
    search: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = WarmthConfig::load_or_default(args.config.as_deref())?;
    let contacts = match &args.contacts {
        Some(path) => load_contacts(path)?,
        None => demo_contacts(),
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, contacts = contacts.len(), "starting");

    if let Some(ref query) = args.search {
        run_search(&contacts, query, today, &config, args.json)
    } else if args.rings {
        run_rings(&contacts, today, &config, args.json)
    } else {
        run_dashboard(&contacts, today, &config, args.json)
    }
}

/// Print the dashboard
fn run_dashboard(
    contacts: &[Contact],
    today: NaiveDate,
    config: &WarmthConfig,
    json: bool,
) -> Result<(), CliError> {
    let dashboard = Dashboard::build(contacts, today, config);
    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_header("Dashboard", today);
    let counts: Vec<String> = Ring::ALL
        .iter()
        .map(|ring| {
            format!("{} {}", ring.label(), dashboard.ring_counts.get(*ring))
                .color(ring.color())
                .to_string()
        })
        .collect();
    println!("  {}", counts.join("  |  "));
    println!();

    let classifier = WarmthClassifier::from_config(config);
    print_outreach(&classifier, &dashboard.weekly_outreach, today);
    print_section("Going cold", &dashboard.going_cold);
    print_section("Close friends at risk", &dashboard.close_friends_at_risk);
    print_section("Local", &dashboard.local);
    print_section("Long distance", &dashboard.long_distance);
    Ok(())
}

/// Print the radial layout ring by ring
fn run_rings(
    contacts: &[Contact],
    today: NaiveDate,
    config: &WarmthConfig,
    json: bool,
) -> Result<(), CliError> {
    let engine = RingLayoutEngine::new(config.layout.clone());
    let nodes = engine.layout(contacts, today);
    if json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    print_header("Rings", today);
    let hidden = engine.hidden_counts(contacts, today);
    for ring in Ring::ALL {
        let capacity = engine
            .ring_capacity(ring)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "all".to_string());
        println!(
            "{}",
            format!(
                "{} {} (r={:.0}, max={})",
                ring.emoji(),
                ring.label(),
                engine.ring_radius(ring),
                capacity
            )
            .color(ring.color())
            .bold()
        );
        let on_ring: Vec<&RingNode> = nodes.iter().filter(|n| n.ring == ring).collect();
        if on_ring.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for node in on_ring {
            println!("  {}", node.to_parseable_string());
        }
        if hidden[ring.index()] > 0 {
            println!("  {}", format!("+{} more not shown", hidden[ring.index()]).dimmed());
        }
    }
    Ok(())
}

/// Print people matching a query
fn run_search(
    contacts: &[Contact],
    query: &str,
    today: NaiveDate,
    config: &WarmthConfig,
    json: bool,
) -> Result<(), CliError> {
    let classifier = WarmthClassifier::from_config(config);
    let found: Vec<ContactSummary<'_>> = search(contacts, query)
        .into_iter()
        .map(|c| summarize_contact(&classifier, c, today))
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    print_header("People", today);
    if found.is_empty() {
        println!("  No people match \"{}\"", query);
    }
    for summary in &found {
        print_contact_line(summary);
        println!("      {}", summary.contact.last_contact_text(today).dimmed());
    }
    Ok(())
}

fn print_header(mode: &str, today: NaiveDate) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Warmth v{} - {} - {}", VERSION, mode, today).bold());
    println!("{}", "========================================".bold());
    println!();
}

fn print_outreach(classifier: &WarmthClassifier, list: &[ScoredContact<'_>], today: NaiveDate) {
    println!("{}", format!("This week ({})", list.len()).bold());
    if list.is_empty() {
        println!("  {}", "nobody".dimmed());
    }
    for scored in list {
        let summary = summarize_contact(classifier, scored.contact, today);
        print_contact_line(&summary);
        println!("      {}", format!("score {}", scored.score).dimmed());
    }
    println!();
}

fn print_section(title: &str, list: &[ContactSummary<'_>]) {
    println!("{}", format!("{} ({})", title, list.len()).bold());
    if list.is_empty() {
        println!("  {}", "nobody".dimmed());
    }
    let shown = section_preview(list);
    for summary in shown {
        print_contact_line(summary);
    }
    if list.len() > shown.len() {
        println!("  {}", format!("+{} more", list.len() - shown.len()).dimmed());
    }
    println!();
}

fn print_contact_line(summary: &ContactSummary<'_>) {
    let ring = summary.ring;
    let days = summary
        .days_since
        .map(|d| format!("{}d", d))
        .unwrap_or_else(|| "never".to_string());
    let badge = summary
        .badge
        .map(|b| b.display_label())
        .unwrap_or_default();
    println!(
        "  {} {:<3} {:<20} {:>6}  {}",
        ring.emoji(),
        summary.contact.initials().color(ring.color()),
        summary.contact.name,
        days,
        badge.yellow()
    );
}
