use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;
use crate::core::Matcher;
use crate::error::AppError;
use crate::models::{SearchResult, TransportValue};
use crate::server;
use crate::services::{load_criteria, ListingRepository};
use std::collections::BTreeMap;

#[derive(Parser, Debug)]
#[command(
    name = "terreno-scout",
    about = "Rank land listings against configurable search criteria",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the best listings for a criteria file
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
    /// Listings inventory (JSON)
    #[arg(long)]
    pub listings: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Listings inventory (JSON)
    #[arg(long)]
    pub listings: Option<PathBuf>,
    /// Search criteria (JSON)
    #[arg(long)]
    pub criteria: Option<PathBuf>,
    /// Number of listings to show, best first
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: Option<u16>,
}

pub async fn run(cli: Cli, settings: Settings) -> Result<(), AppError> {
    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => server::run(args, settings).await,
        Command::Search(args) => run_search(args, &settings),
    }
}

fn run_search(args: SearchArgs, settings: &Settings) -> Result<(), AppError> {
    let listings_path = args.listings.unwrap_or_else(|| settings.data.listings_path.clone());
    let criteria_path = args.criteria.unwrap_or_else(|| settings.data.criteria_path.clone());
    let top = args.top.map(usize::from).unwrap_or(settings.search.default_top);

    let repository = ListingRepository::load(&listings_path)?;
    let criteria = load_criteria(&criteria_path)?;
    let result = Matcher::default().find_matches(repository.listings(), &criteria, top);

    println!("{}", render_results(&result.results));
    Ok(())
}

/// Text report for a ranked shortlist
pub fn render_results(results: &[SearchResult<'_>]) -> String {
    if results.is_empty() {
        return "No listings match the search criteria.".to_string();
    }

    let separator = "-".repeat(60);
    let mut out = String::from("Suggested listings:\n\n");
    for result in results {
        out.push_str(&format_result(result));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

/// Multi-line summary of one scored listing
pub fn format_result(result: &SearchResult<'_>) -> String {
    let listing = result.listing;
    let highlights = &result.highlights;

    let lines = [
        format!("{} - {} ({}, {})", listing.id, listing.name, listing.region, listing.commune),
        format!("  Score: {:.3}", result.score),
        format!("  Locality: {}, {}", listing.locality, listing.province),
        format!("  Area: {:.0} m² ({:.2} ha)", highlights.area_m2, highlights.area_ha),
        format!("  Total price: {} CLP", format_clp(highlights.total_price)),
        format!("  Price/m²: {} CLP", format_clp(highlights.price_per_m2)),
        format!("  Key services: {}", join_or(&highlights.covered_services, "N/A")),
        format!("  Preferred services: {}", join_or(&highlights.preferred_services, "N/A")),
        format!("  Transport: {}", format_transport(&highlights.transport)),
        format!("  Notes: {}", listing.notes),
        format!("  Listing: {}", listing.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("N/D")),
    ];
    lines.join("\n")
}

/// Peso amount with `.` as the thousands separator, e.g. `$ 1.234.567`
pub fn format_clp(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if rounded < 0.0 {
        format!("$ -{}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

fn format_transport(transport: &BTreeMap<String, TransportValue>) -> String {
    if transport.is_empty() {
        return "N/A".to_string();
    }
    transport
        .iter()
        .map(|(mode, value)| format!("{}: {}", mode, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}
