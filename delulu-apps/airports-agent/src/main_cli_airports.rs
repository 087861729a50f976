//!  Delulu Airports Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! CLI for airport lookup.

use anyhow::{Context, Result};
use clap::Parser;
use delulu_airports_agent::{
    AirportHit, AirportSearchRequest, AirportSearchResponse, find_airports, open_index,
};
use std::cmp::max;
use std::path::PathBuf;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "delulu-airports")]
#[command(author, version, about = "Look up airports by IATA code, airport name or city", long_about = None)]
struct CliArgs {
    /// Airport code, airport name or city (e.g., LAX, Heathrow, "New York")
    query: String,

    /// Maximum number of airports to show (1-50)
    #[arg(short, long, default_value = "5")]
    limit: u64,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,

    /// JSON airport dataset to search instead of the bundled one
    #[arg(long, env = "DELULU_AIRPORTS_FILE")]
    airports_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(100))
}

fn tier_label(tier: u8) -> &'static str {
    match tier {
        0 => "exact code",
        1 => "exact",
        2 => "prefix",
        _ => "substring",
    }
}

/// Cut `s` to `width` chars, marking the cut with an ellipsis.
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Name and location column widths, shrunk to the terminal when needed.
fn calc_column_widths(hits: &[AirportHit]) -> (usize, usize) {
    let mut name_w = 4;
    let mut loc_w = 8;
    for hit in hits {
        name_w = max(name_w, hit.name.chars().count());
        loc_w = max(loc_w, hit.location().chars().count());
    }

    // "#", code and match columns plus separators
    let fixed = 4 + 2 + 4 + 2 + 2 + 2 + 20;
    let available = get_terminal_width().saturating_sub(fixed);
    if name_w + loc_w > available && available > 30 {
        let ratio = available as f64 / (name_w + loc_w) as f64;
        name_w = max((name_w as f64 * ratio).floor() as usize, 12);
        loc_w = max((loc_w as f64 * ratio).floor() as usize, 12);
    }
    (name_w, loc_w)
}

fn render_results(resp: &AirportSearchResponse) {
    println!(
        "================================================================\n  🏢  Airports matching \"{}\"\n================================================================\n",
        resp.query
    );
    println!("📊 Found {} airport(s)\n", resp.count);

    let (nw, lw) = calc_column_widths(&resp.airports);
    println!(
        "  {:>2}  {:<4}  {:<nw$}  {:<lw$}  MATCH",
        "#", "CODE", "NAME", "LOCATION"
    );
    println!("{}", dash_bar());
    for (i, hit) in resp.airports.iter().enumerate() {
        println!(
            "  {:>2}  {:<4}  {:<nw$}  {:<lw$}  {} ({})",
            i + 1,
            hit.code,
            fit(&hit.name, nw),
            fit(&hit.location(), lw),
            hit.matched_field,
            tier_label(hit.tier)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    tracing::debug!("Args: {:?}", args);

    let request = AirportSearchRequest::new(&args.query, Some(args.limit))
        .context("Invalid airport search")?;
    let loaded = open_index(args.airports_file.as_deref())?;
    let response = find_airports(&loaded.index, &request).context("Airport search failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&response).context("Failed to encode response")?;
        println!("{}", json);
    } else if response.is_empty() {
        println!("❌ No airports found for \"{}\"", response.query);
    } else {
        render_results(&response);
    }

    Ok(())
}
