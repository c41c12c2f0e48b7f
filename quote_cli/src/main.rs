//! # Quotient CLI Application
//!
//! Prices a requirements JSON document from the terminal: pass a file
//! path as the first argument, or pipe the document on stdin. Prints
//! the itemized breakdown followed by the quote JSON for export.
//!
//! Any syntactically valid JSON document prices: missing sections and
//! non-numeric fields read as zero, per the engine's permissiveness
//! contract. Only unreadable input or broken JSON is an error.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use quote_core::errors::{QuoteError, QuoteResult};
use quote_core::pricing::generate_quote;
use quote_core::quote::{LineAmount, Quote};
use quote_core::requirements::Requirements;

fn read_document() -> QuoteResult<(String, String)> {
    match env::args().nth(1) {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .map_err(|e| QuoteError::file_error("read", &path, e.to_string()))?;
            Ok((contents, path))
        }
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| QuoteError::file_error("read", "<stdin>", e.to_string()))?;
            Ok((contents, "<stdin>".to_string()))
        }
    }
}

fn price_document(contents: &str) -> QuoteResult<Quote> {
    let requirements: Requirements =
        serde_json::from_str(contents).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })?;
    Ok(generate_quote(&requirements))
}

fn print_quote(quote: &Quote) {
    let symbol = quote.currency.symbol();

    println!("═══════════════════════════════════════");
    println!("  DASHBOARD DEVELOPMENT QUOTE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Cost Breakdown:");
    for item in quote.line_items() {
        match item.amount {
            LineAmount::Priced(amount) => {
                println!("  {:<14} {:>12}", item.label, format!("{}{}", symbol, amount));
            }
            LineAmount::Included => {
                println!("  {:<14} {:>12}", item.label, "Included");
            }
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  TOTAL: {}{} {}",
        symbol, quote.total_price, quote.currency
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for export):");
    if let Ok(json) = serde_json::to_string_pretty(quote) {
        println!("{}", json);
    }
}

fn main() -> ExitCode {
    println!("Quotient CLI - Dashboard Engagement Quoting");
    println!("===========================================");
    println!();

    let (contents, source) = match read_document() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Pricing requirements from {}...", source);
    println!();

    match price_document(&contents) {
        Ok(quote) => {
            print_quote(&quote);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
