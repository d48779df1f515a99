pub mod auth;
pub mod bucketlist;
pub mod events;
pub mod journal;
pub mod memories;
pub mod wishlist;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Prints a server payload as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}
