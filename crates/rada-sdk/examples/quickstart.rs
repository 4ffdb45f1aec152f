//! Minimal end-to-end walk: connect, load the buddies list, filter it,
//! and print rows the way a screen would render them.
//!
//! Run with: cargo run -p rada-sdk --example quickstart

use chrono::Utc;
use rada_sdk::{Client, Config, format_relative};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default config selects the fixtures backend; point `backend = "http"`
    // plus `http.base_url` at a live backend to switch.
    let client = Client::from_config(Config::default())?;
    println!("backend: {}", client.gateway_id());

    let buddies = client.buddies();
    buddies.load().await?;

    buddies.set_filter("online");
    let now = Utc::now();
    for buddy in buddies.visible() {
        let seen = buddy
            .last_active
            .map(|ts| format_relative(ts, now))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:<12} lvl {:<2} {}",
            buddy.username, buddy.level, seen
        );
    }

    Ok(())
}
