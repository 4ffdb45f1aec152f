//! Walks the tab/filter surface of two screens: the groups screen with its
//! category tabs, and the module hub split by progress.
//!
//! Run with: cargo run -p rada-sdk --example screen_tabs

use rada_sdk::{Client, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::from_config(Config::default())?;

    let groups = client.groups();
    groups.load().await?;
    println!("group tabs: {:?}", groups.filter_keys());
    for key in groups.filter_keys() {
        groups.set_filter(key.clone());
        println!("  [{}] {} groups", key, groups.visible().len());
    }

    let modules = client.modules();
    modules.load().await?;
    for key in ["all", "in-progress", "completed"] {
        modules.set_filter(key);
        println!("[{}]", key);
        for module in modules.visible() {
            println!("  {:>3}% {}", module.progress_pct, module.title);
        }
    }

    Ok(())
}
