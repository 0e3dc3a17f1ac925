//! Walks one laundry bag through the desk, the way the service worker's
//! dashboard would.
//!
//! Run with: `RUST_LOG=debug cargo run --example dashboard`

use anyhow::Result;
use laundry::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let desk = OrderDesk::new(InMemoryOrderService::new(), LaundryConfig::default());
    let now = Utc::now();

    let status = desk.service_status(&chrono::Local::now());
    println!("Service is {}", status.label);

    let order = desk.submit("b-001", "5", &now).await?;
    println!("Submitted {} with {} clothes", order.bag_number, order.clothes_count);

    desk.submit("B-002", "3", &now).await?;
    desk.submit("G-003", "7", &now).await?;

    desk.edit_clothes_count(&order.id, "6").await?;
    desk.mark_received(&order.id, Utc::now()).await?;
    let ready = desk.mark_ready(&order.id, Utc::now()).await?;
    println!("{} is now {}", ready.bag_number, ready.status.label());

    if let Err(e) = desk.edit_clothes_count(&order.id, "10").await {
        println!("Edit refused: {}", serde_json::to_string(&e.to_response())?);
    }

    for tab in StatusTab::ALL_TABS {
        let view = desk.dashboard(&OrderQuery::new(tab, "")).await?;
        println!("{:<12} {}", tab.label(), view.counts.for_tab(tab));
        for order in &view.orders {
            println!(
                "    {:<8} clothes={:<3} {}",
                order.bag_number,
                order.clothes_count,
                order.status.label()
            );
        }
    }

    Ok(())
}
