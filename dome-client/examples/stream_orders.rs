use std::time::Duration;

use anyhow::Result;
use dome_client::DomeWebSocket;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dome_client=debug".into()),
        )
        .init();

    println!("=== Dome API Order Stream Example ===\n");

    let mut ws = DomeWebSocket::from_env()
        .on_ack(|sid| println!("[ack] subscription confirmed: {sid:?}"))
        .on_event(|data| {
            println!(
                "[event] {} {} @ {} by {}",
                data["side"].as_str().unwrap_or("?"),
                data["market_slug"].as_str().unwrap_or("?"),
                data["price"],
                data["user"].as_str().unwrap_or("?"),
            );
        });

    // Watch one wallet's orders for a minute, then disconnect
    ws.run(Some(Duration::from_secs(60)), |sub| {
        sub.subscribe(
            "polymarket",
            "orders",
            json!({"users": ["0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b"]}),
        );
    })
    .await?;

    println!(
        "\nStream closed with {} confirmed subscription(s)",
        ws.subscription_ids().len()
    );

    Ok(())
}
