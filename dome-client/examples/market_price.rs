use anyhow::Result;
use dome_client::DomeClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Market Price Example ===\n");

    let token_id = "58519484510520807142687824915233722607092670035910114837910294451210534222702";

    // Latest price
    let price = client.get_market_price(token_id, None).await?;
    println!(
        "Latest price: {} ({})",
        price.price,
        if price.is_current() { "current" } else { "stale" }
    );

    // Price one hour ago
    let an_hour_ago = chrono::Utc::now().timestamp() - 3600;
    let historical = client.get_market_price(token_id, Some(an_hour_ago)).await?;
    println!(
        "Price an hour ago: {} at {}",
        historical.price,
        historical
            .timestamp()
            .map(|t| t.to_rfc3339())
            .unwrap_or_default()
    );

    let change = price.price - historical.price;
    println!("Change over the hour: {change:+.4}");

    Ok(())
}
