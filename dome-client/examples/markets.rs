use anyhow::Result;
use dome_client::{DomeClient, MarketsParams};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Markets Example ===\n");

    let params = MarketsParams {
        tags: vec!["crypto".to_string()],
        limit: Some(20),
        ..MarketsParams::default()
    };

    let response = client.get_markets(&params).await?;
    println!(
        "Fetched {} of {} markets",
        response.len(),
        response.total_markets()
    );

    for market in &response.markets {
        println!("\n{} [{:?}]", market.title, market.status);
        println!("  slug: {}", market.market_slug);
        println!("  volume: {:.0}, liquidity: {:.0}", market.volume, market.liquidity);
        if let (Some(yes), Some(no)) = (market.yes_token_id(), market.no_token_id()) {
            println!("  yes token: {yes}");
            println!("  no token:  {no}");
        }
        if let Some(end) = market.end_date() {
            println!("  ends: {}", end.to_rfc3339());
        }
    }

    Ok(())
}
