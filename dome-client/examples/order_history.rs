use anyhow::Result;
use dome_client::{DomeClient, OrderHistoryParams};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Order History Example ===\n");

    // Recent orders for one market
    let params = OrderHistoryParams {
        market_slug: Some("bitcoin-up-or-down-july-25-8pm-et".to_string()),
        limit: Some(10),
        ..OrderHistoryParams::default()
    };

    let response = client.get_order_history(&params).await?;
    println!(
        "Fetched {} of {} orders (has_more: {})",
        response.len(),
        response.total_orders(),
        response.has_more()
    );

    for order in &response.orders {
        println!(
            "  {:?} {} shares of {} at {} ({})",
            order.side,
            order.shares_normalized,
            order.token_id,
            order.price,
            order
                .datetime()
                .map(|t| t.to_rfc3339())
                .unwrap_or_default()
        );
    }

    // Cursor pagination: the key replaces offset in the next request
    if let Some(key) = response.pagination.pagination_key.clone() {
        let next_page = client
            .get_order_history(&OrderHistoryParams {
                pagination_key: Some(key),
                limit: Some(10),
                ..OrderHistoryParams::default()
            })
            .await?;
        println!("Next page has {} orders", next_page.len());
    }

    Ok(())
}
