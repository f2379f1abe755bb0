use anyhow::Result;
use dome_client::{CandleInterval, DomeClient};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Candlestick Example ===\n");

    let condition_id = "0x4567b275e6b667a6217f5cb4f06a797d3a1eaf1d0281fb5bc8c75e2046ae7e57";
    let now = chrono::Utc::now().timestamp();

    // Hourly candles for the last day
    let response = client
        .get_candlesticks(condition_id, now - 86_400, now, CandleInterval::OneHour)
        .await?;

    println!(
        "Fetched {} candlesticks for token {:?}",
        response.len(),
        response.token_id
    );
    println!("Total volume:   {:.2}", response.total_volume());
    println!("Average volume: {:.2}", response.average_volume());
    println!("Price range:    {:.4}", response.price_range());
    println!("Trend:          {:?}", response.price_trend());

    for candle in &response.candlesticks {
        let Some(price) = &candle.price else { continue };
        println!(
            "  {} O:{:?} H:{:?} L:{:?} C:{:?} ({:+.2}%) vol {:.1}",
            candle
                .end_time()
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            price.open,
            price.high,
            price.low,
            price.close,
            candle.price_change_percent(),
            candle.volume,
        );
        if let (Some(ask), Some(bid)) = (&candle.yes_ask, &candle.yes_bid) {
            println!(
                "      ask spread {:.6}, bid spread {:.6}",
                ask.spread(),
                bid.spread()
            );
        }
    }

    // Close-price series for charting
    for (time, close) in response.time_series() {
        println!("  [{}, {close}]", time.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}
