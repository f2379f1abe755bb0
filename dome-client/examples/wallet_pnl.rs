use anyhow::Result;
use dome_client::{DomeClient, Granularity};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Wallet PnL Example ===\n");

    let wallet = "0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b";
    let now = chrono::Utc::now().timestamp();

    // Daily PnL for the last 30 days
    let response = client
        .get_wallet_pnl(wallet, Granularity::Day, Some(now - 30 * 86_400), Some(now))
        .await?;

    println!("Wallet: {}", response.wallet_address);
    println!("Data points: {}", response.len());

    match response.current_pnl_dollars() {
        Some(current) => println!("Current PnL: ${current:.2}"),
        None => println!("No PnL data for this period"),
    }

    println!("Peak PnL:     ${:.2}", response.peak_pnl_dollars());
    println!("Trough PnL:   ${:.2}", response.trough_pnl_dollars());
    println!(
        "Max drawdown: ${:.2} ({:.1}%)",
        response.max_drawdown_dollars(),
        response.max_drawdown_percent()
    );
    println!(
        "Win rate: {:.1}% ({} profit / {} loss / {} break-even)",
        response.win_rate(),
        response.profit_days(),
        response.loss_days(),
        response.break_even_days()
    );
    println!("Average daily PnL: ${:.2}", response.average_daily_pnl_dollars());

    if let (Some(best), Some(worst)) = (response.best_day(), response.worst_day()) {
        println!("Best day:  {:+.2} USD", best.change_dollars());
        println!("Worst day: {:+.2} USD", worst.change_dollars());
    }

    println!("\nDaily breakdown:");
    for point in &response.pnl_over_time {
        let status = if point.is_profit() {
            "profit"
        } else if point.is_loss() {
            "loss"
        } else {
            "break-even"
        };
        println!(
            "  {}  ${:>10.2}  ({status})",
            point
                .datetime()
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            point.pnl_dollars(),
        );
    }

    Ok(())
}
