use anyhow::Result;
use dome_client::{ActivityParams, DomeClient};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DomeClient::from_env();

    println!("=== Dome API Activity Example ===\n");

    let user = "0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b";
    let now = chrono::Utc::now().timestamp();

    let params = ActivityParams {
        start_time: Some(now - 7 * 86_400),
        end_time: Some(now),
        limit: Some(25),
        ..ActivityParams::default()
    };

    let response = client.get_activity(user, &params).await?;
    println!(
        "Found {} of {} activity records for {}",
        response.len(),
        response.total_activities(),
        user
    );

    for activity in &response.activities {
        println!(
            "  {:?} {} @ {} on {}",
            activity.side, activity.shares_normalized, activity.price, activity.market_slug
        );
    }

    let buys = response.activities.iter().filter(|a| a.is_buy()).count();
    let sells = response.activities.iter().filter(|a| a.is_sell()).count();
    println!("\n{buys} buys, {sells} sells, {} other", response.len() - buys - sells);

    Ok(())
}
