use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use markt_shared::parse_date;
use markt_sim::{app_config::Config, report, MarketService};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "markt_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;

    // The only clock read in the whole system; the core takes dates as data.
    let start_date = match &config.simulation.start_date {
        Some(raw) => parse_date(raw).with_context(|| format!("invalid start date '{raw}'"))?,
        None => chrono::Local::now().date_naive(),
    };

    tracing::info!(
        %start_date,
        days = config.simulation.days,
        "starting market simulation"
    );

    let mut service = MarketService::new(start_date);
    service
        .stock_from_csv(&config.simulation.csv_path)
        .context("failed to stock the shelf")?;

    println!("{} Welcome to the market! {}", "#".repeat(10), "#".repeat(10));
    for day in service.run(config.simulation.days) {
        println!("{}", report::render_day(&day));
    }

    Ok(())
}
