use anyhow::Result;
use dotenv::dotenv;
use market_movers::api::YahooChartClient;
use market_movers::auth::ApiToken;
use market_movers::config::Config;
use market_movers::handlers;
use market_movers::movers::MoversService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    info!("Starting market movers service");
    info!("Chart API: {}", config.chart_base_url);
    info!(
        "History: range={}, interval={}, chart points={}, upstream timeout={}s",
        config.history_range,
        config.history_interval,
        config.chart_max_points,
        config.upstream_timeout.as_secs()
    );

    let client = YahooChartClient::new(&config)?;
    let movers = MoversService::new(client, config.chart_max_points);
    let app = handlers::router(movers, ApiToken::new(config.api_token.clone()));

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
