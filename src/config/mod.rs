use crate::chart::DEFAULT_MAX_POINTS;
use crate::error::{MoversError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub chart_base_url: String,
    pub history_range: String,
    pub history_interval: String,
    pub chart_max_points: usize,
    pub user_agent: String,
    pub upstream_timeout: Duration,
    pub api_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            chart_base_url: DEFAULT_CHART_BASE_URL.to_string(),
            history_range: "1mo".to_string(),
            history_interval: "1d".to_string(),
            chart_max_points: DEFAULT_MAX_POINTS,
            // Upstream rejects requests without a browser-like agent
            user_agent: "Mozilla/5.0".to_string(),
            upstream_timeout: Duration::from_secs(10),
            api_token: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let port = env::var("PORT")
            .unwrap_or_else(|_| defaults.port.to_string())
            .parse::<u16>()
            .map_err(|_| MoversError::ConfigError("Invalid PORT".to_string()))?;

        let chart_max_points = env::var("CHART_MAX_POINTS")
            .unwrap_or_else(|_| defaults.chart_max_points.to_string())
            .parse::<usize>()
            .map_err(|_| MoversError::ConfigError("Invalid CHART_MAX_POINTS".to_string()))?;

        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.upstream_timeout.as_secs().to_string())
            .parse::<u64>()
            .map_err(|_| MoversError::ConfigError("Invalid UPSTREAM_TIMEOUT_SECS".to_string()))?;

        let api_token = env::var("MOVERS_API_TOKEN")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if api_token.is_empty() {
            return Err(MoversError::ConfigError(
                "MOVERS_API_TOKEN must be set".to_string(),
            ));
        }

        Ok(Self {
            port,
            chart_base_url: env::var("CHART_BASE_URL")
                .unwrap_or(defaults.chart_base_url)
                .trim_end_matches('/')
                .to_string(),
            history_range: env::var("HISTORY_RANGE").unwrap_or(defaults.history_range),
            history_interval: env::var("HISTORY_INTERVAL").unwrap_or(defaults.history_interval),
            chart_max_points,
            user_agent: env::var("UPSTREAM_USER_AGENT").unwrap_or(defaults.user_agent),
            upstream_timeout: Duration::from_secs(timeout_secs),
            api_token,
        })
    }
}
