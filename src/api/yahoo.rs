use crate::api::HistorySource;
use crate::config::Config;
use crate::error::{MoversError, Result};
use crate::models::Bar;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

#[derive(Clone)]
pub struct YahooChartClient {
    client: Client,
    base_url: String,
    range: String,
    interval: String,
    timeout: Duration,
}

impl YahooChartClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.chart_base_url.clone(),
            range: config.history_range.clone(),
            interval: config.history_interval.clone(),
            timeout: config.upstream_timeout,
        })
    }

    pub async fn fetch_daily_bars(&self, symbol: &str) -> Result<Vec<Bar>> {
        let url = format!(
            "{}/{}?interval={}&range={}",
            self.base_url,
            urlencoding::encode(symbol),
            urlencoding::encode(&self.interval),
            urlencoding::encode(&self.range)
        );

        debug!("Fetching chart history for {}: {}", symbol, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MoversError::from_transport(e, self.timeout))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MoversError::from_transport(e, self.timeout))?;

        if !status.is_success() {
            let message = upstream_error_message(&text)
                .unwrap_or_else(|| format!("Chart API returned status: {}", status));
            warn!("[CHART] {} rejected with {}: {}", symbol, status, message);
            return Err(MoversError::ChartStatus {
                status: status.as_u16(),
                message,
            });
        }

        let bars = parse_chart_body(&text)?;
        debug!("[CHART] {}: {} bars", symbol, bars.len());
        Ok(bars)
    }
}

impl HistorySource for YahooChartClient {
    async fn fetch_history(&self, symbol: &str) -> Result<Vec<Bar>> {
        self.fetch_daily_bars(symbol).await
    }
}

fn upstream_error_message(text: &str) -> Option<String> {
    let envelope: ChartEnvelope = serde_json::from_str(text).ok()?;
    let error = envelope.chart.error?;
    match (error.code, error.description) {
        (Some(code), Some(description)) => Some(format!("{}: {}", code, description)),
        (None, Some(description)) => Some(description),
        (Some(code), None) => Some(code),
        (None, None) => None,
    }
}

/// Turns a chart response body into an ascending series, dropping bars with
/// no close.
pub fn parse_chart_body(text: &str) -> Result<Vec<Bar>> {
    let envelope: ChartEnvelope = serde_json::from_str(text)?;

    let upstream_error = envelope
        .chart
        .error
        .and_then(|e| e.description)
        .unwrap_or_else(|| "No chart result returned".to_string());

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MoversError::invalid_data(upstream_error))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| MoversError::invalid_data("No quote data returned"))?;

    let expected = result.timestamp.len();
    let lengths = [
        quote.open.len(),
        quote.high.len(),
        quote.low.len(),
        quote.close.len(),
        quote.volume.len(),
    ];
    if lengths.iter().any(|&len| len != expected) {
        return Err(MoversError::invalid_data(format!(
            "Quote arrays do not match {} timestamps: {:?}",
            expected, lengths
        )));
    }

    let mut bars = Vec::with_capacity(expected);
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(close) = quote.close[i] else {
            continue;
        };

        let timestamp = Utc.timestamp_opt(ts, 0).single().ok_or_else(|| {
            MoversError::invalid_data(format!("Invalid timestamp: {}", ts))
        })?;

        bars.push(Bar {
            timestamp,
            open: quote.open[i],
            high: quote.high[i],
            low: quote.low[i],
            close,
            volume: quote.volume[i].map(|v| v as u64),
        });
    }

    bars.sort_by_key(|b| b.timestamp);
    Ok(bars)
}
