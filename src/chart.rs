use crate::models::{Bar, ChartPayload};
use chrono::SecondsFormat;

pub const DEFAULT_MAX_POINTS: usize = 20;

/// Chart arrays for the most recent `max_points` bars, oldest first.
pub fn build_chart_payload(symbol: &str, bars: &[Bar], max_points: usize) -> ChartPayload {
    let tail = &bars[bars.len().saturating_sub(max_points)..];

    ChartPayload {
        symbol: symbol.to_string(),
        timestamps: tail
            .iter()
            .map(|b| b.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
            .collect(),
        close: tail.iter().map(|b| b.close).collect(),
        open: tail.iter().map(|b| b.open).collect(),
        high: tail.iter().map(|b| b.high).collect(),
        low: tail.iter().map(|b| b.low).collect(),
        volume: tail.iter().map(|b| b.volume).collect(),
    }
}
