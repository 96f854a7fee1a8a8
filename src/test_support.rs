use crate::models::Bar;
use chrono::{TimeZone, Utc};

/// Daily bars starting 2024-05-01 13:30 UTC with every price equal to the close.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            timestamp: Utc
                .timestamp_opt(1_714_570_200 + i as i64 * 86_400, 0)
                .unwrap(),
            open: Some(close),
            high: Some(close),
            low: Some(close),
            close,
            volume: Some(1_000 + i as u64),
        })
        .collect()
}
