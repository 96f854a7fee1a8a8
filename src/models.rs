use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily OHLCV observation. `close` is always present once a bar is part
/// of a series; the other fields may be missing upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl SignalType {
    pub fn trend_text(&self) -> &'static str {
        match self {
            SignalType::Buy => "Likely to go UP",
            SignalType::Sell => "Likely to go DOWN",
            SignalType::Hold => "Sideways / Unclear",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SymbolSummary {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_pct: f64,
    pub short_ma: f64,
    pub long_ma: f64,
    pub signal: SignalType,
    pub trend_text: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ErrorEntry {
    pub symbol: String,
    pub error: String,
    pub name: String,
    pub logo_url: Option<String>,
}

/// An `all_stocks` slot. Error entries carry no `change_pct`, which is what
/// keeps them out of the ranking.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StockEntry {
    Summary(SymbolSummary),
    Error(ErrorEntry),
}

impl StockEntry {
    pub fn symbol(&self) -> &str {
        match self {
            StockEntry::Summary(s) => &s.symbol,
            StockEntry::Error(e) => &e.symbol,
        }
    }

    pub fn as_summary(&self) -> Option<&SymbolSummary> {
        match self {
            StockEntry::Summary(s) => Some(s),
            StockEntry::Error(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ChartPayload {
    pub symbol: String,
    pub timestamps: Vec<String>,
    pub close: Vec<f64>,
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MoversResponse {
    pub top_5: Vec<SymbolSummary>,
    pub bottom_5: Vec<SymbolSummary>,
    pub leader_chart: Option<ChartPayload>,
    pub all_stocks: Vec<StockEntry>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
