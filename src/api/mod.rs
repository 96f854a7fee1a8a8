pub mod yahoo;

pub use yahoo::YahooChartClient;

use crate::error::Result;
use crate::models::Bar;
use std::future::Future;

/// Anything that can produce an ascending daily series for a symbol.
pub trait HistorySource {
    fn fetch_history(&self, symbol: &str) -> impl Future<Output = Result<Vec<Bar>>> + Send;
}
