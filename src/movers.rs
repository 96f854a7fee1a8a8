use crate::api::HistorySource;
use crate::chart::build_chart_payload;
use crate::error::Result;
use crate::models::{Bar, ErrorEntry, MoversResponse, StockEntry, SymbolSummary};
use crate::strategy;
use crate::tickers;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub const MOVERS_COUNT: usize = 5;

/// What one symbol contributed to a request.
#[derive(Debug)]
pub enum SymbolOutcome {
    Summary(SymbolSummary, Vec<Bar>),
    Failed(ErrorEntry),
    /// Too little history; the symbol is left out of every collection.
    Omitted,
}

pub struct MoversService<S> {
    source: S,
    chart_max_points: usize,
}

impl<S: HistorySource> MoversService<S> {
    pub fn new(source: S, chart_max_points: usize) -> Self {
        Self {
            source,
            chart_max_points,
        }
    }

    pub async fn evaluate_symbol(&self, symbol: &str) -> SymbolOutcome {
        match self.analyze_symbol(symbol).await {
            Ok(Some((summary, bars))) => SymbolOutcome::Summary(summary, bars),
            Ok(None) => {
                debug!("Not enough history for {}, skipping", symbol);
                SymbolOutcome::Omitted
            }
            Err(e) => {
                warn!("Failed to evaluate {}: {}", symbol, e);
                SymbolOutcome::Failed(ErrorEntry {
                    symbol: symbol.to_string(),
                    error: e.to_string(),
                    name: tickers::display_name(symbol),
                    logo_url: tickers::logo_url(symbol),
                })
            }
        }
    }

    async fn analyze_symbol(&self, symbol: &str) -> Result<Option<(SymbolSummary, Vec<Bar>)>> {
        let bars = self.source.fetch_history(symbol).await?;
        Ok(strategy::analyze(symbol, &bars)?.map(|summary| (summary, bars)))
    }

    /// Evaluates every symbol in order, one at a time.
    pub async fn summarize<'a, I>(&self, symbols: I) -> MoversResponse
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all_stocks = Vec::new();
        let mut history_cache: HashMap<String, Vec<Bar>> = HashMap::new();
        let mut omitted = 0usize;

        for symbol in symbols {
            match self.evaluate_symbol(symbol).await {
                SymbolOutcome::Summary(summary, bars) => {
                    history_cache.insert(summary.symbol.clone(), bars);
                    all_stocks.push(StockEntry::Summary(summary));
                }
                SymbolOutcome::Failed(entry) => all_stocks.push(StockEntry::Error(entry)),
                SymbolOutcome::Omitted => omitted += 1,
            }
        }

        let response = build_response(all_stocks, &history_cache, self.chart_max_points);

        info!(
            "Evaluated {} symbols: {} summaries, {} errors, {} omitted",
            response.all_stocks.len() + omitted,
            response.all_stocks.iter().filter(|e| e.as_summary().is_some()).count(),
            response.all_stocks.iter().filter(|e| e.as_summary().is_none()).count(),
            omitted
        );

        response
    }

    pub async fn summarize_all(&self) -> MoversResponse {
        self.summarize(tickers::symbols()).await
    }
}

/// Valid summaries ordered by `change_pct`, biggest gain first. Ties keep
/// their original order.
pub fn rank_by_change(all_stocks: &[StockEntry]) -> Vec<SymbolSummary> {
    let mut ranked: Vec<SymbolSummary> = all_stocks
        .iter()
        .filter_map(StockEntry::as_summary)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
    ranked
}

/// Head and tail of the ranked list. Both come from the same descending
/// list, so with `count` or fewer entries they are identical.
pub fn select_movers(
    ranked: &[SymbolSummary],
    count: usize,
) -> (Vec<SymbolSummary>, Vec<SymbolSummary>) {
    let top = ranked.iter().take(count).cloned().collect();
    let bottom = ranked[ranked.len().saturating_sub(count)..].to_vec();
    (top, bottom)
}

pub fn build_response(
    all_stocks: Vec<StockEntry>,
    history_cache: &HashMap<String, Vec<Bar>>,
    chart_max_points: usize,
) -> MoversResponse {
    let ranked = rank_by_change(&all_stocks);
    let (top_5, bottom_5) = select_movers(&ranked, MOVERS_COUNT);

    let leader_chart = top_5.first().and_then(|leader| {
        history_cache
            .get(&leader.symbol)
            .map(|bars| build_chart_payload(&leader.symbol, bars, chart_max_points))
    });

    MoversResponse {
        top_5,
        bottom_5,
        leader_chart,
        all_stocks,
    }
}
