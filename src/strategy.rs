use crate::error::{MoversError, Result};
use crate::indicators::{
    calculate_change_percent, calculate_sma, round2, LONG_MA_PERIOD, SHORT_MA_PERIOD,
};
use crate::models::{Bar, SignalType, SymbolSummary};
use crate::tickers;

/// Minimum one-day move, in percent, before a crossover counts as a signal.
pub const CHANGE_THRESHOLD_PCT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendIndicators {
    pub current_price: f64,
    pub change_pct: f64,
    pub short_ma: f64,
    pub long_ma: f64,
}

pub fn calculate_trend_indicators(closes: &[f64]) -> Result<Option<TrendIndicators>> {
    let Some(change_pct) = calculate_change_percent(closes) else {
        return Ok(None);
    };

    if closes[closes.len() - 2] == 0.0 {
        return Err(MoversError::invalid_data("previous close is zero"));
    }

    // Both averages are defined whenever the change is
    let (Some(short_ma), Some(long_ma)) = (
        calculate_sma(closes, SHORT_MA_PERIOD),
        calculate_sma(closes, LONG_MA_PERIOD),
    ) else {
        return Ok(None);
    };

    Ok(Some(TrendIndicators {
        current_price: closes[closes.len() - 1],
        change_pct,
        short_ma,
        long_ma,
    }))
}

/// Strict inequalities on both sides: a move of exactly the threshold holds.
pub fn classify(indicators: &TrendIndicators) -> SignalType {
    if indicators.change_pct > CHANGE_THRESHOLD_PCT && indicators.short_ma > indicators.long_ma {
        SignalType::Buy
    } else if indicators.change_pct < -CHANGE_THRESHOLD_PCT
        && indicators.short_ma < indicators.long_ma
    {
        SignalType::Sell
    } else {
        SignalType::Hold
    }
}

/// Builds the per-symbol summary. `Ok(None)` means there is not enough
/// history to say anything, which callers treat differently from an error.
pub fn analyze(symbol: &str, bars: &[Bar]) -> Result<Option<SymbolSummary>> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let Some(indicators) = calculate_trend_indicators(&closes)? else {
        return Ok(None);
    };

    let signal = classify(&indicators);

    Ok(Some(SymbolSummary {
        symbol: symbol.to_string(),
        name: tickers::display_name(symbol),
        price: round2(indicators.current_price),
        change_pct: round2(indicators.change_pct),
        short_ma: round2(indicators.short_ma),
        long_ma: round2(indicators.long_ma),
        signal,
        trend_text: signal.trend_text().to_string(),
        logo_url: tickers::logo_url(symbol),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bars_from_closes;

    fn indicators(change_pct: f64, short_ma: f64, long_ma: f64) -> TrendIndicators {
        TrendIndicators {
            current_price: 100.0,
            change_pct,
            short_ma,
            long_ma,
        }
    }

    #[test]
    fn threshold_moves_hold() {
        assert_eq!(classify(&indicators(0.5, 110.0, 100.0)), SignalType::Hold);
        assert_eq!(classify(&indicators(-0.5, 90.0, 100.0)), SignalType::Hold);
    }

    #[test]
    fn crossover_with_move_signals() {
        assert_eq!(classify(&indicators(0.51, 110.0, 100.0)), SignalType::Buy);
        assert_eq!(classify(&indicators(-0.51, 90.0, 100.0)), SignalType::Sell);
        // direction disagrees with the crossover
        assert_eq!(classify(&indicators(2.0, 90.0, 100.0)), SignalType::Hold);
        assert_eq!(classify(&indicators(-2.0, 110.0, 100.0)), SignalType::Hold);
        assert_eq!(classify(&indicators(2.0, 100.0, 100.0)), SignalType::Hold);
    }

    #[test]
    fn boundary_change_from_real_series_holds() {
        // 200 -> 201 is exactly +0.5% with the short average above the long one
        let bars = bars_from_closes(&[100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 200.0, 201.0]);
        let summary = analyze("AAPL", &bars).unwrap().unwrap();
        assert_eq!(summary.change_pct, 0.5);
        assert!(summary.short_ma > summary.long_ma);
        assert_eq!(summary.signal, SignalType::Hold);
        assert_eq!(summary.trend_text, "Sideways / Unclear");

        let bars = bars_from_closes(&[300.0, 300.0, 300.0, 300.0, 300.0, 200.0, 199.0]);
        let summary = analyze("AAPL", &bars).unwrap().unwrap();
        assert_eq!(summary.change_pct, -0.5);
        assert!(summary.short_ma < summary.long_ma);
        assert_eq!(summary.signal, SignalType::Hold);
    }

    #[test]
    fn ascending_series_uses_both_windows() {
        let closes: Vec<f64> = (1..=25).map(|p| p as f64).collect();
        let summary = analyze("NVDA", &bars_from_closes(&closes)).unwrap().unwrap();

        assert_eq!(summary.price, 25.0);
        assert_eq!(summary.short_ma, 23.0);
        assert_eq!(summary.long_ma, 15.5);
        // 24 -> 25
        assert_eq!(summary.change_pct, 4.17);
        assert_eq!(summary.signal, SignalType::Buy);
        assert_eq!(summary.trend_text, "Likely to go UP");
        assert_eq!(summary.name, "NVIDIA Corporation");
    }

    #[test]
    fn falling_series_sells() {
        let closes: Vec<f64> = (1..=10).rev().map(|p| p as f64 * 10.0).collect();
        let summary = analyze("INTC", &bars_from_closes(&closes)).unwrap().unwrap();
        assert_eq!(summary.signal, SignalType::Sell);
        assert_eq!(summary.trend_text, "Likely to go DOWN");
        assert_eq!(summary.change_pct, -50.0);
    }

    #[test]
    fn short_history_averages_everything() {
        let summary = analyze("KO", &bars_from_closes(&[60.0, 61.0, 62.0])).unwrap().unwrap();
        assert_eq!(summary.short_ma, 61.0);
        assert_eq!(summary.long_ma, 61.0);
        // equal averages never cross
        assert_eq!(summary.signal, SignalType::Hold);
    }

    #[test]
    fn single_close_is_insufficient() {
        assert_eq!(analyze("AAPL", &bars_from_closes(&[100.0])).unwrap(), None);
        assert_eq!(analyze("AAPL", &[]).unwrap(), None);
    }

    #[test]
    fn zero_previous_close_is_an_error() {
        let err = analyze("AAPL", &bars_from_closes(&[5.0, 0.0, 1.0])).unwrap_err();
        assert!(matches!(err, MoversError::InvalidPriceData { .. }));
    }

    #[test]
    fn unknown_symbol_uses_symbol_as_name() {
        let summary = analyze("ZZZZ", &bars_from_closes(&[1.0, 2.0])).unwrap().unwrap();
        assert_eq!(summary.name, "ZZZZ");
        assert_eq!(summary.logo_url, None);
    }

    #[test]
    fn presentation_values_are_rounded() {
        let summary = analyze("AAPL", &bars_from_closes(&[3.0, 3.333333])).unwrap().unwrap();
        assert_eq!(summary.price, 3.33);
        assert_eq!(summary.change_pct, 11.11);
        assert_eq!(summary.short_ma, 3.17);
    }
}
