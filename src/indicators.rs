pub const SHORT_MA_PERIOD: usize = 5;
pub const LONG_MA_PERIOD: usize = 20;

/// Simple moving average over the last `period` prices. Shorter histories
/// fall back to the mean of everything available.
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let window = period.min(prices.len()).max(1);
    let sum: f64 = prices.iter().rev().take(window).sum();
    Some(sum / window as f64)
}

/// One-bar percent change between the last two prices.
pub fn calculate_change_percent(prices: &[f64]) -> Option<f64> {
    if prices.len() < 2 {
        return None;
    }

    let current_price = prices[prices.len() - 1];
    let previous_price = prices[prices.len() - 2];

    Some((current_price - previous_price) / previous_price * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_uses_trailing_window() {
        let prices: Vec<f64> = (1..=25).map(|p| p as f64).collect();

        // last 5: 21..=25, last 20: 6..=25
        assert_eq!(calculate_sma(&prices, SHORT_MA_PERIOD), Some(23.0));
        assert_eq!(calculate_sma(&prices, LONG_MA_PERIOD), Some(15.5));
    }

    #[test]
    fn sma_falls_back_to_full_history() {
        let prices = [10.0, 11.0, 15.0];
        assert_eq!(calculate_sma(&prices, SHORT_MA_PERIOD), Some(12.0));
        assert_eq!(calculate_sma(&prices, LONG_MA_PERIOD), Some(12.0));
        assert_eq!(calculate_sma(&[], SHORT_MA_PERIOD), None);
    }

    #[test]
    fn change_percent_needs_two_points() {
        assert_eq!(calculate_change_percent(&[100.0]), None);
        assert_eq!(calculate_change_percent(&[100.0, 102.0]), Some(2.0));
        assert_eq!(calculate_change_percent(&[50.0, 100.0, 99.0]), Some(-1.0));
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-0.666), -0.67);
        assert_eq!(round2(187.0), 187.0);
    }
}
