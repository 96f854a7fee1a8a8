pub mod api;
pub mod auth;
pub mod chart;
pub mod config;
pub mod error;
pub mod handlers;
pub mod indicators;
pub mod models;
pub mod movers;
pub mod strategy;
pub mod tickers;

#[cfg(test)]
pub(crate) mod test_support;
