//! Fixed universe of tracked equities with their display metadata.

pub struct Ticker {
    pub symbol: &'static str,
    pub name: &'static str,
    pub logo_url: &'static str,
}

pub static TICKERS: [Ticker; 20] = [
    Ticker {
        symbol: "AAPL",
        name: "Apple Inc.",
        logo_url: "https://logo.clearbit.com/apple.com",
    },
    Ticker {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        logo_url: "https://logo.clearbit.com/microsoft.com",
    },
    Ticker {
        symbol: "AMZN",
        name: "Amazon.com, Inc.",
        logo_url: "https://logo.clearbit.com/amazon.com",
    },
    Ticker {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        logo_url: "https://logo.clearbit.com/google.com",
    },
    Ticker {
        symbol: "META",
        name: "Meta Platforms, Inc.",
        logo_url: "https://logo.clearbit.com/meta.com",
    },
    Ticker {
        symbol: "TSLA",
        name: "Tesla, Inc.",
        logo_url: "https://logo.clearbit.com/tesla.com",
    },
    Ticker {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        logo_url: "https://logo.clearbit.com/nvidia.com",
    },
    Ticker {
        symbol: "NFLX",
        name: "Netflix, Inc.",
        logo_url: "https://logo.clearbit.com/netflix.com",
    },
    Ticker {
        symbol: "JPM",
        name: "JPMorgan Chase & Co.",
        logo_url: "https://logo.clearbit.com/jpmorganchase.com",
    },
    Ticker {
        symbol: "BAC",
        name: "Bank of America Corporation",
        logo_url: "https://logo.clearbit.com/bankofamerica.com",
    },
    Ticker {
        symbol: "WMT",
        name: "Walmart Inc.",
        logo_url: "https://logo.clearbit.com/walmart.com",
    },
    Ticker {
        symbol: "T",
        name: "AT&T Inc.",
        logo_url: "https://logo.clearbit.com/att.com",
    },
    Ticker {
        symbol: "V",
        name: "Visa Inc.",
        logo_url: "https://logo.clearbit.com/visa.com",
    },
    Ticker {
        symbol: "MA",
        name: "Mastercard Incorporated",
        logo_url: "https://logo.clearbit.com/mastercard.com",
    },
    Ticker {
        symbol: "PEP",
        name: "PepsiCo, Inc.",
        logo_url: "https://logo.clearbit.com/pepsico.com",
    },
    Ticker {
        symbol: "KO",
        name: "The Coca-Cola Company",
        logo_url: "https://logo.clearbit.com/coca-cola.com",
    },
    Ticker {
        symbol: "ORCL",
        name: "Oracle Corporation",
        logo_url: "https://logo.clearbit.com/oracle.com",
    },
    Ticker {
        symbol: "INTC",
        name: "Intel Corporation",
        logo_url: "https://logo.clearbit.com/intel.com",
    },
    Ticker {
        symbol: "CSCO",
        name: "Cisco Systems, Inc.",
        logo_url: "https://logo.clearbit.com/cisco.com",
    },
    Ticker {
        symbol: "ADBE",
        name: "Adobe Inc.",
        logo_url: "https://logo.clearbit.com/adobe.com",
    },
];

pub fn symbols() -> impl Iterator<Item = &'static str> {
    TICKERS.iter().map(|t| t.symbol)
}

fn lookup(symbol: &str) -> Option<&'static Ticker> {
    TICKERS.iter().find(|t| t.symbol == symbol)
}

/// Display name, falling back to the symbol itself.
pub fn display_name(symbol: &str) -> String {
    lookup(symbol)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| symbol.to_string())
}

pub fn logo_url(symbol: &str) -> Option<String> {
    lookup(symbol).map(|t| t.logo_url.to_string())
}
