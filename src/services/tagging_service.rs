use std::collections::BTreeSet;

/// Lowercase company aliases and the tickers they resolve to. Aliases may
/// share a ticker ("facebook" and "meta" both resolve to META).
const COMPANY_ALIASES: &[(&str, &str)] = &[
    ("apple", "AAPL"),
    ("microsoft", "MSFT"),
    ("amazon", "AMZN"),
    ("google", "GOOGL"),
    ("alphabet", "GOOGL"),
    ("facebook", "META"),
    ("meta", "META"),
    ("tesla", "TSLA"),
    ("nvidia", "NVDA"),
    ("jpmorgan", "JPM"),
    ("bank of america", "BAC"),
    ("goldman sachs", "GS"),
    ("exxon", "XOM"),
    ("chevron", "CVX"),
    ("bp", "BP"),
    ("walmart", "WMT"),
    ("target", "TGT"),
    ("johnson & johnson", "JNJ"),
    ("pfizer", "PFE"),
    ("unitedhealth", "UNH"),
    ("caterpillar", "CAT"),
    ("deere", "DE"),
    ("united rentals", "URI"),
    ("netflix", "NFLX"),
    ("disney", "DIS"),
    ("coca-cola", "KO"),
    ("pepsi", "PEP"),
    ("pepsico", "PEP"),
    ("mastercard", "MA"),
    ("visa", "V"),
    ("boeing", "BA"),
    ("lockheed", "LMT"),
];

/// Default tag when no company is mentioned: the S&P 500 tracker, so callers
/// can always assume at least one symbol.
const BROAD_MARKET_SYMBOL: &str = "SPY";

/// Alias-to-ticker table plus the broad-market fallback symbol. Read-only
/// once constructed; tests substitute smaller tables.
#[derive(Debug, Clone)]
pub struct TickerDirectory {
    pub aliases: Vec<(String, String)>,
    pub default_symbol: String,
}

impl Default for TickerDirectory {
    fn default() -> Self {
        Self {
            aliases: COMPANY_ALIASES
                .iter()
                .map(|(alias, ticker)| (alias.to_string(), ticker.to_string()))
                .collect(),
            default_symbol: BROAD_MARKET_SYMBOL.to_string(),
        }
    }
}

/// Tags free text with the tickers of companies it mentions.
///
/// Matching is case-insensitive substring containment, not word-boundary:
/// "Metaverse" counts as a mention of "meta".
pub struct TickerTagger {
    directory: TickerDirectory,
}

impl TickerTagger {
    pub fn new(directory: TickerDirectory) -> Self {
        Self { directory }
    }

    pub fn with_default_directory() -> Self {
        Self::new(TickerDirectory::default())
    }

    pub fn tag(&self, text: &str) -> BTreeSet<String> {
        let lower = text.to_lowercase();

        let mut symbols: BTreeSet<String> = self
            .directory
            .aliases
            .iter()
            .filter(|(alias, _)| lower.contains(alias.as_str()))
            .map(|(_, ticker)| ticker.clone())
            .collect();

        if symbols.is_empty() {
            symbols.insert(self.directory.default_symbol.clone());
        }
        symbols
    }
}
