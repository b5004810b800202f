//! Asset identifiers: provider id plus display ticker.

use crate::domain::error::CryptolensError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Provider asset id, e.g. `bitcoin`.
    pub id: String,
    /// Display ticker, e.g. `BTC`.
    pub symbol: String,
}

impl Asset {
    pub fn new(id: &str, symbol: &str) -> Self {
        Self {
            id: id.to_lowercase(),
            symbol: symbol.to_uppercase(),
        }
    }
}

/// Parse a comma-separated asset list. Each entry is `id` or `id:SYMBOL`;
/// without an explicit symbol the uppercased id is used.
pub fn parse_assets(spec: &str) -> Result<Vec<Asset>, CryptolensError> {
    let invalid = |reason: String| CryptolensError::ConfigInvalid {
        section: "assets".into(),
        key: "ids".into(),
        reason,
    };

    let mut assets = Vec::new();
    for entry in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (id, symbol) = match entry.split_once(':') {
            Some((id, symbol)) => (id.trim(), symbol.trim()),
            None => (entry, entry),
        };
        if id.is_empty() || symbol.is_empty() {
            return Err(invalid(format!("malformed asset entry '{entry}'")));
        }
        let asset = Asset::new(id, symbol);
        if assets.iter().any(|a: &Asset| a.id == asset.id) {
            return Err(invalid(format!("duplicate asset id '{}'", asset.id)));
        }
        assets.push(asset);
    }

    if assets.is_empty() {
        return Err(invalid("no assets configured".into()));
    }
    Ok(assets)
}

pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("bitcoin", "BTC"),
        Asset::new("ethereum", "ETH"),
        Asset::new("render-token", "RNDR"),
        Asset::new("fetch-ai", "FET"),
        Asset::new("near", "NEAR"),
        Asset::new("solana", "SOL"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_with_symbol() {
        let assets = parse_assets("bitcoin:BTC, ethereum:ETH").unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].id, "bitcoin");
        assert_eq!(assets[0].symbol, "BTC");
    }

    #[test]
    fn parse_bare_id_uses_uppercased_id() {
        let assets = parse_assets("near").unwrap();
        assert_eq!(assets[0].id, "near");
        assert_eq!(assets[0].symbol, "NEAR");
    }

    #[test]
    fn parse_normalizes_case() {
        let assets = parse_assets("Bitcoin:btc").unwrap();
        assert_eq!(assets[0].id, "bitcoin");
        assert_eq!(assets[0].symbol, "BTC");
    }

    #[test]
    fn parse_rejects_duplicates() {
        assert!(parse_assets("bitcoin,bitcoin:BTC").is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_assets("").is_err());
        assert!(parse_assets("bitcoin:").is_err());
    }

    #[test]
    fn defaults_match_known_pairs() {
        let assets = default_assets();
        assert_eq!(assets.len(), 6);
        assert_eq!(assets[0], Asset::new("bitcoin", "BTC"));
    }
}
