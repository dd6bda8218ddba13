use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One coin from the upstream listing. Fields other than `symbol` and `name`
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinRecord {
    pub symbol: String,
    pub name: String,
}

impl CoinRecord {
    /// Returns `None` unless `value` is an object with string `symbol` and
    /// `name` fields.
    pub fn from_value(value: &Value) -> Option<Self> {
        let symbol = value.get("symbol")?.as_str()?;
        let name = value.get("name")?.as_str()?;
        Some(Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
    }

    pub fn display_entry(&self) -> DisplayEntry {
        DisplayEntry(format!("{} - {}", self.symbol.to_uppercase(), self.name))
    }
}

/// `"<SYMBOL> - <Name>"` as shown in the selector.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayEntry(String);

impl DisplayEntry {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_entry_uppercases_symbol_only() {
        let record = CoinRecord {
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
        };
        assert_eq!(record.display_entry().as_str(), "BTC - Bitcoin");
    }

    #[test]
    fn from_value_ignores_extra_fields() {
        let value = json!({ "id": "ethereum", "symbol": "eth", "name": "Ethereum" });
        let record = CoinRecord::from_value(&value).unwrap();
        assert_eq!(record.symbol, "eth");
        assert_eq!(record.name, "Ethereum");
    }

    #[test]
    fn from_value_rejects_incomplete_or_non_object_values() {
        assert!(CoinRecord::from_value(&json!({ "id": "x" })).is_none());
        assert!(CoinRecord::from_value(&json!({ "symbol": "btc" })).is_none());
        assert!(CoinRecord::from_value(&json!({ "name": "Bitcoin" })).is_none());
        assert!(CoinRecord::from_value(&json!({ "symbol": 1, "name": "One" })).is_none());
        assert!(CoinRecord::from_value(&json!({ "symbol": "x", "name": null })).is_none());
        assert!(CoinRecord::from_value(&json!("btc")).is_none());
        assert!(CoinRecord::from_value(&json!(null)).is_none());
    }

    #[test]
    fn uppercasing_handles_non_ascii_symbols() {
        let record = CoinRecord {
            symbol: "ñu".to_string(),
            name: "Ñandú Coin".to_string(),
        };
        assert_eq!(record.display_entry().to_string(), "ÑU - Ñandú Coin");
    }

    #[test]
    fn display_entry_serializes_as_plain_string() {
        let entry = CoinRecord {
            symbol: "eth".to_string(),
            name: "Ethereum".to_string(),
        }
        .display_entry();
        assert_eq!(serde_json::to_string(&entry).unwrap(), "\"ETH - Ethereum\"");
    }
}
