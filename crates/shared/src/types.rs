use serde::{Deserialize, Deserializer, Serialize};

// Shared data structures used by the watchlist core and both front-ends

/// A coin as shown on a card and as stored in the favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: String,
    pub name: String,
    // Older entries were saved with a null price for unquoted coins
    #[serde(default, deserialize_with = "price_or_zero")]
    pub price: f64,
}

fn price_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl CoinRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        CoinRecord {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One entry of the `/coins/markets` listing. Fields the page never reads are
/// left to serde to skip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub current_price: Option<f64>,
}

impl From<MarketEntry> for CoinRecord {
    fn from(entry: MarketEntry) -> Self {
        CoinRecord {
            id: entry.id,
            name: entry.name,
            // The API reports null for coins without a current quote
            price: entry.current_price.unwrap_or_default(),
        }
    }
}
