// SPDX-License-Identifier: MPL-2.0
//! Typed views of the catalog API's JSON payloads.
//!
//! Only the fields the screens render are modelled. Everything optional in
//! the upstream schema decodes to `None` or an empty list so a sparse card
//! (trainers, energies, promos) never fails to decode.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope of every list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    /// Absent on the unpaginated `/types` and `/rarities` endpoints.
    #[serde(default)]
    pub total_count: Option<u32>,
}

/// Envelope of single-item endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ItemResponse<T> {
    pub data: T,
}

/// One page of a listing plus the total number of matching items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u32,
}

impl<T> From<ListResponse<T>> for Page<T> {
    fn from(response: ListResponse<T>) -> Self {
        let total_count = response
            .total_count
            .unwrap_or(u32::try_from(response.data.len()).unwrap_or(u32::MAX));
        Self {
            items: response.data,
            total_count,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub supertype: Option<String>,
    pub subtypes: Vec<String>,
    pub hp: Option<String>,
    pub types: Vec<String>,
    pub rules: Vec<String>,
    pub abilities: Vec<Ability>,
    pub attacks: Vec<Attack>,
    pub weaknesses: Vec<TypeModifier>,
    pub resistances: Vec<TypeModifier>,
    pub retreat_cost: Option<Vec<String>>,
    pub set: SetSummary,
    pub number: Option<String>,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    pub images: CardImages,
    pub tcgplayer: Option<TcgPlayer>,
    pub cardmarket: Option<CardMarket>,
}

impl Card {
    /// Average sell price on Cardmarket, if the card carries one.
    #[must_use]
    pub fn average_sell_price(&self) -> Option<f64> {
        self.cardmarket
            .as_ref()
            .and_then(|market| market.prices.as_ref())
            .and_then(|prices| prices.average_sell_price)
    }

    /// "Number/printed total" when both halves are known.
    #[must_use]
    pub fn collector_number(&self) -> Option<String> {
        let number = self.number.as_deref()?;
        Some(match self.set.printed_total {
            Some(total) => format!("{number}/{total}"),
            None => number.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Ability {
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Attack {
    pub name: String,
    pub cost: Vec<String>,
    pub damage: Option<String>,
    pub text: Option<String>,
}

/// A weakness or resistance entry.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl std::fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// The set block embedded in every card.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SetSummary {
    pub id: String,
    pub name: String,
    pub series: String,
    pub printed_total: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub series: String,
    pub printed_total: Option<u32>,
    pub total: Option<u32>,
    /// Upstream format is `YYYY/MM/DD`.
    pub release_date: Option<String>,
    pub images: SetImages,
}

impl CardSet {
    /// Logo when available, the set symbol otherwise.
    #[must_use]
    pub fn display_image(&self) -> Option<&str> {
        self.images
            .logo
            .as_deref()
            .or(self.images.symbol.as_deref())
    }

    /// Parsed release date, tolerant of both `/` and `-` separators.
    #[must_use]
    pub fn release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y/%m/%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SetImages {
    pub symbol: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TcgPlayer {
    pub url: Option<String>,
    /// Keyed by print variant (`normal`, `holofoil`, `reverseHolofoil`, ...).
    pub prices: Option<BTreeMap<String, TcgPlayerPrices>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TcgPlayerPrices {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
    pub market: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardMarket {
    pub url: Option<String>,
    pub prices: Option<CardMarketPrices>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CardMarketPrices {
    pub average_sell_price: Option<f64>,
    pub low_price: Option<f64>,
    pub trend_price: Option<f64>,
    pub avg1: Option<f64>,
    pub avg7: Option<f64>,
    pub avg30: Option<f64>,
    pub reverse_holo_avg1: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_JSON: &str = r#"{
        "data": {
            "id": "xy1-1",
            "name": "Venusaur-EX",
            "supertype": "Pokémon",
            "subtypes": ["Basic", "EX"],
            "hp": "180",
            "types": ["Grass"],
            "rules": ["Pokémon-EX rule: When a Pokémon-EX has been Knocked Out, your opponent takes 2 Prize cards."],
            "attacks": [
                {"name": "Poison Powder", "cost": ["Grass", "Colorless", "Colorless"], "convertedEnergyCost": 3, "damage": "60", "text": "Your opponent's Active Pokémon is now Poisoned."},
                {"name": "Jungle Hammer", "cost": ["Grass", "Grass", "Colorless", "Colorless"], "damage": "90", "text": ""}
            ],
            "weaknesses": [{"type": "Fire", "value": "×2"}],
            "retreatCost": ["Colorless", "Colorless", "Colorless", "Colorless"],
            "set": {"id": "xy1", "name": "XY", "series": "XY", "printedTotal": 146, "total": 146},
            "number": "1",
            "artist": "Eske Yoshinob",
            "rarity": "Rare Holo EX",
            "images": {"small": "https://images.pokemontcg.io/xy1/1.png", "large": "https://images.pokemontcg.io/xy1/1_hires.png"},
            "tcgplayer": {"url": "https://prices.pokemontcg.io/tcgplayer/xy1-1", "prices": {"holofoil": {"low": 1.0, "mid": 3.5, "high": 9.99, "market": 2.1}}},
            "cardmarket": {"url": "https://prices.pokemontcg.io/cardmarket/xy1-1", "prices": {"averageSellPrice": 9.38, "lowPrice": 8.95, "trendPrice": 10.1, "avg1": 9.0, "avg7": 9.5, "avg30": 11.2, "reverseHoloAvg1": 0.0}}
        }
    }"#;

    #[test]
    fn decodes_full_card() {
        let response: ItemResponse<Card> = serde_json::from_str(CARD_JSON).expect("decode card");
        let card = response.data;

        assert_eq!(card.id, "xy1-1");
        assert_eq!(card.subtypes, vec!["Basic", "EX"]);
        assert_eq!(card.attacks.len(), 2);
        assert_eq!(card.weaknesses[0].to_string(), "Fire (×2)");
        assert_eq!(card.retreat_cost.as_ref().map(Vec::len), Some(4));
        assert_eq!(card.collector_number().as_deref(), Some("1/146"));
        assert_eq!(card.average_sell_price(), Some(9.38));
        let variants = card.tcgplayer.and_then(|t| t.prices).expect("tcgplayer prices");
        assert_eq!(variants["holofoil"].mid, Some(3.5));
    }

    #[test]
    fn sparse_trainer_card_decodes() {
        let json = r#"{"data": {"id": "sm1-130", "name": "Professor Kukui", "supertype": "Trainer",
            "set": {"id": "sm1", "name": "Sun & Moon", "series": "Sun & Moon"},
            "images": {"small": "s.png"}}}"#;
        let card = serde_json::from_str::<ItemResponse<Card>>(json)
            .expect("decode trainer")
            .data;

        assert!(card.hp.is_none());
        assert!(card.attacks.is_empty());
        assert!(card.retreat_cost.is_none());
        assert!(card.average_sell_price().is_none());
        assert!(card.collector_number().is_none());
    }

    #[test]
    fn list_without_total_count_counts_items() {
        let json = r#"{"data": ["Colorless", "Darkness", "Dragon"]}"#;
        let page: Page<String> = serde_json::from_str::<ListResponse<String>>(json)
            .expect("decode types")
            .into();
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn set_prefers_logo_and_parses_release_date() {
        let json = r#"{"data": [{"id": "sv1", "name": "Scarlet & Violet", "series": "Scarlet & Violet",
            "total": 258, "releaseDate": "2023/03/31",
            "images": {"symbol": "sym.png", "logo": "logo.png"}}], "totalCount": 168}"#;
        let response: ListResponse<CardSet> = serde_json::from_str(json).expect("decode sets");
        let set = &response.data[0];

        assert_eq!(response.total_count, Some(168));
        assert_eq!(set.display_image(), Some("logo.png"));
        assert_eq!(set.release_date(), NaiveDate::from_ymd_opt(2023, 3, 31));
    }

    #[test]
    fn set_without_logo_falls_back_to_symbol() {
        let set = CardSet {
            images: SetImages {
                symbol: Some("sym.png".into()),
                logo: None,
            },
            ..CardSet::default()
        };
        assert_eq!(set.display_image(), Some("sym.png"));
    }
}
