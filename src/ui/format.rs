// SPDX-License-Identifier: MPL-2.0
//! Text formatting for prices, print variants and dates.

use crate::api::CardSet;

/// `$12.30`, or `N/A` when the price is unknown.
#[must_use]
pub fn price(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("${value:.2}"),
        None => "N/A".to_string(),
    }
}

/// Price tag for a card tile; hidden when missing or zero.
#[must_use]
pub fn price_tag(value: Option<f64>) -> Option<String> {
    value.filter(|v| *v != 0.0).map(|v| price(Some(v)))
}

/// Turns a camelCase variant key into a label: `reverseHolofoil` becomes
/// `Reverse Holofoil`, `1stEditionHolofoil` becomes `1st Edition Holofoil`.
#[must_use]
pub fn variant_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}

/// Release date of a set as `YYYY-MM-DD`, or the raw value if unparsable.
#[must_use]
pub fn release_date(set: &CardSet) -> Option<String> {
    match set.release_date() {
        Some(date) => Some(date.format("%Y-%m-%d").to_string()),
        None => set.release_date.clone(),
    }
}

/// `Pokémon - Basic, EX`; just the supertype when there are no subtypes.
#[must_use]
pub fn type_line(supertype: Option<&str>, subtypes: &[String]) -> String {
    let supertype = supertype.unwrap_or_default();
    if subtypes.is_empty() {
        supertype.to_string()
    } else {
        format!("{supertype} - {}", subtypes.join(", "))
    }
}
