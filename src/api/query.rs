// SPDX-License-Identifier: MPL-2.0
//! Query-string construction for the card and set endpoints.
//!
//! Kept free of any HTTP types so the exact parameters can be unit tested.
//! Values are returned unencoded; the HTTP client percent-encodes them.

/// Sort order of card listings: newest sets first.
pub const CARDS_ORDER_BY: &str = "-set.releaseDate";

/// Sort order of set listings: newest first.
pub const SETS_ORDER_BY: &str = "-releaseDate";

/// Set / type / rarity constraints narrowing a card listing.
///
/// Empty strings are treated exactly like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Set identifier, e.g. `sv1`.
    pub set: Option<String>,
    /// Energy type, e.g. `Fire`.
    pub types: Option<String>,
    /// Rarity label, e.g. `Rare Holo`.
    pub rarity: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Filters {
    /// Returns `true` if at least one constraint is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        non_empty(&self.set).is_some()
            || non_empty(&self.types).is_some()
            || non_empty(&self.rarity).is_some()
    }

    /// Builds the `q` clause, or `None` when no constraint applies.
    ///
    /// Clauses are joined with a space in set, type, rarity order. Rarity
    /// is quoted because most rarity labels contain spaces.
    #[must_use]
    pub fn to_query(&self) -> Option<String> {
        let mut clauses = Vec::with_capacity(3);

        if let Some(set) = non_empty(&self.set) {
            clauses.push(format!("set.id:{set}"));
        }
        if let Some(types) = non_empty(&self.types) {
            clauses.push(format!("types:{types}"));
        }
        if let Some(rarity) = non_empty(&self.rarity) {
            clauses.push(format!("rarity:\"{rarity}\""));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" "))
        }
    }
}

/// Parameters of `GET /cards` for one filtered page.
#[must_use]
pub fn card_list_params(page: u32, page_size: u32, filters: &Filters) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("orderBy", CARDS_ORDER_BY.to_string()),
        ("page", page.to_string()),
        ("pageSize", page_size.to_string()),
    ];
    if let Some(q) = filters.to_query() {
        params.push(("q", q));
    }
    params
}

/// Parameters of `GET /cards` for a substring name search.
#[must_use]
pub fn search_params(query: &str, page: u32, page_size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("q", format!("name:*{query}*")),
        ("page", page.to_string()),
        ("pageSize", page_size.to_string()),
    ]
}

/// Parameters of `GET /sets`; `None` paging fetches every set.
#[must_use]
pub fn set_params(paging: Option<(u32, u32)>) -> Vec<(&'static str, String)> {
    let mut params = vec![("orderBy", SETS_ORDER_BY.to_string())];
    if let Some((page, page_size)) = paging {
        params.push(("page", page.to_string()));
        params.push(("pageSize", page_size.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_no_query() {
        assert_eq!(Filters::default().to_query(), None);
        assert!(!Filters::default().is_active());
    }

    #[test]
    fn empty_strings_are_ignored() {
        let filters = Filters {
            set: Some(String::new()),
            types: Some("Fire".into()),
            rarity: Some(String::new()),
        };
        assert_eq!(filters.to_query().as_deref(), Some("types:Fire"));
        assert!(filters.is_active());
    }

    #[test]
    fn all_filters_join_in_fixed_order() {
        let filters = Filters {
            set: Some("sv1".into()),
            types: Some("Water".into()),
            rarity: Some("Rare Holo".into()),
        };
        assert_eq!(
            filters.to_query().as_deref(),
            Some("set.id:sv1 types:Water rarity:\"Rare Holo\"")
        );
    }

    #[test]
    fn card_list_params_include_order_and_paging() {
        let params = card_list_params(3, 20, &Filters::default());
        assert_eq!(
            params,
            vec![
                ("orderBy", "-set.releaseDate".to_string()),
                ("page", "3".to_string()),
                ("pageSize", "20".to_string()),
            ]
        );
    }

    #[test]
    fn card_list_params_append_filter_query() {
        let filters = Filters {
            set: Some("base1".into()),
            ..Filters::default()
        };
        let params = card_list_params(1, 20, &filters);
        assert_eq!(params.last(), Some(&("q", "set.id:base1".to_string())));
    }

    #[test]
    fn search_wraps_query_in_wildcards_without_ordering() {
        let params = search_params("char", 2, 20);
        assert_eq!(params[0], ("q", "name:*char*".to_string()));
        assert!(params.iter().all(|(key, _)| *key != "orderBy"));
    }

    #[test]
    fn set_params_paging_is_optional() {
        assert_eq!(set_params(None).len(), 1);
        assert_eq!(
            set_params(Some((2, 20))),
            vec![
                ("orderBy", "-releaseDate".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "20".to_string()),
            ]
        );
    }
}
