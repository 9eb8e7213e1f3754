// SPDX-License-Identifier: MPL-2.0
//! Navigable routes and their path form.
//!
//! Paths follow the web layout of the catalog (`/`, `/sets`, `/card/{id}`,
//! `/search?q=...`). They are accepted on the command line with `--route`
//! and logged on every navigation.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use url::{form_urlencoded, Url};

/// Base used to resolve relative route paths.
const ROUTE_BASE: &str = "tcg-market://app/";

/// Bytes escaped in an identifier path segment (RFC 3986 unreserved kept).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Sets,
    Favorites,
    CardDetail(String),
    Search(String),
    About,
    /// Any path no other route matches; keeps the original input.
    NotFound(String),
}

impl Route {
    /// Parses a route path. Unknown paths map to [`Route::NotFound`].
    ///
    /// Trailing slashes are ignored, identifiers and the search query are
    /// percent-decoded.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let Ok(url) = Url::parse(ROUTE_BASE).and_then(|base| base.join(trimmed)) else {
            return Route::NotFound(trimmed.to_string());
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Route::Home,
            ["sets"] => Route::Sets,
            ["favorites"] => Route::Favorites,
            ["about"] => Route::About,
            ["card", id] => match decode_segment(id) {
                Some(id) => Route::CardDetail(id),
                None => Route::NotFound(trimmed.to_string()),
            },
            ["search"] => {
                let query = url
                    .query_pairs()
                    .find(|(key, _)| key == "q")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                Route::Search(query)
            }
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// The canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Sets => "/sets".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::About => "/about".to_string(),
            Route::CardDetail(id) => format!("/card/{}", utf8_percent_encode(id, SEGMENT)),
            Route::Search(query) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair("q", query)
                    .finish();
                format!("/search?{encoded}")
            }
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether the route shows a paginated card listing.
    #[must_use]
    pub fn is_card_listing(&self) -> bool {
        matches!(self, Route::Home | Route::Search(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-decodes one path segment. `+`, `=` and `&` are taken literally.
fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
        .filter(|decoded| !decoded.is_empty())
}

/// Navigation history for *Back* actions.
#[derive(Debug, Clone, Default)]
pub struct History {
    current: Route,
    previous: Vec<Route>,
}

impl History {
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            previous: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `route`. Returns `false` when it is already current.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.previous.push(previous);
        true
    }

    /// Returns to the previous route, or home when there is none.
    pub fn back(&mut self) -> &Route {
        self.current = self.previous.pop().unwrap_or(Route::Home);
        &self.current
    }
}
