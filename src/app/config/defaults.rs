// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Remote catalog endpoint and HTTP behaviour
//! - **Catalog**: Listing page size, grid layout, image cache

// ==========================================================================
// API Defaults
// ==========================================================================

/// Public Pokémon TCG API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// Per-request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 20;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 120;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("TcgMarket/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Cards or sets fetched per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Smallest page size accepted from the config file.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 250;

/// Tiles per grid row.
pub const DEFAULT_GRID_COLUMNS: u32 = 4;

pub const MIN_GRID_COLUMNS: u32 = 1;

pub const MAX_GRID_COLUMNS: u32 = 8;

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 256;

/// Smallest image cache; must stay non-zero for the LRU.
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 16;
