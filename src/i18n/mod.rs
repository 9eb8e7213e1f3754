// SPDX-License-Identifier: MPL-2.0
//! Fluent translations for the interface.
//!
//! The `.ftl` bundles under `assets/i18n/` are compiled into the binary. The
//! active language is picked from `--lang`, then `settings.toml`, then the OS
//! locale, and any key missing from it is looked up in `en-US`.

pub mod fluent;

pub use fluent::I18n;
