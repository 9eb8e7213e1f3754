// SPDX-License-Identifier: MPL-2.0
//! Widgets used by more than one screen.

pub mod error_display;
pub mod status;
