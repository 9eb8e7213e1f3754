// SPDX-License-Identifier: MPL-2.0
//! Reusable view-state shared by the screens: the lifecycle of a remote
//! resource and the generation counter that tells fresh responses from stale
//! ones.

pub mod generation;
pub mod load;

pub use generation::{Generation, GenerationTracker};
pub use load::LoadState;
