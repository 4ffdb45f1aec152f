// Engine module - the list-presentation logic every screen shares
// This layer sits between the gateway (raw payloads) and screen rendering

pub mod controller;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod timefmt;

pub use controller::{Generation, ListController, ListState, LoadPhase, ScreenSpec};
pub use error::{Error, Result};
pub use filter::{FilterContext, FilterSet, SIMILAR_LEVEL_THRESHOLD, matches_search};
pub use normalize::{normalize, normalize_into};
pub use timefmt::{format_relative, format_relative_str};
