//! rada-sdk: the shared list-presentation core of the Rada app.
//!
//! # Overview
//!
//! Every list screen in the app (study buddies, groups, discussions,
//! notifications, learning modules) needs the same plumbing: load a list
//! from the backend in whatever shape that endpoint answers with, filter
//! and search it, format timestamps, and patch items optimistically when
//! the user taps like/join/friend. This crate is that plumbing, extracted
//! once, configured per screen.
//!
//! # Quickstart
//!
//! ```no_run
//! use rada_sdk::Client;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! // Backend selection (fixtures vs HTTP) comes from config.
//! let client = Client::connect()?;
//!
//! let buddies = client.buddies();
//! buddies.load().await?;
//!
//! buddies.set_filter("online");
//! for buddy in buddies.visible() {
//!     println!("{} ({})", buddy.username, buddy.level);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `rada-types`: the domain records the screens render
//! - `rada-gateway`: the backend boundary (fixtures or HTTP, by config)
//! - `rada-engine`: normalization, filtering, relative time, and the
//!   controller state machine

pub mod client;
pub mod error;
pub mod screens;

pub use client::Client;
pub use error::{Error, Result};

// Re-export the pieces screen code touches directly
pub use rada_engine::{
    FilterContext, ListController, LoadPhase, format_relative, format_relative_str,
};
pub use rada_gateway::{Backend, Config, MutationKind, RollbackPolicy};
pub use rada_types::{Buddy, DiscussionPost, LearnModule, Notification, StudyGroup};
