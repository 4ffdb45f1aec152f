//! Testing infrastructure for the Rada presentation core.
//!
//! This crate provides utilities for writing controller and SDK tests:
//! - `ScriptedGateway`: a gateway whose responses, failures, and timing
//!   are scripted per test
//! - `payloads`: sample list payloads in each of the backend's observed
//!   response shapes

pub mod gateway;
pub mod payloads;

pub use gateway::ScriptedGateway;
