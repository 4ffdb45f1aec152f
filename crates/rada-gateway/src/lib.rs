// Gateway module - the external API boundary the presentation core calls
// into but does not implement.
//
// Design principle:
//   - The core consumes the backend through exactly two contracts:
//     "fetch a list, in one of several response shapes" and
//     "submit an item mutation, success or failure".
//   - Response shape handling is deliberately NOT done here; the engine's
//     normalizer owns it. The gateway hands back raw JSON.
//   - Backend selection (fixtures vs HTTP) is a configuration choice so the
//     core never hardcodes mock payloads.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod registry;
pub mod traits;

pub use config::{Backend, Config, HttpConfig, RollbackPolicies, RollbackPolicy};
pub use error::{Error, Result};
pub use fixtures::FixtureGateway;
pub use http::HttpGateway;
pub use registry::create_gateway;
pub use traits::{Gateway, Mutation, MutationKind, Resource};
