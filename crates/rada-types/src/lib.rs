pub mod domain;
pub mod entry;
pub mod error;
mod util;

pub use domain::*;
pub use entry::ListEntry;
pub use error::{Error, Result};
pub use util::parse_timestamp;
