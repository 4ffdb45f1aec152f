use crate::config::{Backend, Config};
use crate::http::HttpGateway;
use crate::fixtures::FixtureGateway;
use crate::traits::Gateway;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Create the gateway selected by configuration.
pub fn create_gateway(config: &Config) -> Result<Arc<dyn Gateway>> {
    match config.backend {
        Backend::Fixtures => Ok(Arc::new(FixtureGateway::new())),
        Backend::Http => {
            if config.http.base_url.is_empty() {
                return Err(Error::Config(
                    "http backend selected but http.base_url is not set".to_string(),
                ));
            }
            let gateway = HttpGateway::new(
                config.http.base_url.clone(),
                Duration::from_secs(config.http.timeout_secs),
            )?;
            Ok(Arc::new(gateway))
        }
    }
}
