use crate::traits::{Gateway, Mutation, Resource};
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

/// Gateway implementation backed by the live Rada backend over HTTP.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn fetch_list(&self, resource: Resource) -> Result<Value> {
        let url = self.endpoint(resource.path());
        tracing::debug!(%resource, %url, "fetching list");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%resource, status = status.as_u16(), "list fetch failed");
            return Err(Error::Status {
                status: status.as_u16(),
                path: resource.path().to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    async fn submit(&self, mutation: &Mutation) -> Result<()> {
        let url = self.endpoint(mutation.kind.path());
        tracing::debug!(kind = ?mutation.kind, target = %mutation.target_id, "submitting mutation");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "id": mutation.target_id }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                kind = ?mutation.kind,
                target = %mutation.target_id,
                status = status.as_u16(),
                "mutation rejected"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                path: mutation.kind.path().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() -> Result<()> {
        let gateway = HttpGateway::new("https://api.rada.ke/v1", Duration::from_secs(5))?;
        assert_eq!(
            gateway.endpoint("buddies"),
            "https://api.rada.ke/v1/buddies"
        );
        Ok(())
    }

    #[test]
    fn test_trailing_slash_in_base_url_is_stripped() -> Result<()> {
        let gateway = HttpGateway::new("https://api.rada.ke/v1/", Duration::from_secs(5))?;
        assert_eq!(
            gateway.endpoint("groups/join"),
            "https://api.rada.ke/v1/groups/join"
        );
        Ok(())
    }
}
