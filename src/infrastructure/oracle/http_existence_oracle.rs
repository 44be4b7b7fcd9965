use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::domain::oracle::{Existence, ExistenceOracle};

/// Existence oracle backed by an HTTP service
///
/// Issues `GET {base_url}/{resource}/{id}` and treats exactly `200 OK` as a
/// hit. Any other status is [`Existence::Absent`]; transport failures are
/// [`Existence::Unreachable`]. Both are logged differently so rejections
/// caused by an outage can be told apart from genuinely unknown ids.
#[derive(Debug, Clone)]
pub struct HttpExistenceOracle {
    client: Client,
    base_url: String,
    resource: String,
}

impl HttpExistenceOracle {
    pub fn new(client: Client, base_url: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            resource: resource.into(),
        }
    }

    /// Oracle for `GET {base_url}/pokemon/{id}`
    pub fn pokemon(client: Client, base_url: impl Into<String>) -> Self {
        Self::new(client, base_url, "pokemon")
    }

    /// Oracle for `GET {base_url}/trainers/{id}`
    pub fn trainers(client: Client, base_url: impl Into<String>) -> Self {
        Self::new(client, base_url, "trainers")
    }

    fn url_for(&self, id: i64) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource,
            id
        )
    }
}

#[async_trait]
impl ExistenceOracle for HttpExistenceOracle {
    async fn check(&self, id: i64) -> Existence {
        let url = self.url_for(id);

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => Existence::Present,
            Ok(response) => {
                debug!(
                    resource = %self.resource,
                    id,
                    status = %response.status(),
                    "Upstream reports entity absent"
                );
                Existence::Absent
            }
            Err(err) => {
                warn!(
                    resource = %self.resource,
                    id,
                    url = %url,
                    error = %err,
                    "Existence oracle unreachable, treating as absent"
                );
                Existence::Unreachable
            }
        }
    }
}
