//! HTTP [`Source`] of [`User`]s with a bundled fallback dataset.

use std::convert::Infallible;

use common::operations::FetchAll;
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::domain::User;

use super::Source;

/// [`Http`] source configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the user directory endpoint.
    pub base_url: String,
}

/// [`Source`] fetching the whole [`User`] collection from a remote HTTP
/// endpoint in a single request.
///
/// Any failure — transport, status, or decoding — is logged and recovered
/// locally by falling back to the bundled static dataset, so fetching
/// never fails from the caller's point of view. There is no retry and no
/// transport-level pagination.
#[derive(Clone, Debug)]
pub struct Http {
    /// Base URL of the endpoint.
    base_url: String,

    /// HTTP client performing the requests.
    client: reqwest::Client,
}

impl Http {
    /// Creates a new [`Http`] source out of the provided [`Config`].
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the [`User`] collection from the remote endpoint.
    async fn try_fetch(&self) -> Result<Vec<User>, Traced<Error>> {
        let Envelope { results } = self
            .client
            .get(format!("{}/users", self.base_url))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(tracerr::from_and_wrap!(=> Error))?
            .json()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        Ok(results)
    }

    /// Decodes the bundled static dataset.
    fn bundled() -> Vec<User> {
        serde_json::from_str::<Envelope>(include_str!("users.json"))
            .expect("valid bundled dataset")
            .results
    }
}

impl Source<FetchAll> for Http {
    type Ok = Vec<User>;
    type Err = Infallible;

    async fn execute(&self, _: FetchAll) -> Result<Self::Ok, Self::Err> {
        Ok(match self.try_fetch().await {
            Ok(users) => users,
            Err(e) => {
                log::warn!("falling back to the bundled dataset: {e}");
                Self::bundled()
            }
        })
    }
}

/// Error of fetching [`User`]s from the remote endpoint.
#[derive(Debug, Display, From, StdError)]
#[display("HTTP request failed: {_0}")]
pub struct Error(reqwest::Error);

/// Decoded body of the endpoint response.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    /// Fetched [`User`] records.
    #[serde(default)]
    results: Vec<User>,
}
