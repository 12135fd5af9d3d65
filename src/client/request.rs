//! No-WASM HTTP client implementation using reqwest
//!
//! This module talks to the activities backend from native builds
//! using the reqwest crate for making HTTP requests.

use crate::error::Result;
use reqwest::{
    Client,
    header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA},
};
use serde_json::Value;

use crate::config::Config;
use crate::interface::{ActivityApi, HttpClient};
use crate::model::{ActivitySet, MembershipParams, Mutation, MutationOutcome, MutationReply};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    config: Config,
}

impl HttpClient for NoWasmClient {
    async fn new(config: &Config) -> Result<Self> {
        let client = create_client(config)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

impl NoWasmClient {
    /// POST a membership change and read the JSON body whatever the status.
    async fn send_mutation(
        &self,
        mutation: Mutation,
        params: MembershipParams<'_>,
    ) -> Result<MutationOutcome> {
        let url = self.config.url(&params.path(mutation));
        log::debug!("POST {}", url);

        let resp = self.client.post(&url).send().await?;
        let success = resp.status().is_success();
        let body = resp.json::<Value>().await?;

        Ok(MutationOutcome {
            success,
            reply: MutationReply::from_value(&body),
        })
    }
}

impl ActivityApi for NoWasmClient {
    async fn fetch_activities(&self) -> Result<ActivitySet> {
        let url = self.config.url("/activities");
        log::debug!("GET {}", url);

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let resp = self.client.get(&url).headers(headers).send().await?;
        let text = resp.text().await?;

        Ok(serde_json::from_str::<ActivitySet>(&text)?)
    }

    async fn signup(&self, params: MembershipParams<'_>) -> Result<MutationOutcome> {
        self.send_mutation(Mutation::Signup, params).await
    }

    async fn unregister(&self, params: MembershipParams<'_>) -> Result<MutationOutcome> {
        self.send_mutation(Mutation::Unregister, params).await
    }
}

pub fn create_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(Into::into)
}
