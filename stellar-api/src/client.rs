use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client;
use tracing::debug;

use crate::lookup::{Lookup, RawResponse, ResponseBody, classify};

pub const DEFAULT_BASE_URL: &str =
    "https://hsr-backend.redfield-e7b65d33.southeastasia.azurecontainerapps.io/profile";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("stellar-bot/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ProfileClientConfig {
    pub base_url: String,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for ProfileClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Client for the Star Rail profile web service.
#[derive(Clone, Debug)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(config: ProfileClientConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("failed to build profile service HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The uid is appended as given; the service does its own validation.
    pub fn profile_url(&self, uid: &str) -> String {
        format!("{}/{}", self.base_url, uid)
    }

    /// Issue the GET and hand back whatever status and body came back.
    pub async fn fetch(&self, uid: &str) -> anyhow::Result<RawResponse> {
        let url = self.profile_url(uid);
        debug!(%url, "fetching profile");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!(status, bytes = text.len(), "profile response received");
        Ok(RawResponse {
            status,
            body: ResponseBody::from_text(text),
        })
    }

    pub async fn lookup(&self, uid: &str) -> anyhow::Result<Lookup> {
        classify(self.fetch(uid).await?)
    }
}
