//! Network access to the SaveEcoBot feed.

use futures::future::BoxFuture;
use lazy_static::lazy_static;
use structopt::clap::crate_version;
use surf::middleware::{Next, Redirect};
use surf::{http::headers, Client, Request, Response};

use crate::prelude::*;

/// Public JSON feed with all the stations.
pub const FEED_URL: &str = "https://api.saveecobot.com/output.json";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!(
    "SaveEcoBot Sensors / ",
    crate_version!(),
    " (Rust; https://api.saveecobot.com)"
);

lazy_static! {
    /// `Client` instance used to make outgoing requests.
    pub static ref CLIENT: Client = surf::client()
        .with(Redirect::default())
        .with(inject_default_headers);
}

/// Raw feed response. The status is checked by the caller.
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of the raw feed.
///
/// An `Err` means the feed could not be reached at all (connection error or timeout),
/// any HTTP status is returned as `Ok`.
pub trait Feed: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<FeedResponse>>;
}

/// The feed served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,

    /// Bounds the whole call, including the body download.
    timeout: Duration,
}

impl HttpFeed {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self {
            url: url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn call(&self) -> Result<FeedResponse> {
        let mut response = CLIENT.get(&self.url).await.map_err(|err| anyhow!(err))?;
        let status: u16 = response.status().into();
        let body = response.body_string().await.map_err(|err| anyhow!(err))?;
        Ok(FeedResponse { status, body })
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new(FEED_URL)
    }
}

impl Feed for HttpFeed {
    fn fetch(&self) -> BoxFuture<'_, Result<FeedResponse>> {
        Box::pin(async move {
            debug!("Calling {}…", self.url);
            let response = async_std::future::timeout(self.timeout, self.call())
                .await
                .with_context(|| format!("{} has not responded in {:?}", self.url, self.timeout))??;
            debug!("Finished {}: {} bytes.", self.url, response.body.len());
            Ok(response)
        })
    }
}

/// Injects the default HTTP headers to all outgoing requests.
fn inject_default_headers(request: Request, client: Client, next: Next) -> BoxFuture<surf::Result<Response>> {
    Box::pin(async move {
        let mut request = request;
        request.insert_header(headers::USER_AGENT, USER_AGENT);
        next.run(request, client).await
    })
}
