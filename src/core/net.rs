// src/core/net.rs
// Page fetching. Scrapers only see the `Fetch` trait; `HttpFetcher` is the real one.

use std::io::Read;
use std::time::Duration;

use url::Url;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Cap on a single page body.
const MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// A fetched page. `url` is the final address after redirects,
/// which is what relative links must be resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub body: String,
}

/// Blocking page source, shared across worker threads.
pub trait Fetch: Sync {
    fn get(&self, url: &str) -> Result<Page, FetchError>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        let resp = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => FetchError::Status { url: s!(url), status },
            ureq::Error::Transport(t) => FetchError::Transport { url: s!(url), message: t.to_string() },
        })?;

        let final_url = s!(resp.get_url());
        let mut buf = Vec::new();
        resp.into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut buf)
            .map_err(|e| FetchError::Transport { url: s!(url), message: e.to_string() })?;

        Ok(Page { url: final_url, body: String::from_utf8_lossy(&buf).into_owned() })
    }
}

/// Resolve `href` (absolute, root-relative or relative) against `base`.
pub fn resolve_url(base: &str, href: &str) -> Result<String, FetchError> {
    let bad = || FetchError::BadUrl { base: s!(base), href: s!(href) };
    let base_url = Url::parse(base).map_err(|_| bad())?;
    let joined = base_url.join(href.trim()).map_err(|_| bad())?;
    Ok(joined.into())
}
