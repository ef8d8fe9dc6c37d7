use tracing::debug;

use crate::error::Error;
use crate::hash;

/// Default base URL for the main Have I Been Pwned API.
pub const HIBP_API_BASE: &str = "https://haveibeenpwned.com/api/v3";

/// Default base URL for the Pwned Passwords range endpoint.
pub const PWNED_RANGE_BASE: &str = "https://api.pwnedpasswords.com/range";

/// Header carrying the API key on authenticated requests.
pub const API_KEY_HEADER: &str = "hibp-api-key";

/// Blocking client for the Have I Been Pwned v3 API and the Pwned Passwords
/// range endpoint.
///
/// Each operation issues exactly one GET and blocks until the response
/// completes or the transport fails. The client holds no per-call state: the
/// API key is an argument to the authenticated operations and is never
/// stored, logged, or re-sent.
///
/// The two endpoint families signal failure differently, matching the
/// upstream service's contract:
///
/// - unauthenticated operations return `Ok(None)` for any non-2xx status
///   (the status itself is not exposed, so a 404 "no breaches" and a 500 are
///   indistinguishable from this signal alone);
/// - authenticated operations return the body unconditionally, error bodies
///   included, and callers inspect the content to detect failure.
///
/// Transport-level faults (DNS, connect, TLS, body read) surface as
/// [`Error::Transport`] on both paths.
#[derive(Debug, Clone)]
pub struct HibpClient {
    http: reqwest::blocking::Client,
    api_base: String,
    range_base: String,
}

/// Builder for [`HibpClient`].
///
/// The defaults target the production endpoints; tests point `api_base` and
/// `range_base` at a mock server instead.
#[derive(Debug)]
pub struct HibpClientBuilder {
    api_base: String,
    range_base: String,
    user_agent: String,
}

impl HibpClientBuilder {
    fn new() -> Self {
        Self {
            api_base: HIBP_API_BASE.to_string(),
            range_base: PWNED_RANGE_BASE.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }

    /// Overrides the base URL for the main API.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Overrides the base URL for the password-range endpoint.
    pub fn range_base(mut self, url: impl Into<String>) -> Self {
        self.range_base = url.into();
        self
    }

    /// Overrides the `user-agent` header. The API rejects requests without one.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.user_agent = value.into();
        self
    }

    pub fn build(self) -> Result<HibpClient, Error> {
        // Redirects stay off so a call maps to exactly one outgoing request
        // and the key header cannot be replayed to a second location.
        let http = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(HibpClient {
            http,
            api_base: trim_trailing_slash(self.api_base),
            range_base: trim_trailing_slash(self.range_base),
        })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

impl HibpClient {
    /// Creates a client targeting the production endpoints.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> HibpClientBuilder {
        HibpClientBuilder::new()
    }

    /// All breaches in the system, optionally filtered to a single domain.
    ///
    /// A `None` or empty filter returns every breach; a non-empty filter is
    /// passed through as the `domain` query parameter exactly as given.
    pub fn breaches(&self, domain: Option<&str>) -> Result<Option<String>, Error> {
        let url = format!("{}/breaches", self.api_base);
        let filter = domain.filter(|d| !d.is_empty());
        self.get(&url, filter.map(|d| ("domain", d)))
    }

    /// A single breach by its canonical name, e.g. `"Adobe"`.
    ///
    /// The name lands in the URL path as given; callers URL-encode it when
    /// it needs encoding.
    pub fn breach(&self, name: &str) -> Result<Option<String>, Error> {
        let url = format!("{}/breach/{}", self.api_base, name);
        self.get(&url, None)
    }

    /// All data classes in the system.
    pub fn data_classes(&self) -> Result<Option<String>, Error> {
        let url = format!("{}/dataclasses", self.api_base);
        self.get(&url, None)
    }

    /// All pastes for an account. Authenticated; the body comes back
    /// whatever the status.
    pub fn pastes_for_account(&self, email: &str, api_key: &str) -> Result<String, Error> {
        let url = format!("{}/pasteaccount/{}", self.api_base, email);
        self.get_with_key(&url, api_key)
    }

    /// All breaches for an account. Authenticated; the body comes back
    /// whatever the status.
    pub fn breaches_for_account(&self, email: &str, api_key: &str) -> Result<String, Error> {
        let url = format!("{}/breachedaccount/{}", self.api_base, email);
        self.get_with_key(&url, api_key)
    }

    /// The range page for a 5-character SHA-1 prefix.
    ///
    /// `hash_prefix` is appended to the URL untouched; no truncation or
    /// validation happens here. [`crate::hash::range_prefix`] produces a
    /// suitable prefix from a password.
    pub fn password_range(&self, hash_prefix: &str) -> Result<Option<String>, Error> {
        let url = format!("{}/{}", self.range_base, hash_prefix);
        self.get(&url, None)
    }

    /// How many times a password appears in the Pwned Passwords corpus.
    ///
    /// Hashes the password, fetches the range page for its 5-character
    /// prefix, and scans the `SUFFIX:COUNT` lines for the remaining 35
    /// digest characters. Only the prefix ever leaves the process.
    pub fn breach_count(&self, password: &str) -> Result<u64, Error> {
        let digest = hash::sha1_hex(password);
        let (prefix, suffix) = digest.split_at(hash::PREFIX_LEN);
        let Some(page) = self.password_range(&prefix.to_ascii_uppercase())? else {
            return Ok(0);
        };

        for line in page.lines() {
            let Some((candidate, count)) = line.split_once(':') else {
                continue;
            };
            if candidate.eq_ignore_ascii_case(suffix) {
                return Ok(count.trim().parse().unwrap_or(0));
            }
        }

        Ok(0)
    }

    /// Whether a password appears in the Pwned Passwords corpus at all.
    pub fn is_breached(&self, password: &str) -> Result<bool, Error> {
        Ok(self.breach_count(password)? > 0)
    }

    /// Unauthenticated GET: the body on 2xx, `None` on any other status.
    fn get(&self, url: &str, query: Option<(&str, &str)>) -> Result<Option<String>, Error> {
        let mut request = self.http.get(url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        let response = request.send().map_err(|e| Error::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "non-success status, dropping body");
            return Ok(None);
        }

        let body = response.text().map_err(|e| Error::Transport {
            url: url.to_string(),
            source: e,
        })?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "request completed");

        Ok(Some(body))
    }

    /// Authenticated GET: the body comes back no matter the status, error
    /// bodies included.
    fn get_with_key(&self, url: &str, api_key: &str) -> Result<String, Error> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| Error::Transport {
            url: url.to_string(),
            source: e,
        })?;
        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            "authenticated request completed"
        );

        Ok(body)
    }
}
