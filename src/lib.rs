//! Thin blocking client for the [Have I Been Pwned](https://haveibeenpwned.com)
//! v3 API and the Pwned Passwords range endpoint.
//!
//! Every operation maps to exactly one HTTP GET and hands back the raw
//! response body. There is no retry logic, no caching, and no JSON modeling;
//! callers parse the body themselves or pass it along verbatim.
//!
//! Unauthenticated endpoints (breach catalogue, data classes, password
//! ranges) yield the body only on a 2xx status and `None` otherwise.
//! Authenticated endpoints (per-account breaches and pastes) require an API
//! key, passed per call, and return the body unconditionally so that the
//! service's error payloads reach the caller untouched.
//!
//! # Usage
//!
//! ```no_run
//! use hibp_lookup::HibpClient;
//!
//! let client = HibpClient::new()?;
//!
//! if let Some(body) = client.breach("Adobe")? {
//!     println!("{body}");
//! }
//!
//! let key = hibp_lookup::api_key_from_env().expect("HIBP_API_KEY not set");
//! let pastes = client.pastes_for_account("test@example.com", &key)?;
//! println!("{pastes}");
//! # Ok::<(), hibp_lookup::Error>(())
//! ```
//!
//! Password checks go through the k-anonymity range endpoint: only the first
//! 5 hex characters of the password's SHA-1 digest are sent upstream.
//!
//! ```no_run
//! use hibp_lookup::{HibpClient, hash};
//!
//! let client = HibpClient::new()?;
//! if let Some(page) = client.password_range(&hash::range_prefix("password"))? {
//!     println!("{page}");
//! }
//! println!("seen {} times", client.breach_count("password")?);
//! # Ok::<(), hibp_lookup::Error>(())
//! ```

pub mod client;
pub mod error;
pub mod hash;

pub use client::{API_KEY_HEADER, HIBP_API_BASE, HibpClient, HibpClientBuilder, PWNED_RANGE_BASE};
pub use error::Error;
pub use hash::{range_prefix, sha1_hex};

/// Environment variable read by [`api_key_from_env`].
pub const HIBP_API_KEY_ENV: &str = "HIBP_API_KEY";

/// Returns the API key from the `HIBP_API_KEY` environment variable, if set.
///
/// Convenience only: the authenticated operations take the key as an
/// explicit argument, and the client never stores one.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(HIBP_API_KEY_ENV).ok()
}
