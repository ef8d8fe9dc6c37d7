#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to construct HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
