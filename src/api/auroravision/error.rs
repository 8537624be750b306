use http::StatusCode;
use thiserror::Error;

/// Aurora Vision API errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The authentication endpoint refused the credentials.
    #[error("authentication failed with HTTP {status}")]
    Authentication { status: StatusCode },

    /// The production query failed, including a repeated 401 after re-authentication.
    #[error("failed to fetch the daily production: HTTP {status}")]
    Fetch { status: StatusCode },

    #[error("malformed response")]
    Parse(#[from] ParseError),

    /// Connection, timeout, or I/O failure.
    #[error("request failed")]
    Transport(#[from] ureq::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),

    #[error("entry #{index} has no date")]
    MissingDate { index: usize },

    #[error("entry #{index} has a malformed date `{date}`")]
    MalformedDate {
        index: usize,
        date: String,

        #[source]
        source: chrono::ParseError,
    },
}
