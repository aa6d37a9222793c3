#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Lcd(#[from] LcdError),

    #[error("missing field `{field}` in LCD response")]
    MissingField { field: String },

    #[error("field `{field}` in LCD response is not a {expected}")]
    UnexpectedFieldType {
        field: String,
        expected: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// HTTP status and request URL of a call the LCD answered with a
    /// non-2xx status.
    pub fn failed_request(&self) -> Option<(u16, &str)> {
        match self {
            Self::Lcd(LcdError::Status { status, url, .. }) => Some((*status, url.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LcdError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "LCD returned HTTP {status} for {url}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },

    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    #[error("cannot build request URL for path `{path}`: {message}")]
    InvalidUrl { path: String, message: String },
}
