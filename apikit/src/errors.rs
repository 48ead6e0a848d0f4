use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected client-side before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend could not be reached at all.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `detail` carries the
    /// server's own message when the body had one, otherwise the status
    /// line.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for an expired or invalid token. The gateway never acts on
    /// this itself; the session layer decides what to do.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
