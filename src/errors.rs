use thiserror::Error;

/// Failures of the HTTP/JSON layer underneath a call.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("unable to parse response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request was cancelled")]
    Cancelled,
    #[error("transport has been released")]
    Released,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid argument {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
    #[error("{argument} has an invalid format, expected {expected}")]
    InvalidFormat {
        argument: &'static str,
        expected: &'static str,
    },
    #[error("{argument} is out of range: {reason}")]
    OutOfRange {
        argument: &'static str,
        reason: &'static str,
    },
    #[error("client has already been disposed")]
    UseAfterDispose,
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}

impl ClientError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }

    pub(crate) fn invalid_format(argument: &'static str, expected: &'static str) -> Self {
        Self::InvalidFormat { argument, expected }
    }

    pub(crate) fn out_of_range(argument: &'static str, reason: &'static str) -> Self {
        Self::OutOfRange { argument, reason }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        Self::Protocol(ProtocolError::Json(value))
    }
}
