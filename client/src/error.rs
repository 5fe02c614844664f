use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode {endpoint} response: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
}
