/// Failures of a dependent-select load. Every variant maps to the error UI
/// outcome inside the loader; none escape the load task.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoaderError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
}
