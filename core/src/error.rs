use thiserror::Error;

// Failure of a single tool invocation. Nothing here affects process-wide state.
#[derive(Debug, Error)]
pub enum ToolError {
    // The outbound webhook call never produced a response (DNS, connect, TLS, timeout)
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    // Arguments are not shaped like any request the tool could read (e.g. not an object)
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}
