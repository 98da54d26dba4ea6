use crate::error::ClientError;

/// Client-wide `Result` alias with `ClientError` as the default error.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;
