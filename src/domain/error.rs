use thiserror::Error;

/// Message shown to the user when a consultation fails, regardless of the
/// underlying failure kind.
pub const GENERIC_QUERY_MESSAGE: &str =
    "Não foi possível processar a conjugação. Verifique se o verbo existe ou tente novamente.";

/// Fallback shown when a failure somehow carries no message at all.
pub const UNKNOWN_QUERY_MESSAGE: &str = "Erro desconhecido ao consultar o verbo.";

#[derive(Debug, Error)]
pub enum DomainError {
    /// The external call succeeded but returned no textual payload.
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// A payload was present but did not decode into the expected structure.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The call itself was rejected (network, auth, quota).
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn empty_response(msg: impl Into<String>) -> Self {
        Self::EmptyResponse(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// The message a UI should display for this failure.
    ///
    /// Provider failures all normalize to [`GENERIC_QUERY_MESSAGE`]; the
    /// diagnostic cause stays in the variant payload and is only logged.
    /// `InvalidInput` keeps its own message since it describes the user's
    /// input, not the external call.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            _ => GENERIC_QUERY_MESSAGE.to_string(),
        }
    }
}
