use async_trait::async_trait;

use crate::domain::{ConjugationResult, DomainError, Tense};

/// An interface for resolving a verb and tense into a full conjugation
/// table.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (the use case and both user interfaces) remain
/// decoupled from any particular provider or HTTP client library, so a
/// fake can be substituted in tests.
#[async_trait]
pub trait ConjugationProvider: Send + Sync {
    /// Resolve `verb` conjugated in `tense`.
    ///
    /// One outbound call per invocation; no retry, no caching. Fails with
    /// the transport, empty-response, or parse kind of [`DomainError`]
    /// depending on where the call broke down.
    async fn fetch(&self, verb: &str, tense: Tense) -> Result<ConjugationResult, DomainError>;
}
