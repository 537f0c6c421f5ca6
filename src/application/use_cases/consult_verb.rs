use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::application::ConjugationProvider;
use crate::domain::{ConjugationResult, DomainError, Tense};

/// Consults the conjugation of one verb in one tense.
///
/// Normalizes the verb (trim + lower-case) before it reaches the provider
/// and rejects blank input. Everything else — including which order the
/// returned persons arrive in — is the provider's contract.
pub struct ConsultVerbUseCase {
    provider: Arc<dyn ConjugationProvider>,
}

impl ConsultVerbUseCase {
    pub fn new(provider: Arc<dyn ConjugationProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(
        &self,
        verb: &str,
        tense: Tense,
    ) -> Result<ConjugationResult, DomainError> {
        let verb = verb.trim().to_lowercase();
        if verb.is_empty() {
            return Err(DomainError::invalid_input("informe um verbo para conjugar"));
        }

        info!("Consulting \"{}\" in {}", verb, tense.label());
        let start_time = Instant::now();

        let result = self.provider.fetch(&verb, tense).await?;

        info!(
            "Resolved \"{}\" ({} forms) in {:.2}s",
            result.verb(),
            result.entries().len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }
}
