use async_trait::async_trait;
use tracing::debug;

use crate::application::ConjugationProvider;
use crate::domain::{ConjugationEntry, ConjugationResult, DomainError, Tense, PERSON_ORDER};

/// A [`ConjugationProvider`] that answers from a canned template without
/// any network call. Selected with `--mock`; also handy in tests.
///
/// The table is not a real conjugation — every form echoes the infinitive
/// — but it is shaped exactly like a real answer: seven entries in the
/// mandated person order, the three derived forms, a meaning, a trivia.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConjugationProvider for MockProvider {
    async fn fetch(&self, verb: &str, tense: Tense) -> Result<ConjugationResult, DomainError> {
        debug!("MockProvider: answering \"{verb}\" in {} offline", tense.label());

        let entries = PERSON_ORDER
            .iter()
            .map(|person| ConjugationEntry::new(*person, verb))
            .collect();

        Ok(ConjugationResult::new(
            verb,
            tense.label(),
            verb,
            format!("{verb} (gerúndio)"),
            format!("{verb} (particípio)"),
            entries,
            "Resposta de demonstração gerada localmente, sem consulta ao modelo.",
        )
        .with_trivia("Execute sem --mock para consultar a API generativa."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_verb_and_tense() {
        let provider = MockProvider::new();

        let result = provider
            .fetch("cantar", Tense::FutureSubjunctive)
            .await
            .unwrap();

        assert_eq!(result.verb(), "cantar");
        assert_eq!(result.tense(), "Futuro do subjuntivo");
    }

    #[tokio::test]
    async fn test_mock_table_follows_person_order() {
        let provider = MockProvider::new();

        let result = provider
            .fetch("partir", Tense::PresentIndicative)
            .await
            .unwrap();

        let persons: Vec<&str> = result.entries().iter().map(|e| e.person()).collect();
        assert_eq!(persons, PERSON_ORDER);
    }
}
