use serde::{Deserialize, Serialize};

/// Person labels in the order the external model is instructed to emit
/// them. This ordering is a contract requested of the model, not locally
/// enforced on the response.
pub const PERSON_ORDER: [&str; 7] = [
    "Eu",
    "Você",
    "Ele/Ela",
    "A gente",
    "Nós",
    "Vocês",
    "Eles/Elas",
];

/// A single (grammatical person, verb form) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationEntry {
    #[serde(rename = "pessoa")]
    person: String,
    #[serde(rename = "forma")]
    form: String,
}

impl ConjugationEntry {
    pub fn new(person: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            form: form.into(),
        }
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn form(&self) -> &str {
        &self.form
    }
}

/// The full answer for one verb + tense consultation.
///
/// Created whole from a successful query and replaced whole by the next
/// one; there is no partial or merged state. Field names on the wire are
/// the Portuguese ones declared in the response schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationResult {
    #[serde(rename = "verbo")]
    verb: String,
    #[serde(rename = "tempo")]
    tense: String,
    #[serde(rename = "infinitivo")]
    infinitive: String,
    #[serde(rename = "gerundio")]
    gerund: String,
    #[serde(rename = "participioPassado")]
    past_participle: String,
    #[serde(rename = "conjugacoes")]
    entries: Vec<ConjugationEntry>,
    #[serde(rename = "significado")]
    meaning: String,
    #[serde(rename = "curiosidade", skip_serializing_if = "Option::is_none")]
    trivia: Option<String>,
}

impl ConjugationResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        verb: impl Into<String>,
        tense: impl Into<String>,
        infinitive: impl Into<String>,
        gerund: impl Into<String>,
        past_participle: impl Into<String>,
        entries: Vec<ConjugationEntry>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            verb: verb.into(),
            tense: tense.into(),
            infinitive: infinitive.into(),
            gerund: gerund.into(),
            past_participle: past_participle.into(),
            entries,
            meaning: meaning.into(),
            trivia: None,
        }
    }

    pub fn with_trivia(mut self, trivia: impl Into<String>) -> Self {
        self.trivia = Some(trivia.into());
        self
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn tense(&self) -> &str {
        &self.tense
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn gerund(&self) -> &str {
        &self.gerund
    }

    pub fn past_participle(&self) -> &str {
        &self.past_participle
    }

    pub fn entries(&self) -> &[ConjugationEntry] {
        &self.entries
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn trivia(&self) -> Option<&str> {
        self.trivia.as_deref()
    }

    pub fn has_trivia(&self) -> bool {
        self.trivia.as_ref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ConjugationResult {
        let entries = PERSON_ORDER
            .iter()
            .map(|p| ConjugationEntry::new(*p, "canta"))
            .collect();

        ConjugationResult::new(
            "cantar",
            "Presente do indicativo",
            "cantar",
            "cantando",
            "cantado",
            entries,
            "Produzir sons musicais com a voz.",
        )
    }

    #[test]
    fn test_accessors() {
        let result = sample_result();

        assert_eq!(result.verb(), "cantar");
        assert_eq!(result.tense(), "Presente do indicativo");
        assert_eq!(result.entries().len(), 7);
        assert_eq!(result.trivia(), None);
        assert!(!result.has_trivia());
    }

    #[test]
    fn test_with_trivia() {
        let result = sample_result().with_trivia("Muito usado em músicas populares.");

        assert!(result.has_trivia());
        assert_eq!(result.trivia(), Some("Muito usado em músicas populares."));
    }

    #[test]
    fn test_deserializes_from_wire_field_names() {
        let payload = r#"{
            "verbo": "partir",
            "tempo": "Futuro do subjuntivo",
            "infinitivo": "partir",
            "gerundio": "partindo",
            "participioPassado": "partido",
            "conjugacoes": [{"pessoa": "Eu", "forma": "partir"}],
            "significado": "Ir embora."
        }"#;

        let result: ConjugationResult = serde_json::from_str(payload).unwrap();

        assert_eq!(result.verb(), "partir");
        assert_eq!(result.past_participle(), "partido");
        assert_eq!(result.entries()[0].person(), "Eu");
        assert_eq!(result.trivia(), None);
    }

    #[test]
    fn test_missing_required_wire_field_fails() {
        // No "significado".
        let payload = r#"{
            "verbo": "partir",
            "tempo": "Futuro do subjuntivo",
            "infinitivo": "partir",
            "gerundio": "partindo",
            "participioPassado": "partido",
            "conjugacoes": []
        }"#;

        assert!(serde_json::from_str::<ConjugationResult>(payload).is_err());
    }
}
