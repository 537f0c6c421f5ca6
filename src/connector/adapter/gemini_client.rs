use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::application::ConjugationProvider;
use crate::domain::{ConjugationResult, DomainError, Tense, PERSON_ORDER};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GENERATE_PATH: &str = "/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Gemini `generateContent` request payload (the subset we use).
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

/// Minimal subset of the `generateContent` response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Implements [`ConjugationProvider`] so higher-level components stay
/// decoupled from transport and serialization details. Each call is a
/// single attempt — no retry, no rate-limit handling — and declares a
/// structured-output schema so the model answers with the conjugation
/// JSON directly.
///
/// Configuration comes from the environment via [`GeminiClient::from_env`]:
///
/// | Variable          | Default                                      | Purpose            |
/// |-------------------|----------------------------------------------|--------------------|
/// | `GEMINI_API_KEY`  | `""` (empty)                                 | API credential     |
/// | `GEMINI_MODEL`    | `gemini-3-flash-preview`                     | Model identifier   |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  | Endpoint override  |
///
/// A missing key is not validated locally; the first call fails with a
/// transport error and the UI surfaces the normalized message.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Construct from environment variables (see the type-level table).
    pub fn from_env() -> Self {
        let key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(key, model, base)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}{}/{}:generateContent",
            self.base_url, GENERATE_PATH, self.model
        )
    }

    /// Natural-language instruction sent to the model.
    ///
    /// Spells out the Brazilian Portuguese pronoun substitutions ("tu" →
    /// "Você" in the third person singular, "vós" → "Vocês" in the third
    /// person plural, "A gente" added in the third person singular) and
    /// the exact person order the table must follow.
    fn build_instruction(verb: &str, tense: Tense) -> String {
        let person_list = PERSON_ORDER
            .iter()
            .map(|p| format!("       - \"{p}\""))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Conjugue o verbo \"{verb}\" no tempo verbal \"{tense}\" em português do Brasil.\n\
             \n\
             REGRAS IMPORTANTES DE FORMATAÇÃO E CONTEÚDO:\n\
             1. NÃO utilize o pronome \"tu\".\n\
             2. No lugar de \"tu\", utilize o pronome \"Você\".\n\
             3. O pronome \"Você\" deve ser conjugado seguindo a 3ª pessoa do singular.\n\
             4. Também substitua \"vós\" por \"Vocês\" (conjugado na 3ª pessoa do plural).\n\
             5. ADICIONE o pronome \"A gente\". Ele deve ser conjugado obrigatoriamente \
             seguindo a 3ª pessoa do singular (igual a \"Você\" ou \"Ele/Ela\").\n\
             6. A lista de conjugações deve seguir EXATAMENTE esta ordem de pessoas:\n\
             {person_list}\n\
             \n\
             Forneça também o significado e uma curiosidade sobre o uso desse verbo no \
             cotidiano.",
            tense = tense.label(),
        )
    }

    /// Structured-output schema declared to the model. Field names match
    /// the serde renames on [`ConjugationResult`]; `curiosidade` is the
    /// only optional field.
    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "verbo": { "type": "STRING" },
                "tempo": { "type": "STRING" },
                "infinitivo": { "type": "STRING" },
                "gerundio": { "type": "STRING" },
                "participioPassado": { "type": "STRING" },
                "conjugacoes": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "pessoa": { "type": "STRING" },
                            "forma": { "type": "STRING" }
                        },
                        "required": ["pessoa", "forma"]
                    }
                },
                "significado": { "type": "STRING" },
                "curiosidade": { "type": "STRING" }
            },
            "required": [
                "verbo",
                "tempo",
                "infinitivo",
                "gerundio",
                "participioPassado",
                "conjugacoes",
                "significado"
            ]
        })
    }

    fn parse_payload(text: &str) -> Result<ConjugationResult, DomainError> {
        serde_json::from_str(text).map_err(|e| {
            DomainError::parse(format!("payload did not match the expected structure: {e}"))
        })
    }
}

#[async_trait]
impl ConjugationProvider for GeminiClient {
    async fn fetch(&self, verb: &str, tense: Tense) -> Result<ConjugationResult, DomainError> {
        let instruction = Self::build_instruction(verb, tense);
        let request = ApiRequest {
            contents: vec![Content {
                parts: vec![Part { text: &instruction }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
            },
        };

        debug!("GeminiClient: requesting \"{verb}\" in {}", tense.label());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::transport(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::parse(format!("GeminiClient: failed to parse response envelope: {e}"))
        })?;

        let text: String = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(DomainError::empty_response(
                "GeminiClient: model returned no text",
            ));
        }

        debug!("GeminiClient raw payload: {text}");
        Self::parse_payload(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_verb_and_tense_label() {
        let text = GeminiClient::build_instruction("cantar", Tense::ImperfectSubjunctive);

        assert!(text.contains("\"cantar\""));
        assert!(text.contains("\"Pretérito imperfeito do subjuntivo\""));
    }

    #[test]
    fn instruction_mandates_pronoun_substitutions() {
        let text = GeminiClient::build_instruction("ser", Tense::PresentIndicative);

        assert!(text.contains("NÃO utilize o pronome \"tu\""));
        assert!(text.contains("substitua \"vós\" por \"Vocês\""));
        assert!(text.contains("ADICIONE o pronome \"A gente\""));
    }

    #[test]
    fn instruction_lists_persons_in_mandated_order() {
        let text = GeminiClient::build_instruction("ser", Tense::PresentIndicative);

        let mut last = 0;
        for person in PERSON_ORDER {
            let quoted = format!("\"{person}\"");
            let pos = text[last..]
                .find(&quoted)
                .unwrap_or_else(|| panic!("{person} missing or out of order"));
            last += pos + quoted.len();
        }
    }

    #[test]
    fn schema_requires_everything_but_trivia() {
        let schema = GeminiClient::response_schema();

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        for field in [
            "verbo",
            "tempo",
            "infinitivo",
            "gerundio",
            "participioPassado",
            "conjugacoes",
            "significado",
        ] {
            assert!(required.contains(&field), "{field} should be required");
        }
        assert!(!required.contains(&"curiosidade"));
        assert!(schema["properties"]["curiosidade"].is_object());
    }

    #[test]
    fn parse_payload_accepts_schema_shaped_json() {
        let payload = r#"{
            "verbo": "cantar",
            "tempo": "Presente do indicativo",
            "infinitivo": "cantar",
            "gerundio": "cantando",
            "participioPassado": "cantado",
            "conjugacoes": [
                {"pessoa": "Eu", "forma": "canto"},
                {"pessoa": "Você", "forma": "canta"}
            ],
            "significado": "Produzir sons musicais com a voz.",
            "curiosidade": "Aparece em expressões como \"cantar vitória\"."
        }"#;

        let result = GeminiClient::parse_payload(payload).unwrap();

        assert_eq!(result.verb(), "cantar");
        assert_eq!(result.entries().len(), 2);
        assert!(result.has_trivia());
    }

    #[test]
    fn parse_payload_rejects_prose() {
        let err = GeminiClient::parse_payload("desculpe, não conheço esse verbo").unwrap_err();

        assert!(err.is_parse_error());
    }

    #[test]
    fn url_is_built_from_model_and_base() {
        let client = GeminiClient::new("key", "gemini-3-flash-preview", "http://localhost:9000/");

        assert_eq!(
            client.url(),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn builder_overrides_replace_defaults() {
        let client = GeminiClient::new("key", DEFAULT_MODEL, DEFAULT_BASE_URL)
            .with_model("gemini-other")
            .with_base_url("http://localhost:1234/");

        assert_eq!(
            client.url(),
            "http://localhost:1234/v1beta/models/gemini-other:generateContent"
        );
    }
}
