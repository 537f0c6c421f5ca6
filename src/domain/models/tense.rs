use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The closed set of Brazilian Portuguese tense/mood labels a conjugation
/// can be requested for. Fixed at compile time, never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    PresentIndicative,
    ImperfectIndicative,
    PreteriteIndicative,
    PluperfectIndicative,
    FutureIndicative,
    ConditionalIndicative,
    PresentSubjunctive,
    ImperfectSubjunctive,
    FutureSubjunctive,
    AffirmativeImperative,
    NegativeImperative,
    PersonalInfinitive,
}

impl Tense {
    /// Display order, matching the order a selector presents them in.
    pub const ALL: [Tense; 12] = [
        Tense::PresentIndicative,
        Tense::ImperfectIndicative,
        Tense::PreteriteIndicative,
        Tense::PluperfectIndicative,
        Tense::FutureIndicative,
        Tense::ConditionalIndicative,
        Tense::PresentSubjunctive,
        Tense::ImperfectSubjunctive,
        Tense::FutureSubjunctive,
        Tense::AffirmativeImperative,
        Tense::NegativeImperative,
        Tense::PersonalInfinitive,
    ];

    /// The exact human-facing label. This string is embedded verbatim in
    /// the request sent to the external model.
    pub fn label(&self) -> &'static str {
        match self {
            Tense::PresentIndicative => "Presente do indicativo",
            Tense::ImperfectIndicative => "Pretérito imperfeito do indicativo",
            Tense::PreteriteIndicative => "Pretérito perfeito do indicativo",
            Tense::PluperfectIndicative => "Pretérito mais-que-perfeito do indicativo",
            Tense::FutureIndicative => "Futuro do presente do indicativo",
            Tense::ConditionalIndicative => "Futuro do pretérito do indicativo",
            Tense::PresentSubjunctive => "Presente do subjuntivo",
            Tense::ImperfectSubjunctive => "Pretérito imperfeito do subjuntivo",
            Tense::FutureSubjunctive => "Futuro do subjuntivo",
            Tense::AffirmativeImperative => "Imperativo afirmativo",
            Tense::NegativeImperative => "Imperativo negativo",
            Tense::PersonalInfinitive => "Infinitivo pessoal",
        }
    }

    /// ASCII slug used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Tense::PresentIndicative => "presente",
            Tense::ImperfectIndicative => "preterito-imperfeito",
            Tense::PreteriteIndicative => "preterito-perfeito",
            Tense::PluperfectIndicative => "mais-que-perfeito",
            Tense::FutureIndicative => "futuro-do-presente",
            Tense::ConditionalIndicative => "futuro-do-preterito",
            Tense::PresentSubjunctive => "presente-subjuntivo",
            Tense::ImperfectSubjunctive => "imperfeito-subjuntivo",
            Tense::FutureSubjunctive => "futuro-subjuntivo",
            Tense::AffirmativeImperative => "imperativo-afirmativo",
            Tense::NegativeImperative => "imperativo-negativo",
            Tense::PersonalInfinitive => "infinitivo-pessoal",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tense {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tense::ALL
            .iter()
            .find(|t| t.slug() == wanted)
            .copied()
            .ok_or_else(|| {
                DomainError::invalid_input(format!(
                    "tempo verbal desconhecido: \"{s}\" (ex.: presente, preterito-perfeito)"
                ))
            })
    }
}
