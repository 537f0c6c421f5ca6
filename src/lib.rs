pub mod application;
pub mod connector;
pub mod domain;
pub mod tui;

pub use application::{ConjugationProvider, ConsultVerbUseCase};

pub use connector::{GeminiClient, MockProvider};

pub use domain::{
    ConjugationEntry, ConjugationResult, DomainError, SearchHistory, Tense, GENERIC_QUERY_MESSAGE,
    PERSON_ORDER, UNKNOWN_QUERY_MESSAGE,
};
