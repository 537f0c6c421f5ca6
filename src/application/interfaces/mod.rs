mod conjugation_provider;

pub use conjugation_provider::*;
