mod consult_verb;

pub use consult_verb::*;
