mod conjugation;
mod history;
mod tense;

pub use conjugation::*;
pub use history::*;
pub use tense::*;
