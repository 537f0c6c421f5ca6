mod gemini_client;
mod mock_provider;

pub use gemini_client::*;
pub use mock_provider::*;
