pub mod interface;
pub mod ollama;

pub use interface::*;
pub use ollama::*;
