//! Tokenizers and the factory that builds them.

mod factory;
mod preprocess;
mod tokenizer;

pub use factory::TokenizerFactory;
pub use preprocess::{CommonPreProcessor, LowercasePreProcessor, TokenPreProcess};
pub use tokenizer::{TokenSelection, Tokenizer};
