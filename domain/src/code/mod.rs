//! Code-block extraction from model replies.
//!
//! Models are asked to wrap their program in a language-tagged fenced
//! block. These helpers pull the first such block out of the reply, and
//! fall back to the whole reply when the model ignored the instruction.

mod extract;

pub use extract::{CodeExtractor, DEFAULT_LANGUAGE, extract_code};
