#![no_std]
extern crate alloc;
extern crate core;
extern crate yamlite_common;

pub mod tokenizer;

pub use tokenizer::TokenIter;
pub use tokenizer::Tokenizer;
pub use yamlite_common::{Diagnostic, DiagnosticKind, Token, TokenKind};
