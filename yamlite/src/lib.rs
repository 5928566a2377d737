pub mod loader;
pub mod source;

pub use loader::{collect_blocks, collect_entries, Entry, Scalar};
pub use source::read_file;
pub use yamlite_common::{Diagnostic, DiagnosticKind, Token, TokenKind, YamlError, YamlResult};
pub use yamlite_core::{TokenIter, Tokenizer};
