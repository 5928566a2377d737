//! Typed view over tokenized record blocks.
//!
//! The tokenizer hands out flat `Key`/`Value` pairs; this module maps one
//! block of them into typed entries, and whole documents into lists of
//! named blocks.

use log::warn;
use yamlite_common::text::to_integer;
use yamlite_common::TokenKind;
use yamlite_core::Tokenizer;

/// Scalar forms the restricted subset can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Integer(i64),
    Text(String),
}

impl Scalar {
    /// Types a raw value span: a run of decimal digits becomes `Integer`,
    /// everything else stays `Text`.
    #[must_use]
    pub fn parse(span: &[u8]) -> Scalar {
        match to_integer(span) {
            Some(value) => Scalar::Integer(value),
            None => Scalar::Text(String::from_utf8_lossy(span).into_owned()),
        }
    }
}

/// One `key: value` pair of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Scalar,
}

/// Drains one block of `key: value` pairs from a tokenizer.
///
/// Comments are tokens, not trivia, so they are skipped here explicitly;
/// `Unknown` tokens are ignored in the same best-effort spirit. A key whose
/// value token is missing is dropped with a warning.
pub fn collect_entries(tokenizer: &mut Tokenizer) -> Vec<Entry> {
    let mut entries = Vec::new();
    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::EndOfStream => break,
            TokenKind::Key => {
                let key = String::from(token.text_str());
                let value = tokenizer.next_token();
                let value = match value.kind {
                    TokenKind::Value => Scalar::parse(value.text),
                    TokenKind::Null => Scalar::Null,
                    found => {
                        warn!(
                            "{} (lineNo={}): no value for key {key}, found {found:?}",
                            tokenizer.label(),
                            tokenizer.line()
                        );
                        continue;
                    }
                };
                entries.push(Entry { key, value });
            }
            TokenKind::Comment | TokenKind::Unknown => {}
            _ => {}
        }
    }
    entries
}

/// Collects every nested block announced by a `ListMember` whose text is
/// `block_name` out of a top-level document.
///
/// Diagnostics the scanners accumulate along the way are drained to the
/// log; they never abort the collection.
pub fn collect_blocks(label: &str, input: &[u8], block_name: &str) -> Vec<Vec<Entry>> {
    let mut tokenizer = Tokenizer::new(label, input);
    let mut blocks = Vec::new();
    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::EndOfStream => break,
            TokenKind::ListMember if token.equals(block_name) => {
                let mut block = tokenizer.nested_block();
                blocks.push(collect_entries(&mut block));
                drain_diagnostics(&mut block);
            }
            _ => {}
        }
    }
    drain_diagnostics(&mut tokenizer);
    blocks
}

fn drain_diagnostics(tokenizer: &mut Tokenizer) {
    for diagnostic in tokenizer.take_diagnostics() {
        warn!("{diagnostic}");
    }
}
