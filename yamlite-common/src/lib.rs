#![no_std]
extern crate alloc;
extern crate core;

pub mod chars;
pub mod text;

use alloc::string::String;
use core::fmt::{Display, Formatter};
use core::str::from_utf8;

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum YamlError {
    Io(String),
}

impl Display for YamlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            YamlError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

/// Classification of one lexical unit of the restricted YAML subset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Unknown,
    Null,
    ListMember,
    Key,
    Value,
    Comment,
    EndOfStream,
}

/// One classified span of input text.
///
/// `text` borrows from the buffer the token was scanned out of; the buffer
/// must outlive every token cut from it. `Null` and `EndOfStream` carry an
/// empty span by convention.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub text: &'input [u8],
}

impl<'input> Token<'input> {
    #[must_use]
    pub fn new(kind: TokenKind, text: &'input [u8]) -> Token<'input> {
        Token { kind, text }
    }

    #[must_use]
    pub fn empty(kind: TokenKind) -> Token<'input> {
        Token { kind, text: b"" }
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Bytewise comparison against a literal, no case folding.
    #[must_use]
    pub fn equals(&self, literal: &str) -> bool {
        text::eq_literal(self.text, literal)
    }

    /// Text of the token as a string slice. Invalid UTF-8 degrades to `""`.
    #[must_use]
    pub fn text_str(&self) -> &'input str {
        from_utf8(self.text).unwrap_or("")
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{kind={:?} text={}}}", self.kind, self.text_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    ExpectedNumber,
}

/// A non-fatal complaint recorded while scanning.
///
/// Rendering happens through [`Display`] at the call site that drains the
/// diagnostics; the tokenizer itself never writes anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: String,
    pub line: u32,
    pub kind: DiagnosticKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (lineNo={}): ", self.label, self.line)?;
        match &self.kind {
            DiagnosticKind::UnexpectedToken { expected, found } => {
                write!(f, "unexpected token (expected {expected:?}, found {found:?})")
            }
            DiagnosticKind::ExpectedNumber => write!(f, "expected number value"),
        }
    }
}
