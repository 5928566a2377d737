use alloc::string::String;
use alloc::vec::Vec;

use memchr::{memchr, memchr2};

use yamlite_common::chars::{is_alpha, is_line_end, is_whitespace};
use yamlite_common::text::{to_integer, trim};
use yamlite_common::{Diagnostic, DiagnosticKind, Token, TokenKind};

/// Cursor-plus-view scanner over a terminator-ended byte buffer.
///
/// The final byte of `input` is reserved slack for a trailing terminator and
/// is never part of a token; callers hand in buffers that end with a newline.
/// Tokens borrow from `input`, so the buffer must outlive the tokenizer and
/// every sub-stream cut from it.
pub struct Tokenizer<'input> {
    input: &'input [u8],
    pub(crate) pos: usize,
    label: &'input str,
    line_no: u32,
    indent: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> From<&'a str> for Tokenizer<'a> {
    fn from(value: &'a str) -> Self {
        Tokenizer::new("", value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Tokenizer<'a> {
    fn from(value: &'a [u8]) -> Self {
        Tokenizer::new("", value)
    }
}

impl<'input> Tokenizer<'input> {
    #[must_use]
    pub fn new(label: &'input str, input: &'input [u8]) -> Tokenizer<'input> {
        Tokenizer::with_line_start(label, input, 1)
    }

    /// Tokenizer whose line numbering starts at `line_start`. Sub-streams
    /// use this so their diagnostics carry the parent's line numbers.
    #[must_use]
    pub fn with_line_start(
        label: &'input str,
        input: &'input [u8],
        line_start: u32,
    ) -> Tokenizer<'input> {
        Tokenizer {
            input,
            pos: 0,
            label,
            line_no: line_start,
            indent: 0,
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line_no
    }

    /// Spacing bytes consumed since the most recent line start.
    #[inline]
    #[must_use]
    pub fn indent(&self) -> u32 {
        self.indent
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &'input str {
        self.label
    }

    /// Complaints recorded so far by [`require`](Self::require) and
    /// [`number`](Self::number). Scanning never stops on them.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.diagnostics)
    }

    /// Scans the next token and advances the cursor past it.
    ///
    /// Key/value pairs come out in two steps: the `Key` scan stops in front
    /// of the `:`, and the following call turns the rest of the line into a
    /// `Value` (or `Null` when the line holds nothing more). Unrecognized
    /// input degrades to `Unknown` and scanning continues behind it.
    pub fn next_token(&mut self) -> Token<'input> {
        if self.at_stream_end() {
            return Token::empty(TokenKind::EndOfStream);
        }

        self.skip_whitespace();

        match self.peek() {
            Some(b'#') => {
                self.pos += 1;
                let start = self.pos;
                self.scan_to_line_end();
                // comment text keeps its spacing
                Token::new(TokenKind::Comment, self.slice(start, self.pos))
            }
            Some(b'-') => {
                self.pos += 1;
                let start = self.pos;
                let found_colon = self.scan_to_colon_or_line_end();
                let text = trim(self.slice(start, self.pos));
                if found_colon {
                    // a list member opening a same-line mapping gets no
                    // separate Key token for it
                    self.pos += 1;
                }
                Token::new(TokenKind::ListMember, text)
            }
            Some(b':') => {
                self.pos += 1;
                let start = self.pos;
                self.scan_to_line_end();
                let text = trim(self.slice(start, self.pos));
                if text.is_empty() {
                    Token::empty(TokenKind::Null)
                } else {
                    Token::new(TokenKind::Value, text)
                }
            }
            Some(c) if is_alpha(c) => {
                let start = self.pos;
                if self.scan_to_colon_or_line_end() {
                    // the `:` stays put for the next call
                    Token::new(TokenKind::Key, trim(self.slice(start, self.pos)))
                } else {
                    Token::empty(TokenKind::Unknown)
                }
            }
            Some(_) => {
                self.pos += 1;
                Token::empty(TokenKind::Unknown)
            }
            None => Token::empty(TokenKind::EndOfStream),
        }
    }

    /// Scans the next token and records a diagnostic when its kind is not
    /// `expected`. The mismatched token is returned either way; whether the
    /// mismatch is fatal is the caller's call.
    pub fn require(&mut self, expected: TokenKind) -> Token<'input> {
        let token = self.next_token();
        if !token.is(expected) {
            self.report(DiagnosticKind::UnexpectedToken {
                expected,
                found: token.kind,
            });
        }
        token
    }

    /// Decimal value of a token's text; non-numeric text records a
    /// diagnostic and yields the sentinel `0`. Callers that must tell the
    /// sentinel apart from a literal zero use
    /// [`text::to_integer`](yamlite_common::text::to_integer) directly.
    pub fn number(&mut self, token: &Token) -> i64 {
        match to_integer(token.text) {
            Some(value) => value,
            None => {
                self.report(DiagnosticKind::ExpectedNumber);
                0
            }
        }
    }

    /// Cuts out the nested block that belongs to the token just consumed
    /// and returns an independent tokenizer over it.
    ///
    /// Call right after a `ListMember` or `Key` token, while
    /// [`indent`](Self::indent) still holds that line's indentation. The
    /// block is the maximal contiguous run of following lines indented
    /// strictly deeper than the reference line; whitespace-only lines are
    /// skipped through and settle on the indentation of the next line with
    /// content. When the very next line is not indented deeper, the block
    /// is empty and its first token is `EndOfStream`.
    ///
    /// The parent cursor is left exactly where the block ends, ready to
    /// resume top-level tokenization.
    pub fn nested_block(&mut self) -> Tokenizer<'input> {
        let reference = self.indent;

        self.advance_line();
        let start = self.pos;
        let line_start = self.line_no;

        self.skip_whitespace();
        while self.indent > reference {
            self.advance_line();
            self.skip_whitespace();
        }

        Tokenizer::with_line_start(self.label, self.slice(start, self.pos), line_start)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// One byte of slack stays reserved for the trailing terminator.
    #[inline]
    fn at_stream_end(&self) -> bool {
        self.pos >= self.input.len().saturating_sub(1)
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> &'input [u8] {
        let input: &'input [u8] = self.input;
        &input[start..end]
    }

    fn skip_whitespace(&mut self) {
        self.indent = 0;
        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                break;
            }
            if is_line_end(c) {
                self.line_no += 1;
                self.indent = 0;
            } else {
                self.indent += 1;
            }
            self.pos += 1;
        }
    }

    /// Scan to the next `:` or line end, whichever comes first; running out
    /// of input counts as a line end. `true` when the scan stopped on a `:`.
    fn scan_to_colon_or_line_end(&mut self) -> bool {
        while let Some(c) = self.peek() {
            if c == b':' {
                return true;
            }
            if is_line_end(c) {
                return false;
            }
            self.pos += 1;
        }
        false
    }

    /// Scan up to the line end, stopping at the slack boundary.
    fn scan_to_line_end(&mut self) {
        let limit = self.input.len().saturating_sub(1);
        if self.pos >= limit {
            return;
        }
        self.pos = match memchr2(b'\n', b'\r', &self.input[self.pos..limit]) {
            Some(found) => self.pos + found,
            None => limit,
        };
    }

    /// Advance past the next `\n`, or into the trailing slack when the
    /// buffer runs out first.
    fn advance_line(&mut self) {
        let limit = self.input.len().saturating_sub(1);
        if self.pos < limit {
            self.pos = match memchr(b'\n', &self.input[self.pos..limit]) {
                Some(found) => self.pos + found,
                None => limit,
            };
        }
        self.pos = (self.pos + 1).min(self.input.len());
        self.line_no += 1;
    }

    fn report(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            label: String::from(self.label),
            line: self.line_no,
            kind,
        });
    }
}

#[test]
fn test_forward_progress() {
    let mut tokenizer = Tokenizer::from("key: 1\n@@ %\n");
    let mut last = 0;
    loop {
        let token = tokenizer.next_token();
        if token.is(TokenKind::EndOfStream) {
            break;
        }
        assert!(tokenizer.pos > last, "cursor stalled at {last}");
        last = tokenizer.pos;
    }
}

#[test]
fn test_indent_tracking() {
    let mut tokenizer = Tokenizer::from("  - siSession:\n");
    let token = tokenizer.next_token();
    assert!(token.is(TokenKind::ListMember));
    assert_eq!(tokenizer.indent(), 2);
    assert_eq!(tokenizer.line(), 1);

    let mut tokenizer = Tokenizer::from("\n\n    key: 1\n");
    let token = tokenizer.next_token();
    assert!(token.is(TokenKind::Key));
    assert_eq!(tokenizer.indent(), 4);
    assert_eq!(tokenizer.line(), 3);
}

#[test]
fn test_number_sentinel() {
    let mut tokenizer = Tokenizer::new("cfg.yaml", b"rep: 12a\nsiId: 42\n");
    tokenizer.next_token();
    let bad = tokenizer.require(TokenKind::Value);
    assert_eq!(tokenizer.number(&bad), 0);
    tokenizer.next_token();
    let good = tokenizer.require(TokenKind::Value);
    assert_eq!(tokenizer.number(&good), 42);

    let diagnostics = tokenizer.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].label, "cfg.yaml");
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::ExpectedNumber);
}
