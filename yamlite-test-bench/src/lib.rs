pub mod consts;

use std::fmt::Write;

use yamlite_common::TokenKind;
use yamlite_core::Tokenizer;

///
/// Assert that for given input, the tokenizer generates the expected token
/// stream.
///
/// # Panics
///
///    Function panics if there is a difference between the expected token
///    string and the one generated from the input.
pub fn assert_eq_tokens(input: &str, expected_tokens: &str) {
    let mut tokenizer = Tokenizer::from(input);
    let line = render_tokens(&mut tokenizer);
    assert_eq!(line, expected_tokens, "Error in {input}");
}

/// Renders every remaining token, the end-of-stream marker included, one
/// per line.
pub fn render_tokens(tokenizer: &mut Tokenizer) -> String {
    let mut line = String::new();
    loop {
        let token = tokenizer.next_token();
        line.push('\n');
        let _ = match token.kind {
            TokenKind::ListMember => write!(line, "+MEM {}", token.text_str()),
            TokenKind::Key => write!(line, "=KEY {}", token.text_str()),
            TokenKind::Value => write!(line, "=VAL {}", token.text_str()),
            TokenKind::Comment => write!(line, "#COM {}", token.text_str()),
            TokenKind::Null => write!(line, "=NUL"),
            TokenKind::Unknown => write!(line, "?UNK"),
            TokenKind::EndOfStream => write!(line, "-END"),
        };
        if token.is(TokenKind::EndOfStream) {
            break;
        }
    }
    line
}
