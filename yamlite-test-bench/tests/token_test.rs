use yamlite_test_bench::assert_eq_tokens;
use yamlite_test_bench::consts::*;

use yamlite_common::TokenKind;
use yamlite_core::Tokenizer;

#[test]
fn simple_map() {
    assert_eq_tokens(MAP_SIMPLE_INPUT, MAP_SIMPLE_TOKENS);
    assert_eq_tokens(SPACED_VALUE_INPUT, SPACED_VALUE_TOKENS);
}

#[test]
fn list_members() {
    assert_eq_tokens(LIST_INPUT, LIST_TOKENS);
}

#[test]
fn comments_are_tokens_not_trivia() {
    assert_eq_tokens(COMMENT_INPUT, COMMENT_TOKENS);
}

#[test]
fn null_values() {
    assert_eq_tokens(NULL_VALUE_INPUT, NULL_VALUE_TOKENS);
}

#[test]
fn unknown_degrades_and_scanning_continues() {
    assert_eq_tokens(UNKNOWN_INPUT, UNKNOWN_TOKENS);
}

#[test]
fn flat_sessions_doc() {
    assert_eq_tokens(SESSIONS_INPUT, SESSIONS_FLAT_TOKENS);
}

#[test]
fn require_returns_mismatch_and_records() {
    let mut tokenizer = Tokenizer::new("Data/Example0.yaml", b"# c\nkey: 1\n");

    let token = tokenizer.require(TokenKind::Key);
    assert!(token.is(TokenKind::Comment));
    let token = tokenizer.require(TokenKind::Key);
    assert!(token.is(TokenKind::Key));
    assert!(token.equals("key"));

    let diagnostics = tokenizer.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "Data/Example0.yaml (lineNo=1): unexpected token (expected Key, found Comment)"
    );
}

#[test]
fn key_value_is_a_two_call_protocol() {
    let mut tokenizer = Tokenizer::from("pduSize: 200\n");
    let key = tokenizer.next_token();
    assert!(key.is(TokenKind::Key));
    assert!(key.equals("pduSize"));
    let value = tokenizer.next_token();
    assert!(value.is(TokenKind::Value));
    assert_eq!(value.text_str(), "200");
    assert!(tokenizer.next_token().is(TokenKind::EndOfStream));
}

#[test]
fn end_of_stream_repeats() {
    let mut tokenizer = Tokenizer::from("a: 1\n");
    while !tokenizer.next_token().is(TokenKind::EndOfStream) {}
    assert!(tokenizer.next_token().is(TokenKind::EndOfStream));
    assert!(tokenizer.next_token().is(TokenKind::EndOfStream));
}
