use yamlite_test_bench::consts::*;
use yamlite_test_bench::render_tokens;

use yamlite_common::TokenKind;
use yamlite_core::Tokenizer;

#[test]
fn nested_block_round_trip() {
    let mut tokenizer = Tokenizer::from(NESTED_INPUT);
    let member = tokenizer.next_token();
    assert!(member.is(TokenKind::ListMember));
    assert!(member.equals("siSession"));

    let mut block = tokenizer.nested_block();
    assert_eq!(render_tokens(&mut block), NESTED_BLOCK_TOKENS);
    assert_eq!(render_tokens(&mut tokenizer), NESTED_TAIL_TOKENS);
}

#[test]
fn two_space_indent_block() {
    let mut tokenizer = Tokenizer::from("- siSession:\n  period: 10\n  pduSize: 200\n");
    let member = tokenizer.next_token();
    assert!(member.equals("siSession"));

    let mut block = tokenizer.nested_block();
    assert_eq!(render_tokens(&mut block), NESTED_BLOCK_TOKENS);
    assert!(tokenizer.next_token().is(TokenKind::EndOfStream));
}

#[test]
fn empty_nested_block() {
    let mut tokenizer = Tokenizer::from(EMPTY_BLOCK_INPUT);
    let member = tokenizer.next_token();
    assert!(member.is(TokenKind::ListMember));

    let mut block = tokenizer.nested_block();
    assert!(block.next_token().is(TokenKind::EndOfStream));
    assert_eq!(render_tokens(&mut tokenizer), NESTED_TAIL_TOKENS);
}

#[test]
fn blank_line_stays_in_block() {
    let mut tokenizer = Tokenizer::from(GAPPED_BLOCK_INPUT);
    tokenizer.next_token();

    let mut block = tokenizer.nested_block();
    assert_eq!(render_tokens(&mut block), NESTED_BLOCK_TOKENS);
    assert_eq!(render_tokens(&mut tokenizer), NESTED_TAIL_TOKENS);
}

#[test]
fn sibling_blocks_stay_separate() {
    let mut tokenizer = Tokenizer::from(SIBLING_INPUT);

    let member = tokenizer.next_token();
    assert!(member.equals("a"));
    let mut block = tokenizer.nested_block();
    assert_eq!(render_tokens(&mut block), SIBLING_A_TOKENS);

    let member = tokenizer.next_token();
    assert!(member.equals("b"));
    let mut block = tokenizer.nested_block();
    assert_eq!(render_tokens(&mut block), SIBLING_B_TOKENS);

    assert!(tokenizer.next_token().is(TokenKind::EndOfStream));
}

#[test]
fn block_lines_continue_from_parent() {
    let mut tokenizer = Tokenizer::from(NESTED_INPUT);
    tokenizer.next_token();
    assert_eq!(tokenizer.line(), 2);

    let mut block = tokenizer.nested_block();
    let key = block.next_token();
    assert!(key.equals("period"));
    assert_eq!(block.line(), 3);
}
