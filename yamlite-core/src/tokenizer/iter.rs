use yamlite_common::{Token, TokenKind};

use super::Tokenizer;

/// Iterator over tokens.
///
/// It returns borrowed tokens and ends right before the `EndOfStream`
/// marker, so `for` loops see content tokens only.
pub struct TokenIter<'input> {
    tokenizer: Tokenizer<'input>,
    done: bool,
}

impl<'input> TokenIter<'input> {
    /// Gives the tokenizer back, diagnostics included.
    #[must_use]
    pub fn into_inner(self) -> Tokenizer<'input> {
        self.tokenizer
    }
}

impl<'input> Iterator for TokenIter<'input> {
    type Item = Token<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.tokenizer.next_token();
        if token.is(TokenKind::EndOfStream) {
            self.done = true;
            return None;
        }
        Some(token)
    }
}

impl<'input> IntoIterator for Tokenizer<'input> {
    type Item = Token<'input>;
    type IntoIter = TokenIter<'input>;

    fn into_iter(self) -> TokenIter<'input> {
        TokenIter {
            tokenizer: self,
            done: false,
        }
    }
}

#[test]
fn test_iter_stops_before_end_of_stream() {
    use alloc::vec::Vec;

    let tokens: Vec<Token> = Tokenizer::from("a: 1\n").into_iter().collect();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is(TokenKind::Key));
    assert!(tokens[1].is(TokenKind::Value));
}
