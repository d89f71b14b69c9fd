//! Lookahead buffer between a [`GraphQLTokenSource`] and the parser.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use std::collections::VecDeque;

/// Wraps any [`GraphQLTokenSource`] with on-demand lookahead.
///
/// Tokens are pulled from the source only when `peek_nth()` or `consume()`
/// needs them, so the buffer stays as small as the deepest lookahead the
/// parser performs (two tokens for this grammar).
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,

    /// Unconsumed tokens, front first.
    buffer: VecDeque<GraphQLToken<'src>>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Removes and returns the next token, or `None` once the source is
    /// exhausted.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.fill_buffer(1);
        self.buffer.pop_front()
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// Looks `n` tokens past the next one without consuming anything.
    /// `peek_nth(0)` is `peek()`.
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.fill_buffer(n + 1);
        self.buffer.get(n)
    }

    /// `true` when the next token is `Eof` or the source has run dry.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| matches!(token.kind, GraphQLTokenKind::Eof))
    }

    /// Number of tokens pulled from the source but not yet consumed.
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn fill_buffer(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }
}
