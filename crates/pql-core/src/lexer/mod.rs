//! PQL Lexer/Tokenizer
//!
//! This module turns a query string into an ordered stream of classified
//! tokens. Patterns are tried in a fixed priority order at each position
//! (relation fields before field names, `not like` before `like`), and the
//! captured lexeme is then classified on its own (see [`classify()`]).

mod classify;
mod patterns;
mod span;
mod stream;
mod token;
mod tokenizer;

pub use classify::{classify, classify_with};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, tokenize};
