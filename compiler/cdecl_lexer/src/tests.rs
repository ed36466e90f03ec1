mod identifiers;

use crate::{Cursor, LexError, Lexer, Token};

/// Collect every token of `src`, stopping at the first lexer error
fn tokens(src: &str) -> Result<Vec<Token>, LexError> {
    let mut cursor = Cursor::from(src);
    Lexer::new(&mut cursor).collect()
}
