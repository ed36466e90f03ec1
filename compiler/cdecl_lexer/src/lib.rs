mod cursor;
mod errors;
mod token;
#[cfg(test)]
mod tests;

use std::io::Read;

pub use cursor::Cursor;
pub use errors::{LexError, LexStatus};
pub use token::{Token, TokenKind, MAX_TOKEN_LEN};

use errors::LexError::*;
use tracing::{debug, trace};

/// Text of the error token returned for overlong identifiers and numbers
pub const LONG_TOKEN_ERROR: &str = "token too large: ...";
pub const UNTERMINATED_COMMENT_ERROR: &str = "unterminated comment";

/// Read the next token from the stream.
///
/// Whitespace and comments before the token are skipped. `LexError::Eof` is
/// returned once the stream holds nothing but whitespace and comments.
pub fn next_token<R: Read>(src: &mut Cursor<R>) -> Result<Token, LexError> {
    let token = Lexer::new(src).lex_token();
    debug!("{:?}", token);
    token
}

/// Iterator over the tokens of a stream, ends at end of input
pub struct Lexer<'a, R> {
    src: &'a mut Cursor<R>,
}

impl<'a, R: Read> Lexer<'a, R> {
    pub fn new(src: &'a mut Cursor<R>) -> Self {
        Self { src }
    }
}

impl<R: Read> Iterator for Lexer<'_, R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match next_token(self.src) {
            Err(Eof) => None,
            token => Some(token),
        }
    }
}

impl<R: Read> Lexer<'_, R> {
    fn lex_token(&mut self) -> Result<Token, LexError> {
        let c = self.skip_ignored()?.ok_or(Eof)?;

        match c {
            c if Self::is_ident_start(c) => {
                self.unread(c)?;
                self.parse_keyword_or_ident()
            }
            c if c.is_ascii_digit() => {
                self.unread(c)?;
                Ok(Token::NumberLiteral(self.number_text()?))
            }
            c => self.parse_single_char(c),
        }
    }

    /// Skip whitespace and comments. Returns the first byte of the next token
    /// or `None` at end of input.
    fn skip_ignored(&mut self) -> Result<Option<u8>, LexError> {
        loop {
            let Some(c) = self.read()? else {
                return Ok(None);
            };

            match c {
                c if Self::is_space(c) => {}
                b'/' => match self.read()? {
                    Some(b'*') => self.block_comment()?,
                    Some(b'/') => self.line_comment()?,
                    Some(next) => {
                        self.unread(next)?;
                        return Ok(Some(b'/'));
                    }
                    None => return Ok(Some(b'/')),
                },
                c => return Ok(Some(c)),
            }
        }
    }

    fn block_comment(&mut self) -> Result<(), LexError> {
        trace!("skipping block comment");
        let mut star = false;

        loop {
            match self.read()? {
                Some(b'/') if star => return Ok(()),
                Some(c) => star = c == b'*',
                None => return Err(BadToken(UNTERMINATED_COMMENT_ERROR.into())),
            }
        }
    }

    fn line_comment(&mut self) -> Result<(), LexError> {
        trace!("skipping line comment");

        while !matches!(self.read()?, Some(b'\n') | None) {}
        Ok(())
    }

    fn parse_single_char(&mut self, c: u8) -> Result<Token, LexError> {
        Ok(match c {
            b'(' => Token::LeftParen,
            b')' => Token::RightParen,
            b'[' => Token::LeftBracket,
            b']' => Token::RightBracket,
            b',' => Token::Comma,
            b'/' => Token::Slash,
            b'*' => Token::Asterisk,
            b';' => Token::Semicolon,
            c => {
                return Err(BadToken(format!(
                    "unknown character token '{}'",
                    char::from(c).escape_default()
                )))
            }
        })
    }

    fn parse_keyword_or_ident(&mut self) -> Result<Token, LexError> {
        let ident = self.ident_text()?;

        Ok(match ident.as_str() {
            "const" => Token::Const,
            "volatile" => Token::Volatile,
            "signed" => Token::Signed,
            "unsigned" => Token::Unsigned,
            "void" => Token::Void,
            "char" => Token::Char,
            "int" => Token::Int,
            "long" => Token::Long,
            "float" => Token::Float,
            "double" => Token::Double,
            "struct" => Token::Struct(self.ident_text()?),
            "enum" => Token::Enum(self.ident_text()?),
            _ => Token::Identifier(ident),
        })
    }

    /// Read the text of the next `[a-zA-Z_][a-zA-Z0-9_]*` word
    fn ident_text(&mut self) -> Result<String, LexError> {
        let c = self.skip_ignored()?.ok_or(Eof)?;

        if !Self::is_ident_start(c) {
            self.reject(c)?;
            return Err(NotIdentifier);
        }

        let mut text = String::with_capacity(MAX_TOKEN_LEN);
        text.push(char::from(c));
        self.take_while(&mut text, Self::is_ident_char)?;
        Ok(text)
    }

    /// Read the text of the next number literal. A leading `0x`/`0X` is kept
    /// as part of the text and followed by hex digits.
    fn number_text(&mut self) -> Result<String, LexError> {
        let c = self.skip_ignored()?.ok_or(Eof)?;

        if !c.is_ascii_digit() {
            self.reject(c)?;
            return Err(NotNumber);
        }

        let mut text = String::with_capacity(MAX_TOKEN_LEN);
        text.push(char::from(c));

        if c == b'0' {
            match self.read()? {
                Some(x @ (b'x' | b'X')) => {
                    text.push(char::from(x));
                    self.take_while(&mut text, |c| c.is_ascii_hexdigit())?;
                    return Ok(text);
                }
                Some(next) => self.unread(next)?,
                None => return Ok(text),
            }
        }

        self.take_while(&mut text, |c| c.is_ascii_digit())?;
        Ok(text)
    }

    /// Append bytes accepted by `predicate` to `text`. The first rejected byte
    /// is pushed back. Running past `MAX_TOKEN_LEN` is a malformed token.
    fn take_while(&mut self, text: &mut String, predicate: fn(u8) -> bool) -> Result<(), LexError> {
        loop {
            match self.read()? {
                Some(c) if predicate(c) => {
                    if text.len() >= MAX_TOKEN_LEN {
                        self.unread(c)?;
                        return Err(BadToken(LONG_TOKEN_ERROR.into()));
                    }

                    text.push(char::from(c));
                }
                Some(c) => return self.unread(c),
                None => return Ok(()),
            }
        }
    }

    fn read(&mut self) -> Result<Option<u8>, LexError> {
        self.src.next().map_err(|e| ReadFailed(e.kind()))
    }

    fn unread(&mut self, c: u8) -> Result<(), LexError> {
        if self.src.unread(c) {
            Ok(())
        } else {
            Err(UnreadFailed)
        }
    }

    /// Push back the byte that ended a word read. A `/` from `skip_ignored`
    /// is dropped instead, its lookahead byte already holds the slot.
    fn reject(&mut self, c: u8) -> Result<(), LexError> {
        match c {
            b'/' => Ok(()),
            c => self.unread(c),
        }
    }

    /// Same set as C `isspace` in the default locale
    fn is_space(c: u8) -> bool {
        matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
    }

    fn is_ident_start(c: u8) -> bool {
        c.is_ascii_alphabetic() | matches!(c, b'_')
    }

    fn is_ident_char(c: u8) -> bool {
        c.is_ascii_alphanumeric() | matches!(c, b'_')
    }
}
