use cdecl_lexer::{LexStatus, MAX_TOKEN_LEN};

/// Maximum length of the parser error text, in bytes
pub const PARSER_ERROR_TEXT_LEN: usize = 255;

/// Parser status codes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParserStatus {
    #[default]
    Ok,
    /// Input ended before the declaration was complete
    Eof,
    /// See the lexer part of the error info
    LexerError,
    TokenOverflow,
    OutputError,
    /// See the parser error text
    ParseError,
    /// A parse error was recorded without any error text
    NullErrorText,
    /// A parse error was recorded and its text truncated
    ErrorTextTooLong,
}

impl ParserStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Eof => "eof",
            Self::LexerError => "lexer_error",
            Self::TokenOverflow => "token_overflow",
            Self::OutputError => "output_error",
            Self::ParseError => "parse_error",
            Self::NullErrorText => "null_error_text",
            Self::ErrorTextTooLong => "error_text_too_long",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Eof => "parser read end of input before finishing declaration",
            Self::LexerError => "lexer error, check error info lexer text",
            Self::TokenOverflow => "too many tokens to fit on token stack",
            Self::OutputError => "error writing parser output to stream",
            Self::ParseError => "parser error, check error info parser text",
            Self::NullErrorText => "parser error recorded without error text",
            Self::ErrorTextTooLong => "parser error text too long, truncated",
        }
    }
}

impl std::fmt::Display for ParserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexerInfo {
    pub status: LexStatus,
    /// Malformed token details, only set for `LexStatus::BadToken`
    pub text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParserInfo {
    pub status: ParserStatus,
    /// Parse error details, only set for parse error statuses
    pub text: String,
}

/// Outcome of a parse, split into the lexer and parser layers
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub lexer: LexerInfo,
    pub parser: ParserInfo,
}

impl ErrorInfo {
    pub fn is_ok(&self) -> bool {
        self.parser.status == ParserStatus::Ok
    }

    /// Overwrite the record.
    ///
    /// `lexer_text` is kept only for `LexStatus::BadToken` and `parser_text`
    /// only for `ParserStatus::ParseError`. A parse error without text
    /// becomes `NullErrorText`, one with text longer than
    /// `PARSER_ERROR_TEXT_LEN` is truncated and becomes `ErrorTextTooLong`.
    pub fn record(
        &mut self,
        lexer_status: LexStatus,
        lexer_text: &str,
        parser_status: ParserStatus,
        parser_text: Option<&str>,
    ) {
        self.lexer.status = lexer_status;
        self.lexer.text.clear();

        if lexer_status == LexStatus::BadToken {
            self.lexer
                .text
                .push_str(truncate(lexer_text, MAX_TOKEN_LEN));
        }

        self.parser.status = parser_status;
        self.parser.text.clear();

        if parser_status != ParserStatus::ParseError {
            return;
        }

        match parser_text {
            None => self.parser.status = ParserStatus::NullErrorText,
            Some(text) if text.len() > PARSER_ERROR_TEXT_LEN => {
                self.parser.status = ParserStatus::ErrorTextTooLong;
                self.parser
                    .text
                    .push_str(truncate(text, PARSER_ERROR_TEXT_LEN));
            }
            Some(text) => self.parser.text.push_str(text),
        }
    }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }

    let end = (0..=max)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);

    &text[..end]
}
