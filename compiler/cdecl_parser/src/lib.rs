mod decl;
mod errinfo;
mod stack;
#[cfg(test)]
mod tests;

use std::io::{self, Read, Write};

use cdecl_lexer::{Cursor, LexError, LexStatus, Token};
use tracing::debug;

pub use errinfo::{ErrorInfo, LexerInfo, ParserInfo, ParserStatus, PARSER_ERROR_TEXT_LEN};
pub use stack::{StackOverflow, TokenStack, STACK_SIZE};

pub(crate) type PR<T> = Result<T, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of tokens read before the identifier
    pub stack_capacity: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            stack_capacity: STACK_SIZE,
        }
    }
}

/// Parse one declaration from `input` and write its description to `out`.
///
/// On success a single line like `x: pointer to const double` is written.
/// The parser is not atomic: a failing parse may already have written part
/// of the line. `errinfo`, when given, is overwritten on every call.
pub fn parse_declaration<R: Read, W: Write>(
    input: &mut Cursor<R>,
    out: &mut W,
    errinfo: Option<&mut ErrorInfo>,
) -> ParserStatus {
    parse_declaration_with(input, out, errinfo, ParseOptions::default())
}

pub fn parse_declaration_with<R: Read, W: Write>(
    input: &mut Cursor<R>,
    out: &mut W,
    errinfo: Option<&mut ErrorInfo>,
    options: ParseOptions,
) -> ParserStatus {
    let result = Parser::new(input, out, options).declaration();

    let mut local = ErrorInfo::default();
    let errinfo = errinfo.unwrap_or(&mut local);
    record(errinfo, &result);

    debug!("declaration parsed with status {}", errinfo.parser.status);
    errinfo.parser.status
}

fn record(errinfo: &mut ErrorInfo, result: &PR<()>) {
    match result {
        Ok(()) => errinfo.record(LexStatus::Ok, "", ParserStatus::Ok, None),
        Err(ParseError::Eof) => errinfo.record(LexStatus::Eof, "", ParserStatus::Eof, None),
        Err(ParseError::Lexer(e)) => {
            errinfo.record(e.status(), e.text(), ParserStatus::LexerError, None)
        }
        Err(ParseError::TokenOverflow) => {
            errinfo.record(LexStatus::Ok, "", ParserStatus::TokenOverflow, None)
        }
        Err(ParseError::Output(e)) => {
            debug!("output error: {e}");
            errinfo.record(LexStatus::Ok, "", ParserStatus::OutputError, None)
        }
        Err(ParseError::Syntax(tag)) => errinfo.record(
            LexStatus::Ok,
            "",
            ParserStatus::ParseError,
            Some(&tag.to_string()),
        ),
    }
}

pub(crate) struct Parser<'a, R, W> {
    src: &'a mut Cursor<R>,
    out: &'a mut W,
    stack: TokenStack,
    /// `(` met while popping pointers
    lparens: usize,
    /// `)` read right after the identifier
    rparens: usize,
}

impl<'a, R: Read, W: Write> Parser<'a, R, W> {
    pub fn new(src: &'a mut Cursor<R>, out: &'a mut W, options: ParseOptions) -> Self {
        Self {
            src,
            out,
            stack: TokenStack::with_capacity(options.stack_capacity),
            lparens: 0,
            rparens: 0,
        }
    }
}

#[derive(Debug)]
pub(crate) enum ParseError {
    Eof,
    Lexer(LexError),
    TokenOverflow,
    Output(io::Error),
    Syntax(ParseErrorTag),
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        match e {
            LexError::Eof => Self::Eof,
            e => Self::Lexer(e),
        }
    }
}

impl From<StackOverflow> for ParseError {
    fn from(_: StackOverflow) -> Self {
        Self::TokenOverflow
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

impl From<ParseErrorTag> for ParseError {
    fn from(tag: ParseErrorTag) -> Self {
        Self::Syntax(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseErrorTag {
    DuplicateQualifier {
        qualifier: Token,
        target: &'static str,
    },
    UnexpectedToken {
        token: Token,
        context: &'static str,
    },
    UnbalancedParens {
        left: usize,
        right: usize,
    },
    OutOfTokens,
    IncompleteDeclaration(String),
    ConflictingTypes {
        earlier: Token,
        later: Token,
        ident: String,
    },
    ConflictingSign,
    DuplicateSign(Token),
    InvalidSign {
        sign: Token,
        ty: Token,
    },
    MissingType(String),
}

impl std::fmt::Display for ParseErrorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateQualifier { qualifier, target } => {
                write!(f, "duplicate {qualifier} qualifier for {target}")
            }
            Self::UnexpectedToken { token, context } => {
                write!(f, "unexpected token `{token}` when parsing {context}")
            }
            Self::UnbalancedParens { left, right } => write!(
                f,
                "unbalanced parentheses when parsing pointers: \
                 {left} '(' but {right} ')'"
            ),
            Self::OutOfTokens => write!(
                f,
                "unexpectedly ran out of tokens when parsing pointers, \
                 missing type"
            ),
            Self::IncompleteDeclaration(ident) => {
                write!(f, "incomplete declaration for identifier `{ident}`")
            }
            Self::ConflictingTypes {
                earlier,
                later,
                ident,
            } => write!(
                f,
                "conflicting types `{earlier}` and `{later}` \
                 for identifier `{ident}`"
            ),
            Self::ConflictingSign => write!(f, "conflicting signed and unsigned qualifiers"),
            Self::DuplicateSign(sign) => write!(f, "duplicate {sign} qualifier"),
            Self::InvalidSign { sign, ty } => {
                write!(f, "{sign} qualifier not valid for type `{ty}`")
            }
            Self::MissingType(ident) => write!(f, "identifier `{ident}` missing required type"),
        }
    }
}
