use std::io::{self, Write};

use cdecl_lexer::{Cursor, LexStatus, MAX_TOKEN_LEN};

use super::parse;
use crate::{
    parse_declaration, parse_declaration_with, ErrorInfo, ParseOptions, ParserStatus,
    PARSER_ERROR_TEXT_LEN, STACK_SIZE,
};

#[test]
fn eof_before_identifier() {
    let parsed = parse("int **;");

    assert_eq!(parsed.status, ParserStatus::Eof);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::Eof);
    assert_eq!(parsed.errinfo.parser.text, "");
    assert_eq!(parsed.output, "");
}

#[test]
fn eof_after_identifier() {
    let parsed = parse("char *name");

    assert_eq!(parsed.status, ParserStatus::Eof);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::Eof);
    // the identifier is written as soon as it is read
    assert_eq!(parsed.output, "name:");
}

#[test]
fn empty_input() {
    assert_eq!(parse("").status, ParserStatus::Eof);
    assert_eq!(parse("  // nothing\n").status, ParserStatus::Eof);
}

#[test]
fn lexer_bad_token() {
    let parsed = parse("int @x;");

    assert_eq!(parsed.status, ParserStatus::LexerError);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::BadToken);
    assert_eq!(parsed.errinfo.lexer.text, "unknown character token '@'");
    assert_eq!(parsed.errinfo.parser.text, "");
}

#[test]
fn lexer_error_after_identifier() {
    let parsed = parse("int x $");

    assert_eq!(parsed.status, ParserStatus::LexerError);
    assert_eq!(parsed.errinfo.lexer.text, "unknown character token '$'");
    assert_eq!(parsed.output, "x:");
}

#[test]
fn struct_without_name() {
    let parsed = parse("struct *p;");

    assert_eq!(parsed.status, ParserStatus::LexerError);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::NotIdentifier);
    assert_eq!(parsed.errinfo.lexer.text, "");
}

#[test]
fn struct_name_starting_with_slash() {
    let parsed = parse("struct /p x;");

    assert_eq!(parsed.status, ParserStatus::LexerError);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::NotIdentifier);
}

#[test]
fn token_stack_overflow() {
    let parsed = parse(&format!("int {}p;", "*".repeat(STACK_SIZE)));
    assert_eq!(parsed.status, ParserStatus::TokenOverflow);
    assert_eq!(parsed.errinfo.lexer.status, LexStatus::Ok);

    // type plus one fewer star fills the stack exactly
    let parsed = parse(&format!("int {}p;", "*".repeat(STACK_SIZE - 1)));
    assert_eq!(parsed.status, ParserStatus::Ok);
}

#[test]
fn stack_capacity_option() {
    let mut out = Vec::new();
    let options = ParseOptions { stack_capacity: 2 };

    let status = parse_declaration_with(
        &mut Cursor::from("const char *s;"),
        &mut out,
        None,
        options,
    );
    assert_eq!(status, ParserStatus::TokenOverflow);

    let status = parse_declaration_with(
        &mut Cursor::from("char *s;"),
        &mut out,
        None,
        options,
    );
    assert_eq!(status, ParserStatus::Ok);
}

#[test]
fn parse_error_text_truncated() {
    let name = |c: &str| c.repeat(MAX_TOKEN_LEN);
    let src = format!("struct {} struct {} {};", name("a"), name("b"), name("x"));
    let parsed = parse(&src);

    assert_eq!(parsed.status, ParserStatus::ErrorTextTooLong);
    assert_eq!(parsed.errinfo.parser.text.len(), PARSER_ERROR_TEXT_LEN);
    assert!(parsed
        .errinfo
        .parser
        .text
        .starts_with("conflicting types `struct aaa"));
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_error() {
    let mut errinfo = ErrorInfo::default();
    let status = parse_declaration(
        &mut Cursor::from("int x;"),
        &mut ClosedPipe,
        Some(&mut errinfo),
    );

    assert_eq!(status, ParserStatus::OutputError);
    assert_eq!(errinfo.parser.status, ParserStatus::OutputError);
    assert_eq!(errinfo.lexer.status, LexStatus::Ok);
}

#[test]
fn errinfo_is_reset_on_success() {
    let mut errinfo = ErrorInfo::default();
    let mut out = Vec::new();

    parse_declaration(&mut Cursor::from("int @;"), &mut out, Some(&mut errinfo));
    assert_eq!(errinfo.parser.status, ParserStatus::LexerError);

    out.clear();
    parse_declaration(&mut Cursor::from("int i;"), &mut out, Some(&mut errinfo));
    assert_eq!(errinfo, ErrorInfo::default());
    assert_eq!(out, b"i: int\n");
}
