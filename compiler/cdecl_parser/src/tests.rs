mod errors;

use cdecl_lexer::Cursor;

use crate::{parse_declaration, ErrorInfo, ParserStatus};

struct Parsed {
    status: ParserStatus,
    errinfo: ErrorInfo,
    output: String,
}

fn parse(src: &str) -> Parsed {
    let mut cursor = Cursor::from(src);
    let mut out = Vec::new();
    let mut errinfo = ErrorInfo::default();
    let status = parse_declaration(&mut cursor, &mut out, Some(&mut errinfo));

    assert_eq!(status, errinfo.parser.status, "input: {src:?}");

    Parsed {
        status,
        errinfo,
        output: String::from_utf8(out).unwrap(),
    }
}

/// Description of a declaration that must parse
fn describe(src: &str) -> String {
    let parsed = parse(src);
    assert_eq!(
        parsed.status,
        ParserStatus::Ok,
        "input: {src:?}, error info: {:?}",
        parsed.errinfo
    );
    parsed.output
}

/// Error text of a declaration that must fail with a parse error
fn parse_error(src: &str) -> String {
    let parsed = parse(src);
    assert_eq!(parsed.status, ParserStatus::ParseError, "input: {src:?}");
    parsed.errinfo.parser.text
}
