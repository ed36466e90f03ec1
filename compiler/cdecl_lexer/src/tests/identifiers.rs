use crate::{next_token, Cursor, LexError, LexStatus, Token::*, LONG_TOKEN_ERROR, MAX_TOKEN_LEN};

use super::tokens;

#[test]
fn identifiers() {
    for src in ["iden_1", "another_iden", "_underscore_1_iden"] {
        let mut cursor = Cursor::from(src);

        assert_eq!(next_token(&mut cursor), Ok(Identifier(src.into())));
        assert_eq!(next_token(&mut cursor), Err(LexError::Eof));
    }
}

#[test]
fn structs_and_enums() {
    assert_eq!(
        tokens("struct my_struct_1 struct       _my_struct_2"),
        Ok(vec![Struct("my_struct_1".into()), Struct("_my_struct_2".into())])
    );
    assert_eq!(
        tokens("enum    my_enum_1 enum\n_my_enum_2"),
        Ok(vec![Enum("my_enum_1".into()), Enum("_my_enum_2".into())])
    );
}

#[test]
fn struct_name_after_comment() {
    assert_eq!(
        tokens("struct /* tag */ node"),
        Ok(vec![Struct("node".into())])
    );
}

#[test]
fn struct_without_name() {
    let mut cursor = Cursor::from("struct *p;");

    let err = next_token(&mut cursor).unwrap_err();
    assert_eq!(err, LexError::NotIdentifier);
    assert_eq!(err.status(), LexStatus::NotIdentifier);

    // the character that ended the read is still in the stream
    assert_eq!(next_token(&mut cursor), Ok(Asterisk));
}

#[test]
fn struct_name_starting_with_slash() {
    let mut cursor = Cursor::from("struct /p x;");

    let err = next_token(&mut cursor).unwrap_err();
    assert_eq!(err, LexError::NotIdentifier);
    assert_eq!(err.status(), LexStatus::NotIdentifier);

    // the slash is consumed, the byte after it is not
    assert_eq!(next_token(&mut cursor), Ok(Identifier("p".into())));

    let mut cursor = Cursor::from("enum /");
    assert_eq!(next_token(&mut cursor), Err(LexError::NotIdentifier));
    assert_eq!(next_token(&mut cursor), Err(LexError::Eof));
}

#[test]
fn struct_at_end_of_input() {
    let mut cursor = Cursor::from("enum   ");
    assert_eq!(next_token(&mut cursor), Err(LexError::Eof));
}

#[test]
fn longest_identifier() {
    let ident = "a".repeat(MAX_TOKEN_LEN);
    let src = format!("{ident};");

    assert_eq!(tokens(&src), Ok(vec![Identifier(ident), Semicolon]));
}

#[test]
fn identifier_too_long() {
    let src = "b".repeat(MAX_TOKEN_LEN + 1);
    let mut cursor = Cursor::from(src.as_str());

    let err = next_token(&mut cursor).unwrap_err();
    assert_eq!(err.status(), LexStatus::BadToken);
    assert_eq!(err.text(), LONG_TOKEN_ERROR);
}

#[test]
fn struct_name_too_long() {
    let src = format!("struct {}", "s".repeat(MAX_TOKEN_LEN + 5));

    assert_eq!(
        tokens(&src),
        Err(LexError::BadToken(LONG_TOKEN_ERROR.into()))
    );
}
