use std::io::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Nothing left to read. Not a failure for callers reading token lists
    Eof,
    UnreadFailed,
    NotNumber,
    NotIdentifier,
    /// Malformed token, carries the diagnostic text
    BadToken(String),
    ReadFailed(ErrorKind),
}

impl LexError {
    pub fn status(&self) -> LexStatus {
        match self {
            Self::Eof => LexStatus::Eof,
            Self::UnreadFailed => LexStatus::UnreadFailed,
            Self::NotNumber => LexStatus::NotNumber,
            Self::NotIdentifier => LexStatus::NotIdentifier,
            Self::BadToken(_) => LexStatus::BadToken,
            Self::ReadFailed(_) => LexStatus::ReadFailed,
        }
    }

    /// Diagnostic text of a malformed token, empty otherwise
    pub fn text(&self) -> &str {
        match self {
            Self::BadToken(text) => text,
            _ => "",
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken(text) => write!(f, "{text}"),
            Self::ReadFailed(kind) => write!(f, "failed to read input: {kind}"),
            _ => write!(f, "{}", self.status().message()),
        }
    }
}

/// Lexer status codes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexStatus {
    #[default]
    Ok,
    UnreadFailed,
    Eof,
    NotNumber,
    NotIdentifier,
    BadToken,
    ReadFailed,
}

impl LexStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::UnreadFailed => "unread_failed",
            Self::Eof => "eof",
            Self::NotNumber => "not_number",
            Self::NotIdentifier => "not_identifier",
            Self::BadToken => "bad_token",
            Self::ReadFailed => "read_failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::UnreadFailed => "failed to put last read char back to stream",
            Self::Eof => "read end of input from stream",
            Self::NotNumber => "next token to read is not a number",
            Self::NotIdentifier => "next token to read is not an identifier",
            Self::BadToken => "unable to retrieve valid token, see token text for details",
            Self::ReadFailed => "failed to read from input stream",
        }
    }
}

impl std::fmt::Display for LexStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
