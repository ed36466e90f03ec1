/// Maximum length of identifier, struct/enum name and number literal text
pub const MAX_TOKEN_LEN: usize = 79;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,
    Slash,
    Asterisk,
    Semicolon,
    /// `struct <name>`
    Struct(String),
    /// `enum <name>`
    Enum(String),
    Const,
    Volatile,
    Signed,
    Unsigned,
    Void,
    Char,
    Int,
    Long,
    Float,
    Double,
    NumberLiteral(String),
    Identifier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,
    Slash,
    Asterisk,
    Semicolon,
    Struct,
    Enum,
    Const,
    Volatile,
    Signed,
    Unsigned,
    Void,
    Char,
    Int,
    Long,
    Float,
    Double,
    NumberLiteral,
    Identifier,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::LeftBracket => TokenKind::LeftBracket,
            Self::RightBracket => TokenKind::RightBracket,
            Self::Comma => TokenKind::Comma,
            Self::Slash => TokenKind::Slash,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Struct(_) => TokenKind::Struct,
            Self::Enum(_) => TokenKind::Enum,
            Self::Const => TokenKind::Const,
            Self::Volatile => TokenKind::Volatile,
            Self::Signed => TokenKind::Signed,
            Self::Unsigned => TokenKind::Unsigned,
            Self::Void => TokenKind::Void,
            Self::Char => TokenKind::Char,
            Self::Int => TokenKind::Int,
            Self::Long => TokenKind::Long,
            Self::Float => TokenKind::Float,
            Self::Double => TokenKind::Double,
            Self::NumberLiteral(_) => TokenKind::NumberLiteral,
            Self::Identifier(_) => TokenKind::Identifier,
        }
    }

    /// Token text, empty for punctuation and keywords
    pub fn text(&self) -> &str {
        match self {
            Self::Struct(text)
            | Self::Enum(text)
            | Self::NumberLiteral(text)
            | Self::Identifier(text) => text,
            _ => "",
        }
    }

    /// `const` or `volatile`
    pub fn is_cv_qualifier(&self) -> bool {
        matches!(self, Self::Const | Self::Volatile)
    }

    /// `signed` or `unsigned`
    pub fn is_sign_qualifier(&self) -> bool {
        matches!(self, Self::Signed | Self::Unsigned)
    }

    /// Tokens naming the type a declarator is built on
    pub fn is_type_specifier(&self) -> bool {
        matches!(
            self,
            Self::Struct(_)
                | Self::Enum(_)
                | Self::Void
                | Self::Char
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Types that accept a `signed`/`unsigned` qualifier
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Char | Self::Int | Self::Long)
    }
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "lparen",
            Self::RightParen => "rparen",
            Self::LeftBracket => "lbracket",
            Self::RightBracket => "rbracket",
            Self::Comma => "comma",
            Self::Slash => "slash",
            Self::Asterisk => "star",
            Self::Semicolon => "semicolon",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Const => "const",
            Self::Volatile => "volatile",
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
            Self::Void => "void",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::NumberLiteral => "number",
            Self::Identifier => "identifier",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Slash => write!(f, "/"),
            Self::Asterisk => write!(f, "*"),
            Self::Semicolon => write!(f, ";"),
            Self::Struct(name) => write!(f, "struct {name}"),
            Self::Enum(name) => write!(f, "enum {name}"),
            Self::Const => write!(f, "const"),
            Self::Volatile => write!(f, "volatile"),
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
            Self::Void => write!(f, "void"),
            Self::Char => write!(f, "char"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::NumberLiteral(literal) => write!(f, "{literal}"),
            Self::Identifier(name) => write!(f, "{name}"),
        }
    }
}
