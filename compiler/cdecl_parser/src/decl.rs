use std::io::{Read, Write};

use cdecl_lexer::{next_token, Token};
use tracing::{debug, instrument, trace};

use crate::{ParseErrorTag, Parser, PR};

impl<R: Read, W: Write> Parser<'_, R, W> {
    /// Declarations are read up to the identifier, everything before it is
    /// kept on the stack. Once the `;` after the identifier is seen, the
    /// stack is unwound right to left: first the pointer chain, then the
    /// qualified base type.
    #[instrument(skip_all)]
    pub(crate) fn declaration(&mut self) -> PR<()> {
        let ident = self.scan_to_ident()?;
        debug!("declared identifier `{ident}`");
        write!(self.out, "{ident}:")?;

        let mut token = next_token(self.src)?;

        if token == Token::RightParen {
            token = self.closing_parens()?;
        }

        // TODO: array suffixes and parameter lists are read here
        if token != Token::Semicolon {
            return Err(ParseErrorTag::IncompleteDeclaration(ident).into());
        }

        let cv = self.pointers()?;
        self.base_type(&ident, cv)
    }

    /// Push tokens onto the stack until the identifier is read
    #[instrument(skip_all)]
    fn scan_to_ident(&mut self) -> PR<String> {
        loop {
            match next_token(self.src)? {
                Token::Identifier(name) => return Ok(name),
                token => self.stack.push(token)?,
            }
        }
    }

    /// Count the `)` following the identifier, the first of which has
    /// already been read. Returns the first token that isn't a `)`.
    fn closing_parens(&mut self) -> PR<Token> {
        self.rparens = 1;

        loop {
            match next_token(self.src)? {
                Token::RightParen => self.rparens += 1,
                token => return Ok(token),
            }
        }
    }

    /// Pop the pointer chain off the stack and describe it.
    ///
    /// Stops at the first token that is neither a pointer, a `(` nor a
    /// cv-qualifier, leaving it on the stack. Qualifiers read right before a
    /// base type token belong to that type and are returned. Qualifiers
    /// never carry across a `(`.
    #[instrument(skip_all)]
    fn pointers(&mut self) -> PR<CvQualifiers> {
        let mut cv = CvQualifiers::default();

        while let Some(token) = self.stack.peek() {
            trace!("pointer chain token {:?}", token);

            match token {
                token if token.is_cv_qualifier() => cv.add(token, "pointer")?,
                Token::LeftParen if !cv.is_empty() => {
                    return Err(ParseErrorTag::UnexpectedToken {
                        token: Token::LeftParen,
                        context: "pointers",
                    }
                    .into());
                }
                Token::LeftParen => self.lparens += 1,
                Token::Asterisk => {
                    write!(self.out, "{cv} pointer to")?;
                    cv = CvQualifiers::default();
                }
                token => {
                    if !cv.is_empty()
                        && !(token.is_type_specifier()
                            || token.is_sign_qualifier())
                    {
                        return Err(ParseErrorTag::UnexpectedToken {
                            token: token.clone(),
                            context: "pointers",
                        }
                        .into());
                    }

                    if self.lparens != self.rparens {
                        return Err(ParseErrorTag::UnbalancedParens {
                            left: self.lparens,
                            right: self.rparens,
                        }
                        .into());
                    }

                    return Ok(cv);
                }
            }

            self.stack.pop();
        }

        Err(ParseErrorTag::OutOfTokens.into())
    }

    /// Pop the rest of the stack, which must name exactly one type with
    /// optional cv and sign qualifiers, and describe it
    #[instrument(skip_all)]
    fn base_type(&mut self, ident: &str, mut cv: CvQualifiers) -> PR<()> {
        let mut sign: Option<Token> = None;
        let mut ty: Option<Token> = None;

        while let Some(token) = self.stack.pop() {
            trace!("base type token {:?}", token);

            match token {
                token if token.is_cv_qualifier() => cv.add(&token, "type")?,
                Token::Signed | Token::Unsigned => match sign {
                    Some(ref prev) if *prev == token => {
                        return Err(ParseErrorTag::DuplicateSign(token).into())
                    }
                    Some(_) => return Err(ParseErrorTag::ConflictingSign.into()),
                    None => sign = Some(token),
                },
                token if token.is_type_specifier() => {
                    if let Some(later) = ty {
                        return Err(ParseErrorTag::ConflictingTypes {
                            earlier: token,
                            later,
                            ident: ident.to_owned(),
                        }
                        .into());
                    }

                    ty = Some(token);
                }
                token => {
                    return Err(ParseErrorTag::UnexpectedToken {
                        token,
                        context: "identifier type",
                    }
                    .into())
                }
            }
        }

        let ty = ty.ok_or_else(|| ParseErrorTag::MissingType(ident.to_owned()))?;

        write!(self.out, "{cv}")?;

        if let Some(sign) = sign {
            if !ty.is_integral() {
                return Err(ParseErrorTag::InvalidSign { sign, ty }.into());
            }

            write!(self.out, " {sign}")?;
        }

        writeln!(self.out, " {ty}")?;
        Ok(())
    }
}

/// Pending `const`/`volatile` qualifiers
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct CvQualifiers {
    is_const: bool,
    is_volatile: bool,
}

impl CvQualifiers {
    fn add(&mut self, qualifier: &Token, target: &'static str) -> PR<()> {
        let flag = match qualifier {
            Token::Const => &mut self.is_const,
            _ => &mut self.is_volatile,
        };

        if *flag {
            return Err(ParseErrorTag::DuplicateQualifier {
                qualifier: qualifier.clone(),
                target,
            }
            .into());
        }

        *flag = true;
        Ok(())
    }

    fn is_empty(&self) -> bool {
        !(self.is_const || self.is_volatile)
    }
}

impl std::fmt::Display for CvQualifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_const {
            write!(f, " const")?;
        }

        if self.is_volatile {
            write!(f, " volatile")?;
        }

        Ok(())
    }
}
