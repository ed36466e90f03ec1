use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cdecl_errors::{ErrorBuilder, ErrorEmitter};
use cdecl_lexer::{next_token, Cursor, LexError, Lexer, Token};
use cdecl_parser::{parse_declaration_with, ErrorInfo, ParseOptions, ParserStatus, STACK_SIZE};

/// Describe C variable declarations in plain English
#[derive(Parser, Debug)]
#[command(name = "cdecl", version)]
pub struct Args {
    /// File with one declaration per line, stdin if absent or `-`
    pub file: Option<PathBuf>,

    /// Print the tokens of each line instead of describing it
    #[arg(long)]
    pub tokens: bool,

    /// Maximum number of tokens before the declared identifier
    #[arg(long, default_value_t = STACK_SIZE)]
    pub stack_size: usize,

    /// Continue with the next line after a line fails
    #[arg(long)]
    pub keep_going: bool,
}

pub fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", ErrorBuilder::new().info(e.to_string()).build());
            ExitCode::FAILURE
        }
    }
}

/// Process the input named by `args`, returns whether every line succeeded
pub fn run(args: &Args) -> io::Result<bool> {
    let (source, filename) = read_input(args)?;

    let mut builder = ErrorBuilder::new();
    if let Some(filename) = filename {
        builder = builder.filename(filename);
    }

    let emitter = ErrorEmitter::new(builder);
    let stdout = io::stdout();

    process(&source, args, &emitter, &mut stdout.lock())
}

fn read_input(args: &Args) -> io::Result<(String, Option<String>)> {
    match &args.file {
        Some(path) if path.as_os_str() != "-" => Ok((
            fs::read_to_string(path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("unable to read file `{}`: {e}", path.display()),
                )
            })?,
            Some(path.display().to_string()),
        )),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, None))
        }
    }
}

/// Handle each line of `source`. Lines without tokens are skipped.
/// Failures are reported through `emitter`; I/O errors on `out` abort.
pub fn process<W: Write>(
    source: &str,
    args: &Args,
    emitter: &ErrorEmitter,
    out: &mut W,
) -> io::Result<bool> {
    let options = ParseOptions {
        stack_capacity: args.stack_size,
    };
    let mut all_ok = true;

    for (index, line) in source.lines().enumerate() {
        if is_blank(line) {
            continue;
        }

        debug!("line {}: {:?}", index + 1, line);

        let result = if args.tokens {
            dump_tokens(line, out)
        } else {
            describe_line(line, options, out)
        };

        match result {
            Ok(()) => {}
            Err(Failure::Io(e)) => return Err(e),
            Err(failure) => {
                emitter.emit(&failure, index + 1, line, failure.note());
                all_ok = false;

                if !args.keep_going {
                    break;
                }
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}

fn is_blank(line: &str) -> bool {
    matches!(next_token(&mut Cursor::from(line)), Err(LexError::Eof))
}

fn describe_line<W: Write>(line: &str, options: ParseOptions, out: &mut W) -> Result<(), Failure> {
    let mut cursor = Cursor::from(line);
    let mut description = Vec::new();
    let mut errinfo = ErrorInfo::default();

    parse_declaration_with(&mut cursor, &mut description, Some(&mut errinfo), options);

    if !errinfo.is_ok() {
        return Err(Failure::Parse(errinfo));
    }

    match next_token(&mut cursor) {
        Err(LexError::Eof) => {}
        Ok(token) => return Err(Failure::Trailing(token)),
        Err(e) => return Err(Failure::Lex(e)),
    }

    out.write_all(&description)?;
    Ok(())
}

fn dump_tokens<W: Write>(line: &str, out: &mut W) -> Result<(), Failure> {
    let mut cursor = Cursor::from(line);

    for token in Lexer::new(&mut cursor) {
        let token = token.map_err(Failure::Lex)?;

        match token.text() {
            "" => writeln!(out, "{}", token.kind())?,
            text => writeln!(out, "{} {}", token.kind(), text)?,
        }
    }

    Ok(())
}

#[derive(Debug)]
enum Failure {
    Lex(LexError),
    Parse(ErrorInfo),
    /// Tokens left on the line after a complete declaration
    Trailing(Token),
    Io(io::Error),
}

impl Failure {
    fn note(&self) -> Option<String> {
        let note = match self {
            Self::Lex(e) => e.to_string(),
            Self::Parse(info) => match info.parser.status {
                ParserStatus::LexerError if info.lexer.text.is_empty() => {
                    info.lexer.status.message().to_owned()
                }
                ParserStatus::LexerError => info.lexer.text.clone(),
                _ => info.parser.text.clone(),
            },
            Self::Trailing(token) => format!("found `{token}`"),
            Self::Io(e) => e.to_string(),
        };

        Some(note).filter(|note| !note.is_empty())
    }
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(_) => write!(f, "invalid token"),
            Self::Parse(info) => match info.parser.status {
                ParserStatus::LexerError => write!(f, "invalid token"),
                ParserStatus::ParseError
                | ParserStatus::ErrorTextTooLong
                | ParserStatus::NullErrorText => write!(f, "invalid declaration"),
                status => write!(f, "{}", status.message()),
            },
            Self::Trailing(_) => write!(f, "unexpected input after declaration"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}
