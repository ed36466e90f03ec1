mod display;
mod emitter;

use colored::Colorize;

pub use display::line_format::LineFormat;
pub use emitter::ErrorEmitter;

#[derive(Default, Clone)]
pub struct ErrorBuilder {
    filename: Option<String>,
    info: Option<String>,
    context: Option<(usize, String)>,
    note: Option<String>,
}

impl ErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(mut self, info: String) -> Self {
        self.info = Some(info);
        self
    }

    pub fn filename(mut self, filename: String) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Offending line and its 1-based number
    pub fn context(mut self, number: usize, line: &str) -> Self {
        self.context = Some((number, line.to_owned()));
        self
    }

    /// Detail shown under the context line
    pub fn note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    pub fn build(self) -> String {
        let mut message = format!(
            "{} {}",
            "error:".red().bold(),
            self.info.unwrap_or_default()
        );

        if let Some((number, line)) = &self.context {
            message.push_str(&format!(
                "\n {} {}:{}",
                "-->".blue(),
                self.filename.as_deref().unwrap_or("<stdin>"),
                number
            ));
            message.push_str(&format!(
                "\n{}",
                LineFormat::new(*number, line, self.note.map(|note| format!("= {note}")))
            ));
        } else if let Some(note) = self.note {
            message.push_str(&format!("\n  = {note}"));
        }

        message
    }
}
