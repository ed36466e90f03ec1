use std::fmt::Display;

use crate::ErrorBuilder;

/// Writes diagnostics for one input to stderr
pub struct ErrorEmitter {
    builder: ErrorBuilder,
}

impl ErrorEmitter {
    pub fn new(builder: ErrorBuilder) -> Self {
        Self { builder }
    }

    pub fn emit<T: Display>(&self, error: &T, number: usize, line: &str, note: Option<String>) {
        eprintln!("{}", self.render(error, number, line, note));
    }

    pub fn render<T: Display>(
        &self,
        error: &T,
        number: usize,
        line: &str,
        note: Option<String>,
    ) -> String {
        let builder = self
            .builder
            .clone()
            .info(error.to_string())
            .context(number, line);

        let builder = match note {
            Some(note) => builder.note(note),
            None => builder,
        };

        builder.build()
    }
}
