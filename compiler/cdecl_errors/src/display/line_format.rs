use colored::Colorize;

/// Source line with a dimmed line number gutter and an optional note
/// printed under it
pub struct LineFormat<'a> {
    number: usize,
    line: &'a str,
    extra: Option<String>,
}

impl<'a> LineFormat<'a> {
    pub fn new(number: usize, line: &'a str, extra: Option<String>) -> Self {
        Self {
            number,
            line,
            extra,
        }
    }
}

impl std::fmt::Display for LineFormat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snippet_prefix = format!("{:>6} {} ", self.number, "|");

        write!(
            f,
            "{}{}{}",
            snippet_prefix.dimmed(),
            self.line,
            self.extra
                .as_ref()
                .map(|extra| format!(
                    "\n{}{}",
                    " ".repeat(snippet_prefix.len()),
                    extra
                ))
                .unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::LineFormat;

    #[test]
    fn line_with_note() {
        colored::control::set_override(false);

        assert_eq!(
            LineFormat::new(12, "int @x;", Some("= bad".into())).to_string(),
            "    12 | int @x;\n         = bad"
        );
        assert_eq!(LineFormat::new(3, "x;", None).to_string(), "     3 | x;");
    }
}
