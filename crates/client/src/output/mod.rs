//! Output formatting functions.
//!
//! Primary output (JSON or CSV) goes to the writer held by [`Output`];
//! request traces from verbose mode go to a separate [`trace::TraceSink`]
//! (stderr in the binary) so the primary stream stays parseable.

pub mod json;
pub mod table;
pub mod trace;

use std::io::Write;

use thiserror::Error;

use crate::cli::OutputFormat;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Response cannot be rendered as CSV: {0}")]
    Shape(String),

    #[error("Response cannot be rendered as CSV: field `{field}` is not a scalar")]
    NotFlat { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Csv => table::format_csv(value),
    }
}

/// Destination for rendered responses.
#[derive(Debug)]
pub struct Output<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Renders `value` in the selected format and writes it out.
    ///
    /// Nothing is written when rendering fails.
    pub fn render<T: serde::Serialize>(&mut self, value: &T) -> Result<(), OutputError> {
        let rendered = format_output(value, self.format)?;
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the bare HTTP status code, used for calls without a response body.
    pub fn status(&mut self, status: u16) -> Result<(), OutputError> {
        writeln!(self.writer, "{status}")?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_to_writer() {
        let mut output = Output::new(Vec::new(), OutputFormat::Json);
        output.render(&json!({"id": "r1"})).unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text, "{\n  \"id\": \"r1\"\n}\n");
    }

    #[test]
    fn test_failed_csv_render_writes_nothing() {
        let mut output = Output::new(Vec::new(), OutputFormat::Csv);
        let err = output
            .render(&json!([{"id": "m1", "mentionedPeople": ["p1"]}]))
            .unwrap_err();

        assert!(matches!(err, OutputError::NotFlat { ref field } if field == "mentionedPeople"));
        assert!(output.get_ref().is_empty());
    }

    #[test]
    fn test_status_line() {
        let mut output = Output::new(Vec::new(), OutputFormat::Json);
        output.status(204).unwrap();
        assert_eq!(output.into_inner(), b"204\n");
    }
}
