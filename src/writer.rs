//! Indentation-aware writer over an output sink.

use std::io::Write;

use crate::{Error, Indent, Result};

/// Stateful writer that applies indentation lazily, once per line.
///
/// Wraps any [`std::io::Write`] sink. Indentation is written only when the
/// first content of a line arrives, so a logical line can be composed from
/// several `write` calls without re-triggering indentation, and an empty line
/// carries no leading whitespace.
///
/// The writer never flushes or closes the sink; that lifecycle belongs to the
/// caller. [`into_inner`](CodeWriter::into_inner) hands the sink back.
///
/// # Example
///
/// ```
/// use codescribe::CodeWriter;
///
/// let mut w = CodeWriter::new(Vec::new());
/// w.write_line("fn main() {")?.indent()?;
/// w.write_line("println!(\"Hello\");")?;
/// w.dedent()?.write_line("}")?;
///
/// let code = String::from_utf8(w.into_inner()).unwrap();
/// assert_eq!(code, "fn main() {\n    println!(\"Hello\");\n}\n");
/// # Ok::<(), codescribe::Error>(())
/// ```
#[derive(Debug)]
pub struct CodeWriter<W> {
    sink: W,
    indent: Indent,
    level: usize,
    at_line_start: bool,
}

impl<W: Write> CodeWriter<W> {
    /// Create a writer at level 0 with the default four-space indentation.
    pub fn new(sink: W) -> Self {
        Self::with_indent(sink, Indent::default())
    }

    /// Create a writer at level 0 with the given indentation style.
    pub fn with_indent(sink: W, indent: Indent) -> Self {
        Self {
            sink,
            indent,
            level: 0,
            at_line_start: true,
        }
    }

    /// Create a writer starting at an arbitrary indentation level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndentOverflow`] if `level` is `usize::MAX`, which is
    /// outside the representable range.
    pub fn with_level(sink: W, indent: Indent, level: usize) -> Result<Self> {
        if level == usize::MAX {
            return Err(Error::IndentOverflow);
        }
        Ok(Self {
            sink,
            indent,
            level,
            at_line_start: true,
        })
    }

    /// Append text to the current line, indenting first if the line is fresh.
    ///
    /// Writing an empty string is a no-op; in particular `write_line("")`
    /// produces an empty line with no leading whitespace.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        if text.is_empty() {
            return Ok(self);
        }
        if self.at_line_start {
            for _ in 0..self.level {
                self.sink.write_all(self.indent.unit().as_bytes())?;
            }
            self.at_line_start = false;
        }
        self.sink.write_all(text.as_bytes())?;
        Ok(self)
    }

    /// Append text and terminate the line.
    pub fn write_line(&mut self, text: &str) -> Result<&mut Self> {
        self.write(text)?;
        self.newline()?;
        Ok(self)
    }

    /// Guarantee a visually blank line next in the output.
    ///
    /// Mid-line, the pending content is terminated first and exactly one blank
    /// line follows it. At a fresh line start, exactly one blank line is
    /// written.
    pub fn blank_line(&mut self) -> Result<&mut Self> {
        if !self.at_line_start {
            self.newline()?;
        }
        self.newline()?;
        Ok(self)
    }

    /// Increase the indentation level by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndentOverflow`] if the increment would reach
    /// `usize::MAX`. The level is unchanged on failure.
    pub fn indent(&mut self) -> Result<&mut Self> {
        if self.level >= usize::MAX - 1 {
            return Err(Error::IndentOverflow);
        }
        self.level += 1;
        Ok(self)
    }

    /// Decrease the indentation level by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndentUnderflow`] if the level is already zero. The
    /// level is unchanged on failure.
    pub fn dedent(&mut self) -> Result<&mut Self> {
        if self.level == 0 {
            return Err(Error::IndentUnderflow);
        }
        self.level -= 1;
        Ok(self)
    }

    /// Current indentation level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether nothing has been written on the current output line yet.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// The indentation style this writer was constructed with.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Mutable access to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn newline(&mut self) -> Result<()> {
        self.sink.write_all(b"\n")?;
        self.at_line_start = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn into_string(writer: CodeWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_lazy_indentation() {
        let mut w = CodeWriter::new(Vec::new());
        w.write_line("fn main() {").unwrap();
        w.indent().unwrap();
        w.write_line("return;").unwrap();
        w.dedent().unwrap();
        w.write_line("}").unwrap();
        assert_eq!(into_string(w), "fn main() {\n    return;\n}\n");
    }

    #[test]
    fn test_indentation_applied_once_per_line() {
        let mut w = CodeWriter::new(Vec::new());
        w.indent().unwrap();
        w.write("let x").unwrap();
        w.write(" = 1;").unwrap();
        w.write_line("").unwrap();
        assert_eq!(into_string(w), "    let x = 1;\n");
    }

    #[test]
    fn test_empty_line_has_no_indentation() {
        let mut w = CodeWriter::new(Vec::new());
        w.indent().unwrap();
        w.indent().unwrap();
        w.write_line("").unwrap();
        w.write_line("x").unwrap();
        assert_eq!(into_string(w), "\n        x\n");
    }

    #[test]
    fn test_balanced_indent_dedent_writes_nothing() {
        let mut w = CodeWriter::new(Vec::new());
        for _ in 0..5 {
            w.indent().unwrap();
        }
        for _ in 0..5 {
            w.dedent().unwrap();
        }
        assert_eq!(w.level(), 0);
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn test_dedent_at_zero_fails_and_preserves_level() {
        let mut w = CodeWriter::new(Vec::new());
        assert!(matches!(w.dedent(), Err(Error::IndentUnderflow)));
        assert_eq!(w.level(), 0);
    }

    #[test]
    fn test_indent_at_maximum_fails_and_preserves_level() {
        let mut w =
            CodeWriter::with_level(Vec::new(), Indent::default(), usize::MAX - 1).unwrap();
        assert!(matches!(w.indent(), Err(Error::IndentOverflow)));
        assert_eq!(w.level(), usize::MAX - 1);
    }

    #[test]
    fn test_construction_rejects_maximum_level() {
        let result = CodeWriter::with_level(Vec::new(), Indent::default(), usize::MAX);
        assert!(matches!(result, Err(Error::IndentOverflow)));
    }

    #[test]
    fn test_blank_line_at_fresh_line() {
        let mut w = CodeWriter::new(Vec::new());
        w.blank_line().unwrap();
        assert_eq!(into_string(w), "\n");
    }

    #[test]
    fn test_blank_line_mid_line() {
        let mut w = CodeWriter::new(Vec::new());
        w.write("x").unwrap();
        w.blank_line().unwrap();
        assert_eq!(into_string(w), "x\n\n");
    }

    #[test]
    fn test_two_space_indent() {
        let mut w = CodeWriter::with_indent(Vec::new(), Indent::TWO_SPACES);
        w.indent().unwrap();
        w.write_line("return 1;").unwrap();
        assert_eq!(into_string(w), "  return 1;\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut w = CodeWriter::with_indent(Vec::new(), Indent::Tab);
        w.indent().unwrap();
        w.write_line("return").unwrap();
        assert_eq!(into_string(w), "\treturn\n");
    }

    #[test]
    fn test_with_level_starts_indented() {
        let mut w = CodeWriter::with_level(Vec::new(), Indent::default(), 2).unwrap();
        w.write_line("x").unwrap();
        assert_eq!(into_string(w), "        x\n");
    }

    #[test]
    fn test_at_line_start_tracking() {
        let mut w = CodeWriter::new(Vec::new());
        assert!(w.at_line_start());
        w.write("x").unwrap();
        assert!(!w.at_line_start());
        w.write_line("").unwrap();
        assert!(w.at_line_start());
    }
}
