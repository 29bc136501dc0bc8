//! Brace-scope discipline on top of [`CodeWriter`].
//!
//! The default operations track nesting only as a depth counter; whether a
//! close matches the "right" open semantically is the caller's obligation.
//! [`ScopeStack`] is the opt-in strict mode that validates close order against
//! an explicit stack of scope tags.

use std::io::Write;

use crate::{CodeWriter, Error, Result};

impl<W: Write> CodeWriter<W> {
    /// Write an opening-brace line at the current depth, then indent.
    pub fn open_scope(&mut self) -> Result<&mut Self> {
        self.write_line("{")?;
        self.indent()
    }

    /// Dedent, then write a closing-brace line at the new depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndentUnderflow`] at depth 0, before anything is
    /// written.
    pub fn close_scope(&mut self) -> Result<&mut Self> {
        self.dedent()?;
        self.write_line("}")
    }

    /// Close every scope still open, one closing-brace line per level.
    ///
    /// With `realign` set (the common case: the last content was written
    /// inside the innermost scope's body), one dedent happens first and
    /// exactly `level` closing lines are emitted, at depths `level-1` down
    /// to 0. Without `realign` the cursor is assumed to already sit at the
    /// innermost closing brace's depth and `level + 1` lines are emitted, at
    /// depths `level` down to 0.
    ///
    /// At depth 0 this is a no-op for either flag value. The level is always
    /// 0 afterwards.
    pub fn close_remaining_scopes(&mut self, realign: bool) -> Result<&mut Self> {
        if self.level() == 0 {
            return Ok(self);
        }
        if realign {
            self.dedent()?;
        }
        loop {
            self.write_line("}")?;
            if self.level() == 0 {
                break;
            }
            self.dedent()?;
        }
        Ok(self)
    }

    /// Write a header line, run `body` one level deeper, and close with `}`.
    ///
    /// ```
    /// use codescribe::CodeWriter;
    ///
    /// let mut w = CodeWriter::new(Vec::new());
    /// w.block("impl Foo {", |w| {
    ///     w.write_line("fn bar(&self) {}")?;
    ///     Ok(())
    /// })?;
    ///
    /// let code = String::from_utf8(w.into_inner()).unwrap();
    /// assert_eq!(code, "impl Foo {\n    fn bar(&self) {}\n}\n");
    /// # Ok::<(), codescribe::Error>(())
    /// ```
    pub fn block<F>(&mut self, header: &str, body: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.write_line(header)?;
        self.indent()?;
        body(self)?;
        self.dedent()?;
        self.write_line("}")
    }
}

/// Ordered stack of scope tags for strict open/close validation.
///
/// Each open pushes a tag (e.g. `"class"`, `"method"`); each close must name
/// the innermost tag or it fails without touching the writer. Useful when a
/// generation routine is complex enough that an unbalanced close would
/// otherwise only show up as misindented output.
#[derive(Debug, Default)]
pub struct ScopeStack {
    tags: Vec<String>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked open scopes.
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    /// Tag of the innermost open scope, if any.
    pub fn innermost(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    /// Open a scope on `writer` and track it under `tag`.
    pub fn open<W: Write>(
        &mut self,
        writer: &mut CodeWriter<W>,
        tag: impl Into<String>,
    ) -> Result<()> {
        writer.open_scope()?;
        self.tags.push(tag.into());
        Ok(())
    }

    /// Close the innermost scope, verifying it is the one named by `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnopenedScope`] if nothing is open and
    /// [`Error::ScopeMismatch`] if `tag` is not the innermost scope. The
    /// writer is untouched on error.
    pub fn close<W: Write>(&mut self, writer: &mut CodeWriter<W>, tag: &str) -> Result<()> {
        match self.tags.last() {
            None => Err(Error::UnopenedScope {
                tag: tag.to_string(),
            }),
            Some(innermost) if innermost != tag => Err(Error::ScopeMismatch {
                expected: innermost.clone(),
                found: tag.to_string(),
            }),
            Some(_) => {
                writer.close_scope()?;
                self.tags.pop();
                Ok(())
            }
        }
    }

    /// Close every tracked scope, innermost first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthDrift`] if the tracked count disagrees with the
    /// writer's level, which happens when tracked scopes were mixed with
    /// manual `indent`/`dedent` calls.
    pub fn close_all<W: Write>(&mut self, writer: &mut CodeWriter<W>) -> Result<()> {
        if self.tags.len() != writer.level() {
            return Err(Error::DepthDrift {
                tracked: self.tags.len(),
                actual: writer.level(),
            });
        }
        writer.close_remaining_scopes(true)?;
        self.tags.clear();
        Ok(())
    }
}
