//! XML documentation comment emission.
//!
//! Structured `///` doc blocks (summary, param, returns, exception) plus pure
//! formatters for the inline cross-reference fragments (`<paramref .../>`,
//! `<see .../>`) that callers embed in their own sentences. This layer adds no
//! state; everything is expressed through [`CodeWriter`] line writes.

use std::io::Write;

use crate::{CodeWriter, Error, Result};

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyArgument { name });
    }
    Ok(())
}

impl<W: Write> CodeWriter<W> {
    /// Emit a three-line `<summary>` block at the current indentation.
    ///
    /// ```
    /// use codescribe::CodeWriter;
    ///
    /// let mut w = CodeWriter::new(Vec::new());
    /// w.doc_summary("Does X.")?;
    ///
    /// let doc = String::from_utf8(w.into_inner()).unwrap();
    /// assert_eq!(doc, "/// <summary>\n/// Does X.\n/// </summary>\n");
    /// # Ok::<(), codescribe::Error>(())
    /// ```
    pub fn doc_summary(&mut self, text: &str) -> Result<&mut Self> {
        require("summary text", text)?;
        self.write_line("/// <summary>")?;
        self.write_line(&format!("/// {}", text))?;
        self.write_line("/// </summary>")
    }

    /// Emit a single `<param>` line describing one parameter.
    pub fn doc_param(&mut self, name: &str, comment: &str) -> Result<&mut Self> {
        require("parameter name", name)?;
        require("parameter comment", comment)?;
        self.write_line(&format!("/// <param name=\"{}\">{}</param>", name, comment))
    }

    /// Emit a single `<exception>` line documenting a failure condition.
    pub fn doc_exception(&mut self, type_name: &str, comment: &str) -> Result<&mut Self> {
        require("exception type name", type_name)?;
        require("exception comment", comment)?;
        self.write_line(&format!(
            "/// <exception cref=\"{}\">{}</exception>",
            type_name, comment
        ))
    }

    /// Emit a single `<returns>` line documenting the return value.
    pub fn doc_returns(&mut self, description: &str) -> Result<&mut Self> {
        require("returns description", description)?;
        self.write_line(&format!("/// <returns>{}</returns>", description))
    }
}

/// Format a `<paramref .../>` fragment for embedding in other doc text.
pub fn param_ref(name: &str) -> Result<String> {
    require("parameter name", name)?;
    Ok(format!("<paramref name=\"{}\"/>", name))
}

/// Format a `<see .../>` fragment for embedding in other doc text.
pub fn see_ref(target: &str) -> Result<String> {
    require("reference target", target)?;
    Ok(format!("<see cref=\"{}\"/>", target))
}
