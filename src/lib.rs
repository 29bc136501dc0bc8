//! Indentation-aware code emission utilities.
//!
//! This crate is the text-emission layer of a source generator: a stateful
//! writer that tracks indentation depth and applies it lazily once per line,
//! plus two thin layers on top of it:
//!
//! - [`CodeWriter`] - the writer itself (`write`, `write_line`, `blank_line`,
//!   bounded `indent`/`dedent`)
//! - scope discipline - `open_scope`/`close_scope` pairing,
//!   `close_remaining_scopes` bulk unwind, closure-based `block`, and the
//!   opt-in strict [`ScopeStack`]
//! - doc comments - structured XML documentation blocks (`doc_summary`,
//!   `doc_param`, `doc_returns`, `doc_exception`) and the pure
//!   [`param_ref`]/[`see_ref`] fragment formatters
//!
//! The writer is content-agnostic: it decides how text is indented and
//! line-broken, never what the text means. Output goes to any
//! [`std::io::Write`] sink, which the writer neither flushes nor closes.
//!
//! # Example
//!
//! ```
//! use codescribe::CodeWriter;
//!
//! let mut w = CodeWriter::new(Vec::new());
//! w.doc_summary("Entry point.")?;
//! w.write("fn main() ")?.open_scope()?;
//! w.write_line("println!(\"Hello\");")?;
//! w.close_remaining_scopes(true)?;
//!
//! let code = String::from_utf8(w.into_inner()).unwrap();
//! assert_eq!(
//!     code,
//!     "/// <summary>\n/// Entry point.\n/// </summary>\nfn main() {\n    println!(\"Hello\");\n}\n"
//! );
//! # Ok::<(), codescribe::Error>(())
//! ```

mod error;
mod indent;
mod scope;
mod writer;
mod xmldoc;

pub use error::{Error, Result};
pub use indent::Indent;
pub use scope::ScopeStack;
pub use writer::CodeWriter;
pub use xmldoc::{param_ref, see_ref};
