#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the line-oriented output primitives used by the
//! `logging` crate's message router. A [`MessageSink`] wraps any
//! [`std::io::Write`] implementor (process stdout/stderr in production, an
//! in-memory buffer in tests) and writes already formatted text lines to it.
//!
//! # Design
//!
//! The sink stores the writer together with a [`LineMode`]. Under
//! [`LineMode::WithNewline`] every written line is terminated by exactly one
//! newline: text that already ends in `'\n'` is written unchanged and text that
//! does not gets a single terminator. [`LineMode::WithoutNewline`] writes text
//! verbatim, which is what in-place terminal updates such as progress bars
//! need. [`MessageSink::scoped_line_mode`] switches the mode temporarily and
//! restores it when the returned [`LineModeGuard`] is dropped.
//!
//! # Invariants
//!
//! - A line written under [`LineMode::WithNewline`] never gains a second
//!   trailing newline.
//! - The sink never buffers on its own; every write goes straight to the
//!   wrapped writer, and [`MessageSink::flush`] forwards to it.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write("WARNING disk almost full").unwrap();
//! sink.write("ERROR out of space\n").unwrap();
//! assert_eq!(
//!     sink.into_inner(),
//!     b"WARNING disk almost full\nERROR out of space\n".to_vec()
//! );
//!
//! let mut raw = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! raw.write("\rProgress").unwrap();
//! assert_eq!(raw.into_inner(), b"\rProgress".to_vec());
//! ```

mod line_mode;
mod sink;

pub use line_mode::{LineMode, terminate_line};
pub use sink::{LineModeGuard, MessageSink};
