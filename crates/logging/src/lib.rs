#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` routes leveled diagnostics to stdout or stderr, prefixes them
//! with their severity name, and keeps an in-memory history of everything that
//! was emitted. It also draws a single-line terminal progress bar.
//!
//! # Design
//!
//! [`MessageRouter`] owns two [`MessageSink`](logging_sink::MessageSink)
//! values, one per stream, together with a [`RouterConfig`] carrying the
//! integer threshold. Levels are plain integers wrapped in [`MessageLevel`];
//! the named [`Severity`] variants supply the canonical prefixes. Hosts that
//! log from several threads wrap the router in a [`SharedRouter`].
//!
//! # Invariants
//!
//! - A message at level `L` is shown only when `L <= threshold`.
//! - A threshold of [`MessageLevel::QUIET`] silences both streams.
//! - Every emitted message is appended to the history, including suppressed
//!   ones and ones whose write failed.
//! - Rendered lines end with exactly one newline.
//!
//! # Errors
//!
//! Emission surfaces [`std::io::Error`] from the underlying writer.
//! Threshold resolution fails with [`ConfigError`] when the environment holds
//! a value that is not an integer. Progress rendering fails with
//! [`ProgressError`].
//!
//! # Examples
//!
//! ```
//! use logging::{MessageLevel, MessageRouter, RouterConfig};
//!
//! let config = RouterConfig::with_threshold(MessageLevel::VERBOSE);
//! let mut router = MessageRouter::with_streams(config, Vec::new(), Vec::new());
//!
//! router.info("a")?;
//! router.debug("b")?;
//! router.verbose("c")?;
//!
//! let (stdout, stderr, history) = router.into_parts();
//! assert_eq!(stdout, b"a\n");
//! assert_eq!(stderr, b"VERBOSE c\n");
//! assert_eq!(history, ["a\n", "DEBUG b\n", "VERBOSE c\n"]);
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;
mod destination;
mod error;
mod levels;
mod macros;
mod progress;
mod router;
mod shared;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{MESSAGE_LEVEL_ENV, RouterConfig};
pub use destination::Destination;
pub use error::{ConfigError, ProgressError};
pub use levels::{MessageLevel, Severity, SeverityParseError};
pub use progress::{EMPTY_GLYPH, FILLED_GLYPH, ProgressBar, ProgressOptions};
pub use router::{MessageRouter, format_message};
pub use shared::SharedRouter;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{RouterLayer, init_tracing};
