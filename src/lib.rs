//! `taglog` - leveled, tag-aware console logging for command-line tools.
//!
//! - Six ordered levels, from `verbose` to `bug`
//! - Threshold picked up from `DEBUG`/`VERBOSE`/`INFO` and `--debug`/`--verbose`
//! - Hierarchical tags, shown only when debugging
//! - Indentation, icons, timestamps, blinking emphasis
//! - Aligned key/value lists under a parent line
//! - `info` goes to stdout, everything else to stderr
//!
//! # Example
//!
//! ```
//! use taglog::{Icon, Level, Logger, MemoryOutput};
//!
//! let out = MemoryOutput::new();
//! let log = Logger::builder()
//!     .level(Level::Debug)
//!     .colors(false)
//!     .output(out.clone())
//!     .build();
//!
//! let net = log.tagged("net");
//! net.info("Connected");
//! net.debug("Handshake took 12ms");
//! log.at(Level::Info).icon(Icon::DONE).log("All done");
//!
//! assert_eq!(out.stdout(), vec!["[I] net › Connected", "✔ All done"]);
//! assert_eq!(out.stderr(), vec!["[D] net › Handshake took 12ms"]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `taglog` binary

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod line;
pub mod list;
pub mod logger;
mod macros;
pub mod message;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{Color, ColorMode, Icon, OutputTarget, Painter, Style};
pub use level::Level;
pub use line::Line;
pub use list::{List, ListBuffer, ListItem, Value};
pub use logger::{Entry, Logger, LoggerBuilder, Resolution, Signals, Source};
pub use message::{Dbg, Message, Printable};
pub use output::{MemoryOutput, Output, Stream, TerminalOutput};
