#![warn(missing_docs)]
//! `smartmark-commands` - command registry and host glue for `smartmark-core`.
//!
//! This crate is the thin dispatch layer between a host application's hotkeys and the
//! markup engine: a serde-backed command registry, markdown-link resolution from the
//! clipboard, and the file/editor utility commands that act on the host rather than the
//! buffer. The editing engine itself lives in `smartmark-core`; nothing here touches
//! buffer internals.
//!
//! Hosts provide two capabilities: [`HostServices`] for file metadata, host commands,
//! config flags and notices, and [`Clipboard`] for clipboard access
//! ([`SystemClipboard`] wires the latter to the system clipboard).

pub mod clipboard;
pub mod dispatch;
pub mod host;
pub mod registry;

mod error;
mod link;

pub use clipboard::{Clipboard, SystemClipboard};
pub use dispatch::CommandDispatcher;
pub use error::CommandError;
pub use host::{ConfigFlag, FileInfo, HostServices};
pub use registry::{CommandAction, CommandSpec, builtin_commands};
