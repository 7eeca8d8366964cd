//! shortterm-terminal — Terminal frontends.
//!
//! Provides a line-oriented frontend that works over any reader/writer pair
//! and a full-screen frontend that draws directly to terminal cells.

pub mod fullscreen;
pub mod input;
pub mod keymap;
pub mod plain;
pub mod session;

pub use fullscreen::{EventSource, FullscreenFrontend, Screen, TerminalEvents};
pub use input::{AnswerEditor, KeyResult};
pub use keymap::{Action, KeyBinding, KeyBindingError, Keymap};
pub use plain::PlainFrontend;
pub use session::DisplaySession;
