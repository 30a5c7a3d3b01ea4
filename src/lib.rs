pub mod clipboard;
pub mod codec;
pub mod config;
pub mod edit;
pub mod emit;
pub mod error;
pub mod export;
pub mod model;
pub mod notify;
pub mod parse;
pub mod profile;
pub mod session;
pub mod tui;

mod tui_shell;

pub use error::{ClipboardError, EditorError};
pub use model::{Field, FieldUpdate, Manifest, Port};
pub use profile::Profile;
pub use session::{Session, Tab};
