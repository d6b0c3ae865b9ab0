//! Response-format editor core.
//!
//! This crate carries the whole observable logic of the format editor with
//! no UI in the loop:
//! - `FormatStore` - The authoritative in-memory list of committed formats
//! - `FormatDraft` - The single shared form state being edited
//! - `Editor` - The listing/editing state machine tying the two together
//!
//! A surface crate (for example `retort-console-egui`) binds widgets to the
//! draft and forwards button presses to the editor; everything it can do is
//! equally drivable from a test.

mod store;
pub use store::FormatStore;

mod draft;
pub use draft::FormatDraft;

mod editor;
pub use editor::{Editor, EditorView};
