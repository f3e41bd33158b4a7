//! Pure view derivations
//!
//! Functions from a `Game` to what a front end should draw. Nothing here
//! mutates state; the TUI and the simple CLI both render from these.

mod board;
mod status;

pub use board::{Chip, Key, KeyStatus, Slot, key_status, keyboard, language_chips, slots};
pub use status::{
    FAREWELL_VARIANTS, Status, StatusTags, farewell_text, status, status_text,
};
