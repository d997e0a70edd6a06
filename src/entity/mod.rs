mod color;
mod note;

pub use color::{PaletteColor, DEFAULT_COLOR, PALETTE};
pub use note::{Note, NoteDraft, NotePatch};

use chrono::Utc;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
