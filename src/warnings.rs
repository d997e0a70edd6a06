//! Capacity warnings printed after a notebook changes.
//!
//! Listing rescans every note, and the stored format comes from browser
//! local storage with its ~5MB quota, so both numbers have a soft ceiling.

use std::fmt;

pub const MAX_COMFORTABLE_NOTES: usize = 1000;
pub const MAX_COMFORTABLE_BYTES: usize = 5 * 1024 * 1024;

const MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    TooManyNotes { count: usize, limit: usize },
    PayloadTooLarge { bytes: usize, limit: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::TooManyNotes { count, limit } => write!(
                f,
                "Warning: {} notes is past the comfortable {}, listing may get slow",
                count, limit
            ),
            Warning::PayloadTooLarge { bytes, limit } => write!(
                f,
                "Warning: stored notes take {:.1}MB, more than the {:.0}MB a browser would keep",
                *bytes as f64 / MIB,
                *limit as f64 / MIB
            ),
        }
    }
}

/// Warnings for a collection of `note_count` notes serializing to `payload_len` bytes
pub fn capacity_warnings(note_count: usize, payload_len: usize) -> Vec<Warning> {
    let checks = [
        (note_count > MAX_COMFORTABLE_NOTES).then_some(Warning::TooManyNotes {
            count: note_count,
            limit: MAX_COMFORTABLE_NOTES,
        }),
        (payload_len > MAX_COMFORTABLE_BYTES).then_some(Warning::PayloadTooLarge {
            bytes: payload_len,
            limit: MAX_COMFORTABLE_BYTES,
        }),
    ];
    checks.into_iter().flatten().collect()
}
