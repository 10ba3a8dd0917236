use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for this crate.
///
/// Every variant is a deterministic programming or configuration error, so no
/// operation in this crate retries; failures surface immediately.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("segment {segment_num} is out of range (valid segments are 1..={num_segments})")]
    InvalidSegment {
        segment_num: usize,
        num_segments: usize,
    },

    #[display("no glyph for character {glyph:?}")]
    UnknownGlyph { glyph: char },

    #[display("hour-tens position can only show blank or '1', not {glyph:?}")]
    InvalidDigitForPosition { glyph: char },

    #[display("strip has {available} pixels but the segment layout requires {required}")]
    InsufficientPixels { required: usize, available: usize },
}
