//! ID3v2 items and utilities
//!
//! ## Reading
//!
//! Most users only need [`scan`](crate::scan), which finds every tag in a stream and
//! returns their [`Frames`]. The pieces it is built from are available for streams that
//! arrive incrementally:
//!
//! * [`TagLocator`] finds complete tag blocks
//! * [`parse_tag_block`] decodes the frames of a single block
//!
//! ## Important notes
//!
//! Only ID3v2.3 and ID3v2.4 tags are read. Tags with any other version, or with flags that
//! aren't defined, are skipped entirely.
//!
//! Frame content is never interpreted beyond removing unsynchronisation, see [`Frame::text`]
//! for text frames.

mod frame;
mod frames;
pub(crate) mod header;
pub(crate) mod locate;
pub(crate) mod read;
pub mod util;

// Exports

pub use header::{Id3v2TagFlags, Id3v2Version, SizeEncoding};

pub use frame::header::{FrameId, ParsedFrameId};
pub use frame::{Frame, FrameFlags};
pub use frames::Frames;

pub use locate::{Locate, TagLocator};
pub use read::parse_tag_block;
