use super::{FrameId, ParsedFrameId};
use crate::error::Result;
use crate::id3::v2::FrameFlags;
use crate::id3::v2::header::Id3v2Version;
use crate::macros::id3v2_err;

use byteorder::{BigEndian, ByteOrder};

pub(crate) const FRAME_HEADER_SIZE: usize = 10;

/// Parse a frame header into its ID, size, and flags
///
/// Returns `None` if we just started reading padding.
pub(crate) fn parse_header(
	header: &[u8; FRAME_HEADER_SIZE],
	version: Id3v2Version,
) -> Result<Option<(FrameId, u32, FrameFlags)>> {
	let id_bytes = [header[0], header[1], header[2], header[3]];
	let id = match ParsedFrameId::parse(id_bytes) {
		ParsedFrameId::Id(id) => id,
		ParsedFrameId::Padding => return Ok(None),
		ParsedFrameId::Invalid => id3v2_err!(BadFrameId(id_bytes)),
	};

	// For some reason, some apps make v3 tags with v2 frame IDs.
	// The actual frame header is v3 though
	if id.is_outdated() {
		log::warn!("Found a v2 frame ID in a {:?} tag: \"{}\"", version, id);
	}

	let Some(size) = version.size_encoding().read(&header[4..8]) else {
		id3v2_err!(BadFrameSize);
	};

	let flags = FrameFlags::from_bits(BigEndian::read_u16(&header[8..]));

	Ok(Some((id, size, flags)))
}
