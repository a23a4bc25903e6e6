use super::Frame;
use super::header::parse::{FRAME_HEADER_SIZE, parse_header};
use crate::error::Result;
use crate::id3::v2::FrameFlags;
use crate::id3::v2::header::Id3v2Version;
use crate::id3::v2::util::synchsafe::remove_unsynchronisation;
use crate::macros::id3v2_err;

pub(crate) enum ParsedFrame {
	Next(Frame),
	Eof,
}

impl ParsedFrame {
	/// Read the next frame from the start of `content`, advancing past it
	///
	/// `content` is left untouched once the padding, or the end of the tag, is reached.
	pub(crate) fn read(
		content: &mut &[u8],
		version: Id3v2Version,
		tag_unsynchronisation: bool,
	) -> Result<Self> {
		let Some((header, rest)) = content.split_first_chunk::<FRAME_HEADER_SIZE>() else {
			// Not enough left for a frame header
			return Ok(Self::Eof);
		};

		let Some((id, size, mut flags)) = parse_header(header, version)? else {
			return Ok(Self::Eof);
		};

		let Some(raw) = rest.get(..size as usize) else {
			id3v2_err!(FrameSizeExceedsTag);
		};

		let frame_unsynchronisation = flags.unsynchronisation(version);
		let data = if tag_unsynchronisation || frame_unsynchronisation {
			if frame_unsynchronisation {
				// The flag no longer describes the data
				flags.remove(FrameFlags::V24_UNSYNCHRONISATION);
			}

			remove_unsynchronisation(raw)
		} else {
			raw.to_vec()
		};

		log::trace!(
			"Read frame \"{}\", size: {}, stored size: {}, flags: {:#06x}",
			id,
			data.len(),
			size,
			flags.bits()
		);

		*content = &rest[raw.len()..];
		Ok(Self::Next(Frame::new(id, version, flags, data)))
	}
}
