use super::frame::read::ParsedFrame;
use super::header::{HEADER_SIZE, Id3v2Header, skip_extended_header, strip_footer};
use crate::error::Result;
use crate::id3::v2::Frame;
use crate::macros::{err, id3v2_err};

/// Decode every frame of a complete tag block
///
/// `block` must be exactly one tag: the header, the tag body, and the footer if the header
/// says there is one. These are the blocks produced by [`TagLocator`](crate::id3::v2::TagLocator).
///
/// Frames are returned in the order they appear. Either the entire tag is valid and every
/// frame is returned, or an error is returned and no frames are.
///
/// # Errors
///
/// * `block` doesn't start with a valid tag header ([`ErrorKind::FakeTag`](crate::error::ErrorKind::FakeTag))
/// * The length of `block` doesn't match the header ([`ErrorKind::SizeMismatch`](crate::error::ErrorKind::SizeMismatch))
/// * The tag is malformed (See [`Id3v2ErrorKind`](crate::error::Id3v2ErrorKind))
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::{FrameId, parse_tag_block};
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut block = b"ID3\x04\x00\x00\x00\x00\x00\x14".to_vec();
/// block.extend_from_slice(b"TIT2\x00\x00\x00\x04\x00\x00\x03Foo");
/// block.extend_from_slice(&[0; 6]);
///
/// let frames = parse_tag_block(&block)?;
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].id(), FrameId::TIT2);
/// assert_eq!(frames[0].text()?, "Foo");
/// # Ok(()) }
/// ```
pub fn parse_tag_block(block: &[u8]) -> Result<Vec<Frame>> {
	let Some((header_bytes, body)) = block.split_first_chunk::<HEADER_SIZE>() else {
		err!(FakeTag);
	};

	let Some(header) = Id3v2Header::parse(header_bytes) else {
		err!(FakeTag);
	};

	if header.full_tag_size() != block.len() {
		err!(SizeMismatch);
	}

	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {:?}, flags: {:#04x}",
		header.size,
		header.version,
		header.flags.as_byte()
	);

	if header.flags.experimental {
		log::warn!("Tag is marked as experimental");
	}

	let mut content = body;
	if header.flags.footer {
		content = strip_footer(header_bytes, content)?;
	}

	if header.flags.extended_header {
		content = skip_extended_header(header.version, content)?;
	}

	let mut frames = Vec::new();
	while let ParsedFrame::Next(frame) =
		ParsedFrame::read(&mut content, header.version, header.flags.unsynchronisation)?
	{
		frames.push(frame);
	}

	// Whatever is left after the last frame is padding
	if !content.is_empty() {
		if header.flags.footer {
			id3v2_err!(PaddingWithFooter);
		}

		if content.iter().any(|b| *b != 0) {
			id3v2_err!(InvalidPadding);
		}

		log::trace!("Skipping {} bytes of padding", content.len());
	}

	Ok(frames)
}
