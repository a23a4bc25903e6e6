//! Reading every ID3v2 frame from a stream

use crate::config::ScanOptions;
use crate::error::Result;
use crate::id3::v2::{Frames, Locate, TagLocator, parse_tag_block};

use std::io::Read;

/// Read the frames of every ID3v2 tag in `reader`
///
/// This uses the default [`ScanOptions`]. See [`scan_with_options`].
///
/// # Errors
///
/// See [`scan_with_options`]
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::FrameId;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut stream = b"ID3\x04\x00\x00\x00\x00\x00\x0E".to_vec();
/// stream.extend_from_slice(b"TIT2\x00\x00\x00\x04\x00\x00\x03Foo");
/// stream.extend_from_slice(b"...audio data...");
///
/// let frames = id3scan::scan(&stream[..])?;
/// let title = frames.lookup(FrameId::TIT2).unwrap();
/// assert_eq!(title.text()?, "Foo");
/// # Ok(()) }
/// ```
pub fn scan<R>(reader: R) -> Result<Frames>
where
	R: Read,
{
	scan_with_options(reader, ScanOptions::default())
}

/// Read the frames of every ID3v2 tag in `reader`, with the provided options
///
/// Tags may appear anywhere in the stream. The frames of every tag are returned in the
/// order they were read. A stream with no tags results in an empty [`Frames`].
///
/// Scanning stops at the first error, and none of the frames read so far are returned.
///
/// # Errors
///
/// * `reader` fails
/// * The stream ends in the middle of a tag ([`ErrorKind::UnexpectedEof`](crate::error::ErrorKind::UnexpectedEof))
/// * A tag doesn't fit in [`ScanOptions::max_buffer_size()`] ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
/// * A tag is malformed (See [`Id3v2ErrorKind`](crate::error::Id3v2ErrorKind))
///
/// # Examples
///
/// ```rust,no_run
/// use id3scan::config::ScanOptions;
/// use std::fs::File;
///
/// # fn main() -> id3scan::error::Result<()> {
/// let file = File::open("song.mp3")?;
///
/// // Don't allow more than 16 MiB of tags
/// let options = ScanOptions::new().max_buffer_size(16 * 1024 * 1024);
/// let frames = id3scan::scan_with_options(file, options)?;
///
/// for frame in &frames {
/// 	println!("{frame}");
/// }
/// # Ok(()) }
/// ```
pub fn scan_with_options<R>(mut reader: R, options: ScanOptions) -> Result<Frames>
where
	R: Read,
{
	let mut locator = TagLocator::new(options);
	let mut frames = Frames::new();
	let mut tags = 0;

	loop {
		match locator.next_block()? {
			Locate::Block(block) => {
				frames.extend(parse_tag_block(block)?);
				tags += 1;
			},
			Locate::NeedMore => {
				locator.fill_from(&mut reader)?;
			},
			Locate::Finished => break,
		}
	}

	log::debug!("Read {} frames from {} tags", frames.len(), tags);
	Ok(frames)
}
