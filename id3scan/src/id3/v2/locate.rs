//! Finding ID3v2 tags in a stream
//!
//! Tags can appear anywhere in a stream, and there can be any number of them. The
//! [`TagLocator`] searches for the `"ID3"` signature, checks that it is followed by a
//! header we can read, and buffers until the entire tag is available.
//!
//! A signature that isn't followed by a valid header is not an error, it is just data that
//! happens to look like a signature (audio data, for instance). These are skipped.

use super::header::{HEADER_SIZE, Id3v2Header};
use crate::config::ScanOptions;
use crate::error::Result;
use crate::macros::err;
use crate::util::pool::{BufferPool, PooledBuffer, scratch_pool};

use std::io::{ErrorKind, Read};

const SIGNATURE: &[u8; 3] = b"ID3";

/// The outcome of searching the start of a buffer for a tag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Split {
	/// Nothing can be decided without more data, `discard` bytes will never be part of a tag
	NeedMore { discard: usize },
	/// A signature was rejected, skip past it
	Skip(usize),
	/// A complete tag at `data[start..start + len]`
	Block { start: usize, len: usize },
}

/// Search `data` for the next complete tag
///
/// `at_eof` indicates that no more data will follow, in which case a partial tag is an
/// error rather than a reason to wait.
pub(crate) fn locate(data: &[u8], at_eof: bool) -> Result<Split> {
	let Some(start) = data.windows(SIGNATURE.len()).position(|w| w == SIGNATURE) else {
		// The last 2 bytes could be the start of a signature
		return Ok(Split::NeedMore {
			discard: data.len().saturating_sub(SIGNATURE.len() - 1),
		});
	};

	let Some(header) = data[start..].first_chunk::<HEADER_SIZE>() else {
		if at_eof {
			log::debug!("Stream ended inside of a tag header");
			err!(UnexpectedEof);
		}

		return Ok(Split::NeedMore { discard: start });
	};

	let Some(header) = Id3v2Header::parse(header) else {
		return Ok(Split::Skip(start + SIGNATURE.len()));
	};

	let len = header.full_tag_size();
	if data.len() - start < len {
		if at_eof {
			log::debug!(
				"Stream ended inside of a tag, expected {} bytes, found {}",
				len,
				data.len() - start
			);
			err!(UnexpectedEof);
		}

		return Ok(Split::NeedMore { discard: start });
	}

	log::debug!("Found an ID3v2 tag, version: {:?}, size: {}", header.version, len);
	Ok(Split::Block { start, len })
}

/// The result of [`TagLocator::next_block`]
#[derive(Debug, PartialEq, Eq)]
pub enum Locate<'a> {
	/// A complete tag block, see [`parse_tag_block`](crate::id3::v2::parse_tag_block)
	Block(&'a [u8]),
	/// More data is needed, either through [`TagLocator::feed`] or [`TagLocator::fill_from`],
	/// or the locator needs to be told there is no more with [`TagLocator::finish`]
	NeedMore,
	/// There are no more tags
	Finished,
}

/// An incremental search for ID3v2 tags
///
/// Data is pushed into the locator, and complete tag blocks are pulled out with
/// [`TagLocator::next_block`]. Only the data that could still be part of a tag is kept.
///
/// The locator buffers at most [`ScanOptions::max_buffer_size()`] bytes, which bounds the
/// size of the tags it can find.
///
/// # Examples
///
/// ```rust
/// use id3scan::config::ScanOptions;
/// use id3scan::id3::v2::{Locate, TagLocator, parse_tag_block};
///
/// # fn main() -> id3scan::error::Result<()> {
/// let mut stream = b"junk".to_vec();
/// stream.extend_from_slice(b"ID3\x04\x00\x00\x00\x00\x00\x0E");
/// stream.extend_from_slice(b"TIT2\x00\x00\x00\x04\x00\x00\x03Foo");
///
/// let mut locator = TagLocator::new(ScanOptions::new());
///
/// // The data can arrive in any number of pieces
/// let (first, second) = stream.split_at(8);
/// locator.feed(first)?;
/// assert_eq!(locator.next_block()?, Locate::NeedMore);
///
/// locator.feed(second)?;
/// locator.finish();
///
/// let Locate::Block(block) = locator.next_block()? else {
/// 	panic!("Expected a tag");
/// };
///
/// let frames = parse_tag_block(block)?;
/// assert_eq!(frames[0].text()?, "Foo");
///
/// assert_eq!(locator.next_block()?, Locate::Finished);
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct TagLocator<'p> {
	buffer: PooledBuffer<'p>,
	// Start of the unprocessed data in `buffer`
	pos: usize,
	eof: bool,
	options: ScanOptions,
}

impl TagLocator<'static> {
	/// Create a new `TagLocator`, using the global [`scratch_pool`](crate::scratch_pool)
	pub fn new(options: ScanOptions) -> Self {
		Self::with_pool(scratch_pool(), options)
	}
}

impl<'p> TagLocator<'p> {
	/// Create a new `TagLocator` that takes its buffer from `pool`
	///
	/// The buffer is returned to the pool when the locator is dropped.
	pub fn with_pool(pool: &'p BufferPool, options: ScanOptions) -> Self {
		Self {
			buffer: pool.acquire(),
			pos: 0,
			eof: false,
			options,
		}
	}

	/// The number of bytes held that haven't been processed yet
	pub fn buffered(&self) -> usize {
		self.buffer.len() - self.pos
	}

	/// Whether [`TagLocator::finish`] has been called, or a reader has been exhausted
	pub fn is_finished(&self) -> bool {
		self.eof
	}

	// Drop everything that has already been processed
	fn compact(&mut self) {
		if self.pos > 0 {
			self.buffer.drain(..self.pos);
			self.pos = 0;
		}
	}

	/// Append `data` to the stream
	///
	/// # Errors
	///
	/// The held data would exceed [`ScanOptions::max_buffer_size()`]
	pub fn feed(&mut self, data: &[u8]) -> Result<()> {
		self.compact();

		if self.buffer.len() + data.len() > self.options.max_buffer_size {
			log::debug!(
				"Refusing to buffer {} more bytes, {} are already held",
				data.len(),
				self.buffer.len()
			);
			err!(TooMuchData);
		}

		self.buffer.extend_from_slice(data);
		Ok(())
	}

	/// Read the next chunk of the stream from `reader`
	///
	/// At most [`ScanOptions::read_chunk_size()`] bytes are read. Once `reader` is exhausted, the
	/// locator is [finished](TagLocator::finish), and this returns `0`.
	///
	/// # Errors
	///
	/// * The buffer is already at [`ScanOptions::max_buffer_size()`]
	/// * `reader` fails
	pub fn fill_from<R>(&mut self, reader: &mut R) -> Result<usize>
	where
		R: Read,
	{
		self.compact();

		let room = self.options.max_buffer_size.saturating_sub(self.buffer.len());
		if room == 0 {
			log::debug!(
				"Scan buffer is full ({} bytes) and no tag has completed",
				self.buffer.len()
			);
			err!(TooMuchData);
		}

		let start = self.buffer.len();
		self.buffer
			.resize(start + room.min(self.options.read_chunk_size), 0);

		loop {
			match reader.read(&mut self.buffer[start..]) {
				Ok(read) => {
					self.buffer.truncate(start + read);
					if read == 0 {
						self.finish();
					}

					return Ok(read);
				},
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(e) => {
					self.buffer.truncate(start);
					return Err(e.into());
				},
			}
		}
	}

	/// Signal that the stream has ended
	///
	/// After this, [`TagLocator::next_block`] will never return [`Locate::NeedMore`].
	pub fn finish(&mut self) {
		self.eof = true;
	}

	/// Find the next complete tag block
	///
	/// The returned block is valid until the locator is used again.
	///
	/// # Errors
	///
	/// The locator is finished, and the stream ended in the middle of a tag
	/// ([`ErrorKind::UnexpectedEof`](crate::error::ErrorKind::UnexpectedEof))
	pub fn next_block(&mut self) -> Result<Locate<'_>> {
		loop {
			match locate(&self.buffer[self.pos..], self.eof)? {
				Split::Skip(skip) => {
					log::trace!("Skipping invalid ID3v2 header at offset {}", self.pos);
					self.pos += skip;
				},
				Split::NeedMore { discard } => {
					self.pos += discard;

					if self.eof {
						return Ok(Locate::Finished);
					}

					return Ok(Locate::NeedMore);
				},
				Split::Block { start, len } => {
					let start = self.pos + start;
					self.pos = start + len;

					return Ok(Locate::Block(&self.buffer[start..start + len]));
				},
			}
		}
	}
}
