mod catalog;
pub(super) mod header;
pub(super) mod read;
mod text;

use crate::error::Result;
use crate::id3::v2::header::Id3v2Version;
use crate::util::text::TextEncoding;
use header::FrameId;

use std::fmt::{Display, Formatter};

/// The number of data bytes shown by the [`Display`] implementation of [`Frame`]
const DISPLAY_DATA_LIMIT: usize = 128;

/// Represents an `ID3v2` frame
///
/// A frame is the raw content of one frame from a tag. The data has already had any
/// unsynchronisation removed, but is otherwise untouched.
///
/// Frames are copied out of the tag they were read from, and do not borrow from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
	id: FrameId,
	version: Id3v2Version,
	flags: FrameFlags,
	data: Vec<u8>,
}

impl Frame {
	/// Create a new frame
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{Frame, FrameFlags, FrameId, Id3v2Version};
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let frame = Frame::new(
	/// 	FrameId::TIT2,
	/// 	Id3v2Version::V4,
	/// 	FrameFlags::default(),
	/// 	b"\x03Foo title".to_vec(),
	/// );
	///
	/// assert_eq!(frame.text()?, "Foo title");
	/// # Ok(()) }
	/// ```
	pub fn new(id: FrameId, version: Id3v2Version, flags: FrameFlags, data: Vec<u8>) -> Self {
		Self {
			id,
			version,
			flags,
			data,
		}
	}

	/// Get the ID of the frame
	pub fn id(&self) -> FrameId {
		self.id
	}

	/// The version of the tag the frame was read from
	pub fn version(&self) -> Id3v2Version {
		self.version
	}

	/// Get the flags for the frame
	pub fn flags(&self) -> FrameFlags {
		self.flags
	}

	/// The frame content
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Consume the frame, returning its content
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}

	/// The [`TextEncoding`] named by the first byte of the content
	///
	/// This is only meaningful for text frames. Returns `None` if the frame is empty, or the
	/// first byte isn't a known encoding.
	pub fn text_encoding(&self) -> Option<TextEncoding> {
		self.data.first().copied().and_then(TextEncoding::from_u8)
	}

	/// Interpret the frame content as a text string
	///
	/// The first byte selects the [`TextEncoding`] of the rest of the content. A single
	/// trailing null terminator is removed, if present. Invalid UTF-8 and unpaired UTF-16
	/// surrogates are replaced with `U+FFFD`.
	///
	/// This doesn't check the frame ID, it is up to the caller to only call this on frames
	/// that hold text.
	///
	/// # Errors
	///
	/// * The frame is empty
	/// * Any of the [encoding flags](FrameFlags::ENCODING_FLAGS) are set
	/// * The encoding byte is unknown
	/// * A UTF-16 string has a missing or invalid BOM
	/// * UTF-16 content has an odd number of bytes
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{Frame, FrameFlags, FrameId, Id3v2Version};
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// // UTF-16 with a little endian BOM, null terminated
	/// let data = vec![0x01, 0xFF, 0xFE, b'A', 0x00, b'B', 0x00, 0x00, 0x00];
	/// let frame = Frame::new(FrameId::TPE1, Id3v2Version::V3, FrameFlags::default(), data);
	///
	/// assert_eq!(frame.text()?, "AB");
	/// # Ok(()) }
	/// ```
	pub fn text(&self) -> Result<String> {
		text::decode_text(self.flags, &self.data)
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let version = match self.version {
			Id3v2Version::V3 => "v2.3",
			Id3v2Version::V4 => "v2.4",
		};

		let (data, terminus) = match self.data.get(..DISPLAY_DATA_LIMIT) {
			Some(data) if self.data.len() > DISPLAY_DATA_LIMIT => (data, "..."),
			_ => (&self.data[..], ""),
		};

		write!(
			f,
			"Frame {{ id: {}, version: {}, flags: {:#06x}, data: {}:\"{}\"{} }}",
			self.id,
			version,
			self.flags.bits(),
			self.data.len(),
			data.escape_ascii(),
			terminus
		)?;

		if let Some(description) = self.id.description() {
			write!(f, " ({description})")?;
		}

		Ok(())
	}
}

/// The flags of a frame header
///
/// These are stored as they were read, only a frame level unsynchronisation flag is ever
/// cleared (see [`FrameFlags::V24_UNSYNCHRONISATION`]). The meaning of each bit depends on
/// the tag version, so there is a set of constants for each version, and accessors that
/// take the [`Id3v2Version`] into account.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameFlags(u16);

impl FrameFlags {
	/// ID3v2.4: Discard the frame if the tag is altered
	pub const V24_TAG_ALTER_PRESERVATION: Self = Self(0x4000);
	/// ID3v2.4: Discard the frame if the file is altered
	pub const V24_FILE_ALTER_PRESERVATION: Self = Self(0x2000);
	/// ID3v2.4: The frame is meant to be read only
	pub const V24_READ_ONLY: Self = Self(0x1000);
	/// ID3v2.4: A group identifier byte precedes the content
	pub const V24_GROUPING_IDENTITY: Self = Self(0x0040);
	/// ID3v2.4: The content is zlib compressed
	pub const V24_COMPRESSION: Self = Self(0x0008);
	/// ID3v2.4: The content is encrypted
	pub const V24_ENCRYPTION: Self = Self(0x0004);
	/// ID3v2.4: The frame is unsynchronised
	///
	/// Unsynchronisation makes all `0xFF 0bXXX` (`X` >= `0xE0`) combinations into `0xFF 0x00 0bXXX`,
	/// and `0xFF 0x00` into `0xFF 0x00 0x00`, to avoid confusion with the MPEG frame sync. It can be
	/// applied to the entire tag through [`Id3v2TagFlags::unsynchronisation`](crate::id3::v2::Id3v2TagFlags::unsynchronisation),
	/// or, in ID3v2.4 only, to individual frames.
	///
	/// Read frames never have this flag set, as unsynchronisation is removed while reading.
	pub const V24_UNSYNCHRONISATION: Self = Self(0x0002);
	/// ID3v2.4: A data length indicator precedes the content
	pub const V24_DATA_LENGTH_INDICATOR: Self = Self(0x0001);

	/// ID3v2.3: Discard the frame if the tag is altered
	pub const V23_TAG_ALTER_PRESERVATION: Self = Self(0x8000);
	/// ID3v2.3: Discard the frame if the file is altered
	pub const V23_FILE_ALTER_PRESERVATION: Self = Self(0x4000);
	/// ID3v2.3: The frame is meant to be read only
	pub const V23_READ_ONLY: Self = Self(0x2000);
	/// ID3v2.3: The content is zlib compressed
	pub const V23_COMPRESSION: Self = Self(0x0080);
	/// ID3v2.3: The content is encrypted
	pub const V23_ENCRYPTION: Self = Self(0x0040);
	/// ID3v2.3: A group identifier byte precedes the content
	pub const V23_GROUPING_IDENTITY: Self = Self(0x0020);

	/// The flags that change how the content is stored
	///
	/// If any of these are set, the content can't be interpreted as-is.
	pub const ENCODING_FLAGS: Self = Self(0x00FF);

	/// Create flags from their raw representation
	pub const fn from_bits(bits: u16) -> Self {
		Self(bits)
	}

	/// Get the raw representation of the flags
	pub const fn bits(self) -> u16 {
		self.0
	}

	/// Whether all of the bits in `other` are set
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	/// Clear all of the bits in `other`
	pub fn remove(&mut self, other: Self) {
		self.0 &= !other.0;
	}

	/// The bits that fall within [`FrameFlags::ENCODING_FLAGS`]
	pub const fn encoding_flags(self) -> Self {
		Self(self.0 & Self::ENCODING_FLAGS.0)
	}

	fn versioned(self, version: Id3v2Version, v3: Self, v4: Self) -> bool {
		match version {
			Id3v2Version::V3 => self.contains(v3),
			Id3v2Version::V4 => self.contains(v4),
		}
	}

	/// Whether the frame should be discarded if the tag is altered
	pub fn tag_alter_preservation(self, version: Id3v2Version) -> bool {
		self.versioned(
			version,
			Self::V23_TAG_ALTER_PRESERVATION,
			Self::V24_TAG_ALTER_PRESERVATION,
		)
	}

	/// Whether the frame should be discarded if the file is altered
	pub fn file_alter_preservation(self, version: Id3v2Version) -> bool {
		self.versioned(
			version,
			Self::V23_FILE_ALTER_PRESERVATION,
			Self::V24_FILE_ALTER_PRESERVATION,
		)
	}

	/// Whether the frame is meant to be read only
	pub fn read_only(self, version: Id3v2Version) -> bool {
		self.versioned(version, Self::V23_READ_ONLY, Self::V24_READ_ONLY)
	}

	/// Whether the content starts with a group identifier
	pub fn grouping_identity(self, version: Id3v2Version) -> bool {
		self.versioned(
			version,
			Self::V23_GROUPING_IDENTITY,
			Self::V24_GROUPING_IDENTITY,
		)
	}

	/// Whether the content is compressed
	pub fn compression(self, version: Id3v2Version) -> bool {
		self.versioned(version, Self::V23_COMPRESSION, Self::V24_COMPRESSION)
	}

	/// Whether the content is encrypted
	pub fn encryption(self, version: Id3v2Version) -> bool {
		self.versioned(version, Self::V23_ENCRYPTION, Self::V24_ENCRYPTION)
	}

	/// Whether the frame is unsynchronised (ID3v2.4 only)
	pub fn unsynchronisation(self, version: Id3v2Version) -> bool {
		version == Id3v2Version::V4 && self.contains(Self::V24_UNSYNCHRONISATION)
	}

	/// Whether the content starts with a data length indicator (ID3v2.4 only)
	pub fn data_length_indicator(self, version: Id3v2Version) -> bool {
		version == Id3v2Version::V4 && self.contains(Self::V24_DATA_LENGTH_INDICATOR)
	}
}
