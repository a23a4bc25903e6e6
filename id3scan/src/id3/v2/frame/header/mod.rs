pub(super) mod parse;

use byteorder::{BigEndian, ByteOrder};

use std::fmt::{Debug, Display, Formatter};

/// An `ID3v2` frame ID
///
/// Every byte is within `'A'..='Z'` or `'0'..='9'`, with one exception: some software
/// writes ID3v2.2 three character IDs into ID3v2.3 tags with a trailing zero byte. These
/// are accepted, and can be detected with [`FrameId::is_outdated`].
///
/// Frame IDs are ordered byte-wise, which is the same as ordering them by [`FrameId::as_u32`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId([u8; 4]);

impl FrameId {
	/// Attempts to create a `FrameId` from its 4 bytes
	///
	/// Returns `None` if `id` contains invalid characters.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::FrameId;
	///
	/// assert_eq!(FrameId::new(*b"TIT2"), Some(FrameId::TIT2));
	/// assert!(FrameId::new(*b"TT2\0").unwrap().is_outdated());
	/// assert!(FrameId::new(*b"tit2").is_none());
	/// ```
	pub fn new(id: [u8; 4]) -> Option<Self> {
		match ParsedFrameId::parse(id) {
			ParsedFrameId::Id(id) => Some(id),
			_ => None,
		}
	}

	pub(crate) const fn from_bytes_unchecked(id: [u8; 4]) -> Self {
		Self(id)
	}

	/// Whether this is an ID3v2.2 ID that was stored with a trailing zero byte
	pub fn is_outdated(&self) -> bool {
		self.0[3] == 0
	}

	/// The raw bytes of the ID
	pub fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}

	/// Extracts the string from the ID
	///
	/// The trailing zero byte of an [outdated](FrameId::is_outdated) ID is not included.
	pub fn as_str(&self) -> &str {
		let end = if self.is_outdated() { 3 } else { 4 };

		// Validated on creation, always ASCII
		std::str::from_utf8(&self.0[..end]).unwrap_or_default()
	}

	/// The ID as a big endian integer
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::FrameId;
	///
	/// assert_eq!(FrameId::TIT2.as_u32(), 0x5449_5432);
	/// ```
	pub fn as_u32(&self) -> u32 {
		BigEndian::read_u32(&self.0)
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameId({:?})", self.as_str())
	}
}

impl TryFrom<&str> for FrameId {
	type Error = ();

	fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
		let id = match *value.as_bytes() {
			[a, b, c, d] => [a, b, c, d],
			[a, b, c] => [a, b, c, 0],
			_ => return Err(()),
		};

		Self::new(id).ok_or(())
	}
}

/// The result of reading the ID field of a frame header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParsedFrameId {
	/// A valid frame ID
	Id(FrameId),
	/// All four bytes are zero, the start of the tag padding
	Padding,
	/// Anything else
	Invalid,
}

impl ParsedFrameId {
	/// Classify the 4 ID bytes of a frame header
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{FrameId, ParsedFrameId};
	///
	/// assert_eq!(ParsedFrameId::parse(*b"TPE1"), ParsedFrameId::Id(FrameId::TPE1));
	/// assert_eq!(ParsedFrameId::parse([0; 4]), ParsedFrameId::Padding);
	/// assert_eq!(ParsedFrameId::parse(*b"TP\0\0"), ParsedFrameId::Invalid);
	/// ```
	pub fn parse(id: [u8; 4]) -> Self {
		fn valid_id_byte(b: u8) -> bool {
			b.is_ascii_uppercase() || b.is_ascii_digit()
		}

		let [a, b, c, d] = id;
		if valid_id_byte(a) && valid_id_byte(b) && valid_id_byte(c) && (valid_id_byte(d) || d == 0)
		{
			return Self::Id(FrameId(id));
		}

		if id == [0; 4] {
			return Self::Padding;
		}

		Self::Invalid
	}
}
