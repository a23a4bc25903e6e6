//! Contains the errors that can arise within id3scan
//!
//! The primary error is [`Id3ScanError`]. The type of error is determined by [`ErrorKind`].
//!
//! Errors fall into two scopes:
//!
//! * Errors returned by [`scan`](crate::scan) abort the entire scan. No frames are returned.
//! * [`ErrorKind::TextDecode`] is only ever returned by [`Frame::text`](crate::id3::v2::Frame::text),
//!   and leaves every other frame usable.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3ScanError>`
pub type Result<T> = std::result::Result<T, Id3ScanError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Stream related errors
	/// A tag block needed more bytes than the scan buffer is allowed to hold
	///
	/// See [`ScanOptions::max_buffer_size()`](crate::config::ScanOptions::max_buffer_size()).
	TooMuchData,
	/// The stream ended in the middle of something that looked like a tag
	UnexpectedEof,
	/// A tag block was handed to [`parse_tag_block`](crate::id3::v2::parse_tag_block), but
	/// its header doesn't describe a supported tag
	FakeTag,
	/// A tag block's length doesn't match the size declared in its header
	SizeMismatch,

	// Tag related errors
	/// Errors that arise while decoding the structure of an ID3v2 tag
	Id3v2(Id3v2Error),
	/// Errors that arise while decoding the text content of a frame
	TextDecode(&'static str),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// The types of errors that can occur while decoding the structure of an ID3v2 tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Id3v2ErrorKind {
	// Header
	/// The footer doesn't mirror the tag header
	InvalidFooter,
	/// The extended header has an invalid size, or is larger than the remaining tag
	BadExtendedHeaderSize,

	// Frame
	/// A frame ID contains invalid characters (must be within `'A'..='Z'` or `'0'..='9'`)
	BadFrameId([u8; 4]),
	/// An ID3v2.4 frame size is not a valid synchsafe integer
	BadFrameSize,
	/// A frame claims to be larger than the remainder of the tag
	FrameSizeExceedsTag,

	// Padding
	/// The tag has both a footer and padding, which are mutually exclusive
	PaddingWithFooter,
	/// The padding contains a non-zero byte
	InvalidPadding,
}

impl Display for Id3v2ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			// Header
			Self::InvalidFooter => write!(f, "Found a footer that doesn't match the header"),
			Self::BadExtendedHeaderSize => {
				write!(f, "Found an extended header with an invalid size")
			},

			// Frame
			Self::BadFrameId(frame_id) => write!(f, "Failed to parse a frame ID: 0x{frame_id:x?}"),
			Self::BadFrameSize => write!(f, "Found a frame with an invalid synchsafe size"),
			Self::FrameSizeExceedsTag => write!(f, "Frame size exceeds the length of the tag"),

			// Padding
			Self::PaddingWithFooter => write!(f, "Found padding in a tag with a footer"),
			Self::InvalidPadding => write!(f, "Found non-zero bytes in the tag padding"),
		}
	}
}

/// An error that arises while decoding an ID3v2 tag
pub struct Id3v2Error {
	kind: Id3v2ErrorKind,
}

impl Id3v2Error {
	/// Create a new `Id3v2Error` from an [`Id3v2ErrorKind`]
	#[must_use]
	pub const fn new(kind: Id3v2ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`Id3v2ErrorKind`]
	pub fn kind(&self) -> &Id3v2ErrorKind {
		&self.kind
	}
}

impl Debug for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {:?}", self.kind)
	}
}

impl Display for Id3v2Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "ID3v2: {}", self.kind)
	}
}

/// Errors that could occur within id3scan
pub struct Id3ScanError {
	pub(crate) kind: ErrorKind,
}

impl Id3ScanError {
	/// Create an `Id3ScanError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, Id3ScanError};
	///
	/// let truncated = Id3ScanError::new(ErrorKind::UnexpectedEof);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::error::{ErrorKind, Id3ScanError};
	///
	/// let truncated = Id3ScanError::new(ErrorKind::UnexpectedEof);
	/// if let ErrorKind::UnexpectedEof = truncated.kind() {
	/// 	println!("Where's the rest of the tag?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the [`Id3v2ErrorKind`], if this is a structural ID3v2 error
	pub fn id3v2_kind(&self) -> Option<&Id3v2ErrorKind> {
		match &self.kind {
			ErrorKind::Id3v2(err) => Some(err.kind()),
			_ => None,
		}
	}
}

impl std::error::Error for Id3ScanError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<Id3v2Error> for Id3ScanError {
	fn from(input: Id3v2Error) -> Self {
		Self {
			kind: ErrorKind::Id3v2(input),
		}
	}
}

impl From<Id3v2ErrorKind> for Id3ScanError {
	fn from(input: Id3v2ErrorKind) -> Self {
		Id3v2Error::new(input).into()
	}
}

impl From<std::io::Error> for Id3ScanError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for Id3ScanError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to buffer an abnormally large amount of data"
			),
			ErrorKind::UnexpectedEof => {
				write!(f, "Reading: Unexpected end of data inside of a tag")
			},
			ErrorKind::FakeTag => write!(f, "Reading: Expected a tag, found invalid data"),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered a tag block whose length doesn't match its header"
			),
			ErrorKind::Id3v2(ref id3v2_err) => write!(f, "{id3v2_err}"),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
		}
	}
}
