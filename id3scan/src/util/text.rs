/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}
}

/// Maps each byte to the code point of the same value
///
/// A single trailing NUL is dropped.
pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| char::from(*c)).collect::<String>();
	if text.ends_with('\0') {
		text.pop();
	}

	text
}

/// Decodes UTF-8, replacing invalid sequences with U+FFFD
///
/// A single trailing NUL byte is dropped.
pub(crate) fn utf8_decode(bytes: &[u8]) -> String {
	let bytes = match bytes {
		[rest @ .., 0] => rest,
		_ => bytes,
	};

	String::from_utf8_lossy(bytes).into_owned()
}

/// Decodes UTF-16 code units, replacing unpaired surrogates with U+FFFD
///
/// `bytes` must have an even length. A single trailing `0x0000` unit is dropped.
pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> String {
	let mut units = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect::<Vec<u16>>();

	if units.last() == Some(&0) {
		units.pop();
	}

	String::from_utf16_lossy(&units)
}
