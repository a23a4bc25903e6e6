use crate::error::Result;
use crate::id3::v2::util::synchsafe::decode_synchsafe;
use crate::macros::id3v2_err;

use byteorder::{BigEndian, ByteOrder};

/// The size of a tag header, and of a tag footer
pub(crate) const HEADER_SIZE: usize = 10;

/// The ID3v2 version
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Id3v2Version {
	/// ID3v2.3
	V3,
	/// ID3v2.4
	V4,
}

impl Id3v2Version {
	/// Get the version from the major revision byte of a tag header
	///
	/// Only versions 3 and 4 are supported.
	pub fn from_major(major: u8) -> Option<Self> {
		match major {
			3 => Some(Self::V3),
			4 => Some(Self::V4),
			_ => None,
		}
	}

	/// The major revision byte for this version
	pub fn major(self) -> u8 {
		match self {
			Self::V3 => 3,
			Self::V4 => 4,
		}
	}

	/// How frame and extended header sizes are stored in this version
	pub fn size_encoding(self) -> SizeEncoding {
		match self {
			Self::V3 => SizeEncoding::BigEndian,
			Self::V4 => SizeEncoding::Synchsafe,
		}
	}
}

/// How a 4 byte size field is encoded
///
/// This is selected once per tag via [`Id3v2Version::size_encoding`].
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SizeEncoding {
	/// A plain big endian `u32` (ID3v2.3)
	BigEndian,
	/// A 28 bit synchsafe integer (ID3v2.4)
	Synchsafe,
}

impl SizeEncoding {
	/// Decode a size from the first 4 bytes of `bytes`
	///
	/// Returns `None` if the value is not a valid synchsafe integer, or if fewer than 4
	/// bytes are available.
	pub fn read(self, bytes: &[u8]) -> Option<u32> {
		let size: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
		match self {
			Self::BigEndian => Some(BigEndian::read_u32(&size)),
			Self::Synchsafe => decode_synchsafe(size),
		}
	}
}

/// Flags that apply to the entire tag
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Id3v2TagFlags {
	/// Whether or not all frames are unsynchronised
	///
	/// See [`FrameFlags::V24_UNSYNCHRONISATION`](crate::id3::v2::FrameFlags::V24_UNSYNCHRONISATION).
	pub unsynchronisation: bool,
	/// Whether an extended header follows the tag header
	pub extended_header: bool,
	/// Indicates if the tag is in an experimental stage
	pub experimental: bool,
	/// Indicates that the tag includes a footer
	pub footer: bool,
}

impl Id3v2TagFlags {
	const UNSYNCHRONISATION: u8 = 0x80;
	const EXTENDED_HEADER: u8 = 0x40;
	const EXPERIMENTAL: u8 = 0x20;
	const FOOTER: u8 = 0x10;

	const KNOWN_FLAGS: u8 =
		Self::UNSYNCHRONISATION | Self::EXTENDED_HEADER | Self::EXPERIMENTAL | Self::FOOTER;

	/// Parse the flags byte of a tag header
	///
	/// Returns `None` if any undefined flag is set, as the tag may not be readable
	/// without knowing what that flag means.
	pub fn from_byte(byte: u8) -> Option<Self> {
		if byte & !Self::KNOWN_FLAGS != 0 {
			return None;
		}

		Some(Self {
			unsynchronisation: byte & Self::UNSYNCHRONISATION == Self::UNSYNCHRONISATION,
			extended_header: byte & Self::EXTENDED_HEADER == Self::EXTENDED_HEADER,
			experimental: byte & Self::EXPERIMENTAL == Self::EXPERIMENTAL,
			footer: byte & Self::FOOTER == Self::FOOTER,
		})
	}

	/// Get the byte representation of the flags
	pub fn as_byte(&self) -> u8 {
		let mut byte = 0;

		if self.unsynchronisation {
			byte |= Self::UNSYNCHRONISATION;
		}

		if self.extended_header {
			byte |= Self::EXTENDED_HEADER;
		}

		if self.experimental {
			byte |= Self::EXPERIMENTAL;
		}

		if self.footer {
			byte |= Self::FOOTER;
		}

		byte
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Id3v2Header {
	pub version: Id3v2Version,
	pub flags: Id3v2TagFlags,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER/FOOTER**)
	pub size: u32,
}

impl Id3v2Header {
	/// Check a candidate header
	///
	/// An ID3v2 tag can be detected with the pattern `$49 44 33 yy yy xx zz zz zz zz`, where `yy`
	/// is less than `$FF`, `xx` is the flags byte, and `zz` is less than `$80`. Anything that
	/// doesn't match, or that describes an unsupported version or unknown flags, is not a tag we
	/// can read and results in `None`.
	pub(crate) fn parse(header: &[u8; HEADER_SIZE]) -> Option<Self> {
		if &header[..3] != b"ID3" {
			return None;
		}

		let size = decode_synchsafe([header[6], header[7], header[8], header[9]]);
		let (Some(size), false, false) = (size, header[3] == 0xFF, header[4] == 0xFF) else {
			log::trace!("Skipping \"ID3\" signature followed by an invalid header");
			return None;
		};

		// Versions above 4 are to be ignored entirely, and 2 and below aren't supported
		let Some(version) = Id3v2Version::from_major(header[3]) else {
			log::debug!(
				"Skipping tag with unsupported version: v2.{}.{}",
				header[3],
				header[4]
			);
			return None;
		};

		let Some(flags) = Id3v2TagFlags::from_byte(header[5]) else {
			log::debug!("Skipping tag with unknown flags: {:#010b}", header[5]);
			return None;
		};

		Some(Self {
			version,
			flags,
			size,
		})
	}

	/// The total size of the tag, including the header and footer
	pub(crate) fn full_tag_size(&self) -> usize {
		let footer_size = if self.flags.footer { HEADER_SIZE } else { 0 };
		HEADER_SIZE + self.size as usize + footer_size
	}
}

/// Verify and remove the footer from the tag body
///
/// The footer must be `"3DI"`, followed by the same version, flags, and size as the header.
pub(crate) fn strip_footer<'a>(header: &[u8; HEADER_SIZE], body: &'a [u8]) -> Result<&'a [u8]> {
	let Some(footer_start) = body.len().checked_sub(HEADER_SIZE) else {
		id3v2_err!(InvalidFooter);
	};

	let (body, footer) = body.split_at(footer_start);
	if &footer[..3] != b"3DI" || footer[3..] != header[3..] {
		id3v2_err!(InvalidFooter);
	}

	Ok(body)
}

/// Skip over the extended header at the start of the tag body
///
/// ID3v2.4 stores the size of the entire extended header as a synchsafe integer. ID3v2.3 stores
/// it as a big endian integer that doesn't include the 4 bytes of the size itself.
///
/// The contents of the extended header are not interpreted.
pub(crate) fn skip_extended_header(version: Id3v2Version, body: &[u8]) -> Result<&[u8]> {
	let size = match version {
		Id3v2Version::V4 => version.size_encoding().read(body),
		Id3v2Version::V3 => version
			.size_encoding()
			.read(body)
			.and_then(|size| size.checked_add(4)),
	};

	match size {
		Some(size) if size as usize <= body.len() => {
			log::trace!("Skipping extended header, size: {}", size);
			Ok(&body[size as usize..])
		},
		_ => id3v2_err!(BadExtendedHeaderSize),
	}
}
