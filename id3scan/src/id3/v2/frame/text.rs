use super::FrameFlags;
use crate::error::Result;
use crate::macros::err;
use crate::util::text::{TextEncoding, latin1_decode, utf8_decode, utf16_decode_bytes};

pub(super) fn decode_text(flags: FrameFlags, data: &[u8]) -> Result<String> {
	let Some((&encoding, content)) = data.split_first() else {
		err!(TextDecode("Frame has no content"));
	};

	if flags.encoding_flags() != FrameFlags::default() {
		err!(TextDecode("Frame encoding flags are not supported"));
	}

	match TextEncoding::from_u8(encoding) {
		// ISO-8859-1 and UTF-8 agree on ASCII
		Some(TextEncoding::Latin1) if content.iter().all(|b| b & 0x80 == 0) => {
			Ok(utf8_decode(content))
		},
		Some(TextEncoding::Latin1) => Ok(latin1_decode(content)),
		Some(TextEncoding::UTF8) => Ok(utf8_decode(content)),
		Some(TextEncoding::UTF16) => {
			let Some((bom, content)) = content.split_first_chunk::<2>() else {
				err!(TextDecode("UTF-16 string is missing a BOM"));
			};

			match bom {
				[0xFF, 0xFE] => utf16_decode(content, u16::from_le_bytes),
				[0xFE, 0xFF] => utf16_decode(content, u16::from_be_bytes),
				_ => err!(TextDecode("UTF-16 string has an invalid BOM")),
			}
		},
		Some(TextEncoding::UTF16BE) => utf16_decode(content, u16::from_be_bytes),
		None => err!(TextDecode("Found invalid encoding")),
	}
}

fn utf16_decode(content: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if content.len() % 2 == 1 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	Ok(utf16_decode_bytes(content, endianness))
}
