//! Utilities for working with synchsafe integers and unsynchronized ID3v2 content
//!
//! See [`FrameFlags::V24_UNSYNCHRONISATION`](crate::id3::v2::FrameFlags::V24_UNSYNCHRONISATION) for an explanation.

use crate::error::Result;
use crate::macros::err;

use byteorder::{BigEndian, ByteOrder};

/// Decode a 4 byte synchsafe integer
///
/// Each byte contributes its low 7 bits, giving a 28 bit value. Returns `None` if any
/// byte has its most significant bit set, as the integer is then not synchsafe.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::util::synchsafe::decode_synchsafe;
///
/// assert_eq!(decode_synchsafe([0x00, 0x00, 0x02, 0x01]), Some(257));
/// assert_eq!(decode_synchsafe([0x00, 0x00, 0x00, 0x80]), None);
/// ```
pub fn decode_synchsafe(bytes: [u8; 4]) -> Option<u32> {
	if bytes.iter().any(|b| b & 0x80 != 0) {
		return None;
	}

	Some(BigEndian::read_u32(&bytes).unsynch())
}

/// An integer that can be converted to and from its synchsafe variant
pub trait SynchsafeInteger: Sized {
	/// Create a synchsafe integer
	///
	/// # Errors
	///
	/// `self` doesn't fit in 28 bits
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// // Maximum value we can represent in a synchsafe u32
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Each byte should have 7 set bits and an MSB of 0
	/// assert_eq!(synch_number, 0b01111111_01111111_01111111_01111111_u32);
	/// # Ok(()) }
	/// ```
	fn synch(self) -> Result<Self>;

	/// Unsynchronise a synchsafe integer
	///
	/// The most significant bit of each byte is ignored.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::util::synchsafe::SynchsafeInteger;
	///
	/// # fn main() -> id3scan::error::Result<()> {
	/// let unsynch_number = 0xFFF_FFFF_u32;
	/// let synch_number = unsynch_number.synch()?;
	///
	/// // Now, our re-unsynchronized number should match our original
	/// assert_eq!(synch_number.unsynch(), unsynch_number);
	/// # Ok(()) }
	/// ```
	fn unsynch(self) -> Self;
}

impl SynchsafeInteger for u32 {
	fn synch(self) -> Result<Self> {
		// 7 bits are available per byte
		const MAXIMUM_INTEGER: u32 = 0x0FFF_FFFF;

		if self > MAXIMUM_INTEGER {
			err!(TooMuchData);
		}

		let n = self;
		Ok((n & 0x7F)
			| ((n & (0x7F << 7)) << 1)
			| ((n & (0x7F << 14)) << 2)
			| ((n & (0x7F << 21)) << 3))
	}

	fn unsynch(self) -> Self {
		let u = self;
		((u & 0x7F00_0000) >> 3) | ((u & 0x7F_0000) >> 2) | ((u & 0x7F00) >> 1) | (u & 0x7F)
	}
}

/// Reverse unsynchronisation
///
/// Every `0x00` directly following a `0xFF` is removed. All other bytes are copied as-is.
///
/// # Examples
///
/// ```rust
/// use id3scan::id3::v2::util::synchsafe::remove_unsynchronisation;
///
/// // The content has two `0xFF 0x00` pairs, which will be removed
/// let content = [0xFF, 0x00, 0x1A, 0xFF, 0x00, 0x15];
///
/// // All null bytes following `0xFF` have been removed
/// assert_eq!(remove_unsynchronisation(&content), [0xFF, 0x1A, 0xFF, 0x15]);
/// ```
pub fn remove_unsynchronisation(content: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(content.len());

	let mut encountered_ff = false;
	for &byte in content {
		if encountered_ff {
			encountered_ff = false;

			// Only skip the byte if this is valid unsynchronisation
			if byte == 0 {
				continue;
			}
		}

		out.push(byte);
		encountered_ff = byte == 0xFF;
	}

	out
}
