#![no_main]
use id3scan::id3::v2::{Frame, FrameFlags, FrameId, Id3v2Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Some((flags, content)) = data.split_first_chunk::<2>() else {
		return;
	};

	let frame = Frame::new(
		FrameId::TIT2,
		Id3v2Version::V4,
		FrameFlags::from_bits(u16::from_be_bytes(*flags)),
		content.to_vec(),
	);
	let _ = frame.text();
});
