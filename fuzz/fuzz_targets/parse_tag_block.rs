#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let _ = id3scan::id3::v2::parse_tag_block(data);
});
