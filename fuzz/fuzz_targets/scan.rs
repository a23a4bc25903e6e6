#![no_main]

use std::io::Cursor;

use id3scan::config::ScanOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let options = ScanOptions::new().max_buffer_size(64 * 1024).read_chunk_size(7);
	if let Ok(frames) = id3scan::scan_with_options(Cursor::new(data), options) {
		for frame in &frames {
			let _ = frame.text();
		}
	}
});
