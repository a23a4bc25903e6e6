//! Example: read ID3v2 frames from a file.

use id3scan::id3::v2::{Frame, FrameId};
use std::fs::File;
use std::path::Path;

fn main() {
	let path_str = std::env::args().nth(1).expect("ERROR: No path specified!");
	let path = Path::new(&path_str);

	if !path.is_file() {
		panic!("ERROR: Path is not a file!");
	}

	let file = File::open(path).expect("ERROR: Bad path provided!");
	let frames = id3scan::scan(file).expect("ERROR: Failed to read file!");

	if frames.is_empty() {
		println!("No ID3v2 tags found");
		return;
	}

	println!("--- Frames ---");
	for frame in &frames {
		println!("{frame}");
	}

	println!("--- Tag Information ---");
	for (name, id) in [
		("Title", FrameId::TIT2),
		("Artist", FrameId::TPE1),
		("Album", FrameId::TALB),
	] {
		// A text decoding error only affects this frame
		let text = match frames.lookup(id).map(Frame::text) {
			Some(Ok(text)) => text,
			Some(Err(e)) => format!("<{e}>"),
			None => String::from("None"),
		};

		println!("{name}: {text}");
	}
}
