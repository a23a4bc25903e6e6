use crate::util::{FLAG_UNSYNCHRONISATION, V3, V4, frame, tag, unsynchronise};

use id3scan::id3::v2::{FrameFlags, FrameId};

// A frame whose content needs unsynchronisation
const CONTENT: &[u8] = b"\x00\xFF\xE0\xFF\x00Foo";

#[test_log::test]
fn tag_unsynchronisation() {
	// The frame size describes the unsynchronised data
	let stuffed = unsynchronise(CONTENT);
	assert_ne!(stuffed.len(), CONTENT.len());

	for version in [V3, V4] {
		let body = frame(version, b"PRIV", 0, &stuffed);

		let frames = id3scan::scan(&tag(version, FLAG_UNSYNCHRONISATION, &body)[..]).unwrap();
		let frame = frames.lookup(FrameId::PRIV).unwrap();
		assert_eq!(frame.data(), CONTENT);
		assert_eq!(frame.flags(), FrameFlags::default());
	}
}

#[test_log::test]
fn no_unsynchronisation() {
	let stuffed = unsynchronise(CONTENT);
	let frames = id3scan::scan(&tag(V4, 0, &frame(V4, b"PRIV", 0, &stuffed))[..]).unwrap();
	assert_eq!(frames.lookup(FrameId::PRIV).unwrap().data(), &stuffed[..]);
}

#[test_log::test]
fn frame_unsynchronisation() {
	let stuffed = unsynchronise(CONTENT);
	let mut body = frame(V4, b"PRIV", FrameFlags::V24_UNSYNCHRONISATION.bits(), &stuffed);
	body.extend(frame(V4, b"TIT2", 0, b"\x03\xFF\x00"));

	let frames = id3scan::scan(&tag(V4, 0, &body)[..]).unwrap();

	let private = frames.lookup(FrameId::PRIV).unwrap();
	assert_eq!(private.data(), CONTENT);
	// The flag no longer applies to the decoded data
	assert!(!private.flags().contains(FrameFlags::V24_UNSYNCHRONISATION));

	// Only the flagged frame is touched
	assert_eq!(frames.lookup(FrameId::TIT2).unwrap().data(), b"\x03\xFF\x00");
}

#[test_log::test]
fn frame_unsynchronisation_flag_is_v24_only() {
	// In ID3v2.3, 0x0002 is an unassigned bit
	let stuffed = unsynchronise(CONTENT);
	let body = frame(V3, b"PRIV", 0x0002, &stuffed);

	let frames = id3scan::scan(&tag(V3, 0, &body)[..]).unwrap();
	let frame = frames.lookup(FrameId::PRIV).unwrap();
	assert_eq!(frame.data(), &stuffed[..]);
	assert_eq!(frame.flags().bits(), 0x0002);
}
