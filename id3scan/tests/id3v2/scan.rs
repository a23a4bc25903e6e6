use crate::util::{
	FLAG_EXTENDED_HEADER, FLAG_FOOTER, V3, V4, audio, frame, tag, text_frame,
};

use id3scan::config::ScanOptions;
use id3scan::error::{ErrorKind, Id3v2ErrorKind};
use id3scan::id3::v2::{Frame, FrameFlags, FrameId, Id3v2Version};

use std::io::{Seek as _, Write as _};

fn id3v2_kind(data: &[u8]) -> Id3v2ErrorKind {
	let err = id3scan::scan(data).unwrap_err();
	err.id3v2_kind().cloned().unwrap_or_else(|| panic!("Expected an ID3v2 error, got {err:?}"))
}

#[test_log::test]
fn no_tags() {
	assert!(id3scan::scan(&b""[..]).unwrap().is_empty());
	assert!(id3scan::scan(&audio(100_000)[..]).unwrap().is_empty());

	// Almost a signature at the very end
	let mut data = audio(100);
	data.extend_from_slice(b"ID");
	assert!(id3scan::scan(&data[..]).unwrap().is_empty());
}

#[test_log::test]
fn single_tag() {
	let mut body = text_frame(V4, b"TIT2", "Title");
	body.extend(text_frame(V4, b"TPE1", "Artist"));
	body.extend_from_slice(&[0; 100]);

	let mut data = tag(V4, 0, &body);
	data.extend(audio(5000));

	let frames = id3scan::scan(&data[..]).unwrap();
	assert_eq!(frames.len(), 2);

	let title = frames.lookup(FrameId::TIT2).unwrap();
	assert_eq!(title.text().unwrap(), "Title");
	assert_eq!(title.version(), Id3v2Version::V4);
	assert_eq!(title.flags(), FrameFlags::default());
	assert_eq!(title.data(), b"\x03Title");

	assert_eq!(
		frames.lookup(FrameId::TPE1).unwrap().text().unwrap(),
		"Artist"
	);
}

#[test_log::test]
fn later_tags_take_precedence() {
	let mut data = audio(300);
	data.extend(tag(V3, 0, &text_frame(V3, b"TIT2", "First")));
	data.extend(audio(3000));
	data.extend(tag(V4, 0, &text_frame(V4, b"TALB", "Album")));
	data.extend(audio(10));
	data.extend(tag(V4, 0, &text_frame(V4, b"TIT2", "Second")));

	let frames = id3scan::scan(&data[..]).unwrap();
	let ids = frames.iter().map(Frame::id).collect::<Vec<_>>();
	assert_eq!(ids, [FrameId::TIT2, FrameId::TALB, FrameId::TIT2]);

	let title = frames.lookup(FrameId::TIT2).unwrap();
	assert_eq!(title.text().unwrap(), "Second");
	assert_eq!(title.version(), Id3v2Version::V4);
}

#[test_log::test]
fn false_signatures_are_skipped() {
	let mut data = audio(50);
	// Version 0xFF
	data.extend_from_slice(b"ID3\xFF\x00\x00\x00\x00\x00\x00");
	// Not a synchsafe size
	data.extend_from_slice(b"ID3\x04\x00\x00\x00\x00\x00\xFF");
	// Unknown flag
	data.extend_from_slice(b"ID3\x04\x00\x01\x00\x00\x00\x00");
	// Just the signature, directly followed by a real tag
	data.extend_from_slice(b"ID3");
	data.extend(tag(V4, 0, &text_frame(V4, b"TIT2", "Real")));

	let frames = id3scan::scan(&data[..]).unwrap();
	assert_eq!(frames.len(), 1);
	assert_eq!(frames.lookup(FrameId::TIT2).unwrap().text().unwrap(), "Real");
}

#[test_log::test]
fn unsupported_versions_are_skipped() {
	// The bodies are garbage, but the tags are never parsed
	let mut data = tag(2, 0, &[0xFF; 20]);
	data.extend(tag(5, 0, &[0xFF; 20]));
	data.extend(tag(V3, 0, &text_frame(V3, b"TCON", "Rock")));

	let frames = id3scan::scan(&data[..]).unwrap();
	assert_eq!(frames.len(), 1);
	assert_eq!(frames.lookup(FrameId::TCON).unwrap().text().unwrap(), "Rock");
}

#[test_log::test]
fn v23_frame_sizes_are_big_endian() {
	// 0xC8 isn't a valid synchsafe byte
	let data = [b'a'; 0xC8];
	let frames = id3scan::scan(&tag(V3, 0, &frame(V3, b"PRIV", 0, &data))[..]).unwrap();
	assert_eq!(frames.lookup(FrameId::PRIV).unwrap().data(), &data[..]);

	let err = id3v2_kind(&tag(V4, 0, &frame(V3, b"PRIV", 0, &data)));
	assert_eq!(err, Id3v2ErrorKind::BadFrameSize);
}

#[test_log::test]
fn outdated_frame_ids() {
	let frames = id3scan::scan(&tag(V3, 0, &text_frame(V3, b"TT2\0", "Old"))[..]).unwrap();

	let frame = frames.iter().next().unwrap();
	assert!(frame.id().is_outdated());
	assert_eq!(frame.id().as_str(), "TT2");
	assert_eq!(frame.text().unwrap(), "Old");
}

#[test_log::test]
fn padding() {
	let mut body = text_frame(V4, b"TIT2", "Title");
	body.extend_from_slice(&[0; 1024]);
	assert_eq!(id3scan::scan(&tag(V4, 0, &body)[..]).unwrap().len(), 1);

	// A tag that is nothing but padding
	assert!(id3scan::scan(&tag(V4, 0, &[0; 64])[..]).unwrap().is_empty());

	let mut body = text_frame(V4, b"TIT2", "Title");
	body.extend_from_slice(&[0; 1024]);
	body[600] = 1;
	assert_eq!(id3v2_kind(&tag(V4, 0, &body)), Id3v2ErrorKind::InvalidPadding);
}

#[test_log::test]
fn errors_discard_every_frame() {
	// A valid tag, followed by one with bad padding
	let mut data = tag(V4, 0, &text_frame(V4, b"TIT2", "Title"));

	let mut body = text_frame(V4, b"TPE1", "Artist");
	body.extend_from_slice(b"\x00\x00\x01");
	data.extend(tag(V4, 0, &body));

	assert_eq!(id3v2_kind(&data), Id3v2ErrorKind::InvalidPadding);
}

#[test_log::test]
fn footer() {
	let frames = id3scan::scan(&tag(V4, FLAG_FOOTER, &text_frame(V4, b"TIT2", "Title"))[..]).unwrap();
	assert_eq!(frames.len(), 1);

	let mut body = text_frame(V4, b"TIT2", "Title");
	body.extend_from_slice(&[0; 16]);
	assert_eq!(
		id3v2_kind(&tag(V4, FLAG_FOOTER, &body)),
		Id3v2ErrorKind::PaddingWithFooter
	);

	let mut data = tag(V4, FLAG_FOOTER, &text_frame(V4, b"TIT2", "Title"));
	let len = data.len();
	data[len - 1] ^= 1;
	assert_eq!(id3v2_kind(&data), Id3v2ErrorKind::InvalidFooter);
}

#[test_log::test]
fn extended_header() {
	// ID3v2.4, the size includes itself
	let mut body = b"\x00\x00\x00\x06\x01\x00".to_vec();
	body.extend(text_frame(V4, b"TIT2", "Title"));
	let frames = id3scan::scan(&tag(V4, FLAG_EXTENDED_HEADER, &body)[..]).unwrap();
	assert_eq!(frames.lookup(FrameId::TIT2).unwrap().text().unwrap(), "Title");

	// ID3v2.3, the size doesn't include itself
	let mut body = b"\x00\x00\x00\x06\x00\x00\x00\x00\x00\x00".to_vec();
	body.extend(text_frame(V3, b"TIT2", "Title"));
	let frames = id3scan::scan(&tag(V3, FLAG_EXTENDED_HEADER, &body)[..]).unwrap();
	assert_eq!(frames.lookup(FrameId::TIT2).unwrap().text().unwrap(), "Title");

	// Larger than the tag
	let body = b"\x00\x00\x01\x00\x00\x00";
	assert_eq!(
		id3v2_kind(&tag(V4, FLAG_EXTENDED_HEADER, body)),
		Id3v2ErrorKind::BadExtendedHeaderSize
	);

	// Too small to hold its own size
	assert_eq!(
		id3v2_kind(&tag(V3, FLAG_EXTENDED_HEADER, b"\x00\x00")),
		Id3v2ErrorKind::BadExtendedHeaderSize
	);
}

#[test_log::test]
fn bad_frames() {
	let body = frame(V4, b"TI-2", 0, b"\x03Title");
	assert_eq!(
		id3v2_kind(&tag(V4, 0, &body)),
		Id3v2ErrorKind::BadFrameId(*b"TI-2")
	);

	let mut body = frame(V4, b"TIT2", 0, b"\x03Title");
	body[7] = 0x7F;
	assert_eq!(
		id3v2_kind(&tag(V4, 0, &body)),
		Id3v2ErrorKind::FrameSizeExceedsTag
	);
}

#[test_log::test]
fn truncated_streams() {
	let data = tag(V4, 0, &text_frame(V4, b"TIT2", "Title"));

	for len in [3, 9, 10, data.len() - 1] {
		let err = id3scan::scan(&data[..len]).unwrap_err();
		assert!(
			matches!(err.kind(), ErrorKind::UnexpectedEof),
			"length {len} produced {err:?}"
		);
	}
}

#[test_log::test]
fn buffer_limit() {
	let mut body = text_frame(V4, b"TIT2", "Title");
	body.extend_from_slice(&[0; 4096]);
	let data = tag(V4, 0, &body);

	let options = ScanOptions::new().max_buffer_size(1024);
	let err = id3scan::scan_with_options(&data[..], options).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	// The limit doesn't apply to data outside of tags
	let mut data = audio(64 * 1024);
	data.extend(tag(V4, 0, &text_frame(V4, b"TIT2", "Title")));
	let frames = id3scan::scan_with_options(&data[..], options).unwrap();
	assert_eq!(frames.len(), 1);
}

#[test_log::test]
fn text_errors_are_scoped_to_the_frame() {
	let mut body = frame(V4, b"TIT2", 0, b"\x02\x00\x41\x00");
	body.extend(text_frame(V4, b"TPE1", "Artist"));

	let frames = id3scan::scan(&tag(V4, 0, &body)[..]).unwrap();
	let err = frames.lookup(FrameId::TIT2).unwrap().text().unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));
	assert_eq!(
		frames.lookup(FrameId::TPE1).unwrap().text().unwrap(),
		"Artist"
	);
}

#[test_log::test]
fn read_from_file() {
	let mut data = audio(4096);
	data.extend(tag(V3, 0, &text_frame(V3, b"TIT2", "Title")));
	data.extend(audio(100_000));

	let mut file = tempfile::tempfile().unwrap();
	file.write_all(&data).unwrap();
	file.rewind().unwrap();

	let frames = id3scan::scan(file).unwrap();
	assert_eq!(frames.lookup(FrameId::TIT2).unwrap().text().unwrap(), "Title");
}
