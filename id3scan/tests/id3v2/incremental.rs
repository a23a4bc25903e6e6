use crate::util::{FLAG_FOOTER, V3, V4, audio, tag, text_frame};

use id3scan::BufferPool;
use id3scan::config::ScanOptions;
use id3scan::id3::v2::{Frame, Frames, Locate, TagLocator, parse_tag_block};

use std::io::{Read, Result as IoResult};
use std::thread;

fn stream() -> Vec<u8> {
	let mut data = audio(37);
	data.extend(tag(V3, 0, &text_frame(V3, b"TIT2", "First")));
	data.extend_from_slice(b"ID3ID");
	data.extend(tag(V4, FLAG_FOOTER, &text_frame(V4, b"TPE1", "Artist")));
	data.extend(audio(1000));
	data.extend(tag(V4, 0, &text_frame(V4, b"TIT2", "Second")));
	data.extend_from_slice(b"ID");
	data
}

fn frame_texts(frames: &Frames) -> Vec<String> {
	frames.iter().map(|frame| frame.text().unwrap()).collect()
}

// Drain every complete block from the locator
fn drain(locator: &mut TagLocator<'_>, frames: &mut Vec<Frame>) -> bool {
	loop {
		match locator.next_block().unwrap() {
			Locate::Block(block) => frames.extend(parse_tag_block(block).unwrap()),
			Locate::NeedMore => return false,
			Locate::Finished => return true,
		}
	}
}

#[test_log::test]
fn fed_one_byte_at_a_time() {
	let data = stream();
	let expected = id3scan::scan(&data[..]).unwrap();
	assert_eq!(frame_texts(&expected), ["First", "Artist", "Second"]);

	let pool = BufferPool::default();
	let mut locator = TagLocator::with_pool(&pool, ScanOptions::new());
	let mut frames = Vec::new();

	for byte in &data {
		locator.feed(std::slice::from_ref(byte)).unwrap();
		assert!(!drain(&mut locator, &mut frames));

		// Nothing outside of a tag is held onto
		assert!(locator.buffered() <= 64);
	}

	locator.finish();
	assert!(locator.is_finished());
	assert!(drain(&mut locator, &mut frames));

	assert_eq!(frames.into_iter().collect::<Frames>(), expected);

	// The buffer went back to the pool
	drop(locator);
	assert_eq!(pool.available(), 1);
}

struct OneByteReader<'a>(&'a [u8]);

impl Read for OneByteReader<'_> {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let Some((first, rest)) = self.0.split_first() else {
			return Ok(0);
		};

		if buf.is_empty() {
			return Ok(0);
		}

		buf[0] = *first;
		self.0 = rest;
		Ok(1)
	}
}

#[test_log::test]
fn short_reads() {
	let data = stream();
	let expected = id3scan::scan(&data[..]).unwrap();

	let frames = id3scan::scan(OneByteReader(&data)).unwrap();
	assert_eq!(frames, expected);

	let options = ScanOptions::new().read_chunk_size(3);
	let frames = id3scan::scan_with_options(&data[..], options).unwrap();
	assert_eq!(frames, expected);
}

struct InterruptingReader<'a> {
	data: &'a [u8],
	interrupt: bool,
}

impl Read for InterruptingReader<'_> {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		self.interrupt = !self.interrupt;
		if self.interrupt {
			return Err(std::io::ErrorKind::Interrupted.into());
		}

		let len = buf.len().min(100);
		self.data.read(&mut buf[..len])
	}
}

#[test_log::test]
fn interrupted_reads_are_retried() {
	let data = stream();
	let expected = id3scan::scan(&data[..]).unwrap();

	let reader = InterruptingReader {
		data: &data,
		interrupt: false,
	};
	assert_eq!(id3scan::scan(reader).unwrap(), expected);
}

struct FailingReader;

impl Read for FailingReader {
	fn read(&mut self, _: &mut [u8]) -> IoResult<usize> {
		Err(std::io::ErrorKind::BrokenPipe.into())
	}
}

#[test_log::test]
fn reader_errors() {
	let err = id3scan::scan(FailingReader).unwrap_err();
	assert!(matches!(err.kind(), id3scan::error::ErrorKind::Io(_)));
}

#[test_log::test]
fn concurrent_scans() {
	let data = stream();
	let expected = id3scan::scan(&data[..]).unwrap();

	thread::scope(|s| {
		let handles = (0..8)
			.map(|i| {
				let data = &data;
				s.spawn(move || {
					let options = ScanOptions::new().read_chunk_size(i + 1);
					id3scan::scan_with_options(&data[..], options).unwrap()
				})
			})
			.collect::<Vec<_>>();

		for handle in handles {
			assert_eq!(handle.join().unwrap(), expected);
		}
	});
}

#[test_log::test]
fn buffers_return_to_the_pool_on_errors() {
	let pool = BufferPool::default();

	{
		let mut locator = TagLocator::with_pool(&pool, ScanOptions::new());
		locator.feed(&tag(V4, 0, &text_frame(V4, b"TIT2", "Title"))[..12]).unwrap();
		locator.finish();
		assert!(locator.next_block().is_err());
	}

	{
		let mut locator = TagLocator::with_pool(&pool, ScanOptions::new().max_buffer_size(16));
		let data = stream();
		let mut reader = &data[..];
		assert!(locator.fill_from(&mut reader).is_ok());
		assert!(locator.feed(&[0; 32]).is_err());
	}

	assert_eq!(pool.available(), 1);
}
