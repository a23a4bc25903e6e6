//! Find and decode ID3v2 tags in any stream.
//!
//! ID3v2.3 and ID3v2.4 tags are located wherever they appear in a stream (usually the start
//! of an MP3 file, but not always), validated, and split into their frames. Frame content
//! is kept as-is, apart from removing unsynchronisation, and text frames can be decoded on
//! demand.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::id3::v2::FrameId;
//! use std::fs::File;
//!
//! let file = File::open("test.mp3")?;
//! let frames = id3scan::scan(file)?;
//!
//! if let Some(title) = frames.lookup(FrameId::TIT2) {
//! 	println!("Title: {}", title.text()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feeding data as it arrives
//!
//! ```rust
//! # fn main() -> id3scan::error::Result<()> {
//! use id3scan::config::ScanOptions;
//! use id3scan::id3::v2::{Locate, TagLocator, parse_tag_block};
//!
//! # let chunks = vec![&b"ID3\x04\x00\x00\x00\x00"[..], &b"\x00\x00"[..]];
//! let mut locator = TagLocator::new(ScanOptions::new());
//! let mut chunks = chunks.into_iter();
//!
//! loop {
//! 	match locator.next_block()? {
//! 		Locate::Block(block) => {
//! 			for frame in parse_tag_block(block)? {
//! 				println!("{frame}");
//! 			}
//! 		},
//! 		Locate::NeedMore => match chunks.next() {
//! 			Some(chunk) => locator.feed(chunk)?,
//! 			None => locator.finish(),
//! 		},
//! 		Locate::Finished => break,
//! 	}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! A tag that is found but can't be decoded ends the scan, see [`error`] for details.
//! Text decoding errors only affect the frame they come from.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
mod stream;
mod util;

pub use crate::stream::{scan, scan_with_options};

pub use util::pool::{BufferPool, PooledBuffer, scratch_pool};
pub use util::text::TextEncoding;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use id3scan::prelude::*;
	//! ```

	pub use crate::id3::v2::{Frame, FrameId, Frames};
	pub use crate::{scan, scan_with_options};
}
