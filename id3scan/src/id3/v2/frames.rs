use super::{Frame, FrameId};

/// Every frame found in a stream
///
/// Frames are kept in the order they were read, across all of the tags in the stream. Nothing
/// is deduplicated, if a stream has multiple tags, or a tag has repeated frames, every
/// frame is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frames(Vec<Frame>);

impl Frames {
	/// Create an empty collection
	pub fn new() -> Self {
		Self::default()
	}

	/// Find the last frame with the given ID
	///
	/// When a stream has multiple tags, the later tags take precedence.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::id3::v2::{Frame, FrameFlags, FrameId, Frames, Id3v2Version};
	///
	/// let frame = |id, text: &str| {
	/// 	let mut data = vec![0x03];
	/// 	data.extend_from_slice(text.as_bytes());
	/// 	Frame::new(id, Id3v2Version::V4, FrameFlags::default(), data)
	/// };
	///
	/// let frames: Frames = [
	/// 	frame(FrameId::TIT2, "Old title"),
	/// 	frame(FrameId::TPE1, "Artist"),
	/// 	frame(FrameId::TIT2, "New title"),
	/// ]
	/// .into_iter()
	/// .collect();
	///
	/// let title = frames.lookup(FrameId::TIT2).unwrap();
	/// assert_eq!(title.data(), b"\x03New title");
	///
	/// assert!(frames.lookup(FrameId::TALB).is_none());
	/// ```
	pub fn lookup(&self, id: FrameId) -> Option<&Frame> {
		self.0.iter().rev().find(|frame| frame.id() == id)
	}

	/// Returns an iterator over the frames, in the order they were read
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.0.iter()
	}

	/// The number of frames
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether there are no frames
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The frames as a slice
	pub fn as_slice(&self) -> &[Frame] {
		&self.0
	}

	pub(crate) fn extend(&mut self, frames: Vec<Frame>) {
		self.0.extend(frames);
	}
}

impl FromIterator<Frame> for Frames {
	fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Frames {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Frames {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl From<Frames> for Vec<Frame> {
	fn from(input: Frames) -> Self {
		input.0
	}
}
