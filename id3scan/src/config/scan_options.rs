/// Options to control how id3scan reads a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ScanOptions {
	pub(crate) max_buffer_size: usize,
	pub(crate) read_chunk_size: usize,
}

impl Default for ScanOptions {
	/// The default implementation for `ScanOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ScanOptions {
	/// 	max_buffer_size: Self::DEFAULT_MAX_BUFFER_SIZE,
	/// 	read_chunk_size: Self::DEFAULT_READ_CHUNK_SIZE,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ScanOptions {
	/// Default ceiling for the scan buffer
	///
	/// This is large enough to hold the largest possible tag: a 10 byte header, a tag
	/// body of `0x0FFF_FFFF` bytes (the largest synchsafe integer), and a 10 byte footer.
	pub const DEFAULT_MAX_BUFFER_SIZE: usize = (1 << 28) + 20;

	/// The smallest allowed buffer, enough to hold a tag header
	pub const MIN_BUFFER_SIZE: usize = 10;

	/// Default number of bytes to request from the reader at a time
	pub const DEFAULT_READ_CHUNK_SIZE: usize = 8 * 1024;

	/// Creates a new `ScanOptions`, alias for `Default` implementation
	///
	/// See also: [`ScanOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// let scan_options = ScanOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			max_buffer_size: Self::DEFAULT_MAX_BUFFER_SIZE,
			read_chunk_size: Self::DEFAULT_READ_CHUNK_SIZE,
		}
	}

	/// The maximum number of bytes the scanner may hold at once
	///
	/// A tag block must fit in the buffer in its entirety before any of its frames are decoded.
	/// If a block needs more than this, the scan fails with [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	///
	/// Values below [`ScanOptions::MIN_BUFFER_SIZE`] are treated as [`ScanOptions::MIN_BUFFER_SIZE`].
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // I'm scanning untrusted uploads, 16 MiB of tags is plenty
	/// let scan_options = ScanOptions::new().max_buffer_size(16 * 1024 * 1024);
	/// ```
	pub fn max_buffer_size(&mut self, max_buffer_size: usize) -> Self {
		self.max_buffer_size = max_buffer_size.max(Self::MIN_BUFFER_SIZE);
		*self
	}

	/// The number of bytes to request from the reader at a time
	///
	/// A value of `0` is treated as `1`.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3scan::config::ScanOptions;
	///
	/// // My reader is a slow network stream, ask for less at a time
	/// let scan_options = ScanOptions::new().read_chunk_size(1024);
	/// ```
	pub fn read_chunk_size(&mut self, read_chunk_size: usize) -> Self {
		self.read_chunk_size = read_chunk_size.max(1);
		*self
	}
}
