//! Reusable scratch buffers for the tag scanner

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

static SCRATCH_POOL: BufferPool = BufferPool::new(
	BufferPool::DEFAULT_MAX_POOLED,
	BufferPool::DEFAULT_BUFFER_CAPACITY,
	BufferPool::DEFAULT_MAX_RETAINED_CAPACITY,
);

/// The process-wide pool used by [`scan`](crate::scan) and [`TagLocator::new`](crate::id3::v2::TagLocator::new)
pub fn scratch_pool() -> &'static BufferPool {
	&SCRATCH_POOL
}

/// A thread-safe pool of byte buffers
///
/// Buffers are checked out with [`BufferPool::acquire`], and are returned to the pool when
/// the [`PooledBuffer`] is dropped, regardless of how the borrower exits.
///
/// # Examples
///
/// ```rust
/// use id3scan::BufferPool;
///
/// let pool = BufferPool::new(4, 1024, 64 * 1024);
///
/// {
/// 	let mut buffer = pool.acquire();
/// 	buffer.extend_from_slice(b"ID3");
/// }
///
/// // The buffer has been cleared and returned
/// assert_eq!(pool.available(), 1);
/// assert!(pool.acquire().is_empty());
/// ```
#[derive(Debug)]
pub struct BufferPool {
	buffers: Mutex<Vec<Vec<u8>>>,
	max_pooled: usize,
	buffer_capacity: usize,
	max_retained_capacity: usize,
}

impl BufferPool {
	/// Default maximum number of idle buffers kept in a pool
	pub const DEFAULT_MAX_POOLED: usize = 16;

	/// Default initial capacity of a newly created buffer
	pub const DEFAULT_BUFFER_CAPACITY: usize = 4 * 1024;

	/// Default largest capacity a returned buffer may have and still be kept
	pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 1024 * 1024;

	/// Creates a new, empty buffer pool
	///
	/// * `max_pooled` - Maximum number of idle buffers to keep
	/// * `buffer_capacity` - Initial capacity for each new buffer
	/// * `max_retained_capacity` - Buffers that grew beyond this are freed instead of returned
	pub const fn new(max_pooled: usize, buffer_capacity: usize, max_retained_capacity: usize) -> Self {
		Self {
			buffers: Mutex::new(Vec::new()),
			max_pooled,
			buffer_capacity,
			max_retained_capacity,
		}
	}

	/// Checks out a buffer, creating a new one if none are idle
	///
	/// The buffer is always empty.
	pub fn acquire(&self) -> PooledBuffer<'_> {
		let buffer = self
			.buffers
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.pop()
			.unwrap_or_else(|| Vec::with_capacity(self.buffer_capacity));

		PooledBuffer {
			pool: self,
			buffer,
		}
	}

	/// The number of idle buffers currently held
	pub fn available(&self) -> usize {
		self.buffers
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	fn release(&self, mut buffer: Vec<u8>) {
		if buffer.capacity() > self.max_retained_capacity {
			log::trace!(
				"Dropping scratch buffer with capacity {} instead of pooling it",
				buffer.capacity()
			);
			return;
		}

		buffer.clear();

		let mut buffers = self.buffers.lock().unwrap_or_else(PoisonError::into_inner);
		if buffers.len() < self.max_pooled {
			buffers.push(buffer);
		}
	}
}

impl Default for BufferPool {
	fn default() -> Self {
		Self::new(
			Self::DEFAULT_MAX_POOLED,
			Self::DEFAULT_BUFFER_CAPACITY,
			Self::DEFAULT_MAX_RETAINED_CAPACITY,
		)
	}
}

/// A buffer checked out of a [`BufferPool`]
///
/// Dereferences to the underlying `Vec<u8>`. Dropping it hands the (cleared) buffer back.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
	pool: &'a BufferPool,
	buffer: Vec<u8>,
}

impl Deref for PooledBuffer<'_> {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.buffer
	}
}

impl DerefMut for PooledBuffer<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.buffer
	}
}

impl Drop for PooledBuffer<'_> {
	fn drop(&mut self) {
		self.pool.release(std::mem::take(&mut self.buffer));
	}
}
