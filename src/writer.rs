use crate::config::{BoundsPolicy, Checked, Unchecked};
use crate::region::Span;
use crate::traits::CoreWrite;
use crate::{CursorError, Reader};
use core::cell::Cell;
use core::marker::PhantomData;

/// A write-only cursor. This writer will write data to a backing region borrowed from the
/// caller, and never allocates.
///
/// Hand the written bytes to a consumer with [reader](Writer::reader) (the writer stays usable)
/// or [into_reader](Writer::into_reader) (the writer is done).
pub struct Writer<'a, P: BoundsPolicy = Checked> {
    span: Span<&'a [Cell<u8>]>,
    _policy: PhantomData<P>,
}

/// A [Writer] that drops writes which do not fit.
pub type CheckedWriter<'a> = Writer<'a, Checked>;

/// A [Writer] that trusts the caller's capacity accounting.
pub type UncheckedWriter<'a> = Writer<'a, Unchecked>;

impl<'a, P: BoundsPolicy> Writer<'a, P> {
    /// Create a new writer with a backing buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::from_region(crate::region(buffer))
    }

    /// Create a new writer over the first `len` bytes of `buffer`.
    pub fn with_len(buffer: &'a mut [u8], len: usize) -> Self {
        Self::from_span(Span::new(crate::region(buffer), 0, len))
    }

    /// Create a new writer over `buffer[begin..end]`.
    pub fn with_bounds(buffer: &'a mut [u8], begin: usize, end: usize) -> Self {
        Self::from_span(Span::new(crate::region(buffer), begin, end))
    }

    /// Create a new writer over a region that may also be used by other cursors.
    pub fn from_region(region: &'a [Cell<u8>]) -> Self {
        Self::from_span(Span::new(region, 0, region.len()))
    }

    pub(crate) fn from_span(span: Span<&'a [Cell<u8>]>) -> Self {
        Self {
            span,
            _policy: PhantomData,
        }
    }

    pub(crate) fn span(&self) -> &Span<&'a [Cell<u8>]> {
        &self.span
    }

    /// The offset of the next byte to be written, relative to the start of the backing buffer.
    pub fn position(&self) -> usize {
        self.span.pos
    }

    /// The offset where the writable region starts.
    pub fn begin(&self) -> usize {
        self.span.begin
    }

    /// The offset one past the last writable byte.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The size of the writable region.
    pub fn capacity(&self) -> usize {
        self.span.capacity()
    }

    /// The free space left.
    pub fn bytes_remaining(&self) -> usize {
        self.span.remaining()
    }

    /// The bytes count written to the backing region.
    pub fn bytes_written(&self) -> usize {
        self.span.consumed()
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.span.pos == self.span.begin
    }

    /// True if there is no space left.
    pub fn is_full(&self) -> bool {
        self.span.remaining() == 0
    }

    /// Commit `len` bytes that were put in place some other way. Under `Checked` an advance past
    /// the end is ignored.
    pub fn advance(&mut self, len: usize) {
        self.span.advance::<P>(len);
    }

    /// Discard everything written so far.
    pub fn reset(&mut self) {
        self.span.reset();
    }

    /// Rebind to a fresh region that runs from `begin` to the end of the backing buffer.
    pub fn switch_to_writer(&mut self, begin: usize) {
        self.span.switch_to_writer(begin);
    }

    /// A reader over the bytes written so far. The writer can keep writing.
    ///
    /// The writer must not go back and overwrite bytes the reader has yet to read, e.g. with
    /// [reset](Writer::reset), while the reader is still in use.
    pub fn reader(&self) -> Reader<'a, P> {
        Reader::from_span(self.span.snapshot().shared())
    }

    /// Finish writing and read back exactly the bytes that were written.
    pub fn into_reader(mut self) -> Reader<'a, P> {
        self.span.switch_to_reader();
        Reader::from_span(self.span.shared())
    }

    impl_write_ops!();
}

impl<P: BoundsPolicy> core::fmt::Debug for Writer<'_, P> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_struct("Writer")
            .field("begin", &self.span.begin)
            .field("position", &self.span.pos)
            .field("end", &self.span.end)
            .finish()
    }
}

impl<P: BoundsPolicy> CoreWrite for Writer<'_, P> {
    type Error = CursorError;

    fn write(&mut self, val: u8) -> Result<(), Self::Error> {
        self.try_write_u8(val)
    }

    fn write_all(&mut self, val: &[u8]) -> Result<(), Self::Error> {
        self.try_write_data(val)
    }
}
