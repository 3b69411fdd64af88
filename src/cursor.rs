use crate::config::{BoundsPolicy, Checked, Unchecked};
use crate::region::{region, Span};
use crate::traits::{CoreRead, CoreWrite};
use crate::{CursorError, Reader};
use core::cell::Cell;
use core::marker::PhantomData;

/// A read + write cursor over a borrowed region.
///
/// A producer writes a sequence of values, calls [switch_to_reader](Cursor::switch_to_reader),
/// and the same cursor then reads back exactly the bytes that were written:
///
/// ```
/// use streambuf_core::CheckedCursor;
///
/// let mut buffer = [0u8; 256];
/// let mut cursor = CheckedCursor::new(&mut buffer);
/// cursor.write_u8(1);
/// cursor.write_u16(2);
/// cursor.write_u32(3);
/// assert_eq!(7, cursor.bytes_written());
///
/// cursor.switch_to_reader();
/// assert_eq!(7, cursor.bytes_remaining());
/// assert_eq!((1, 2, 3), (cursor.read_u8(), cursor.read_u16(), cursor.read_u32()));
/// assert_eq!(0, cursor.bytes_remaining());
/// ```
///
/// `P` selects what happens when an access does not fit, see [config](crate::config).
pub struct Cursor<'a, P: BoundsPolicy = Checked> {
    span: Span<&'a [Cell<u8>]>,
    _policy: PhantomData<P>,
}

/// A [Cursor] that drops accesses which do not fit.
pub type CheckedCursor<'a> = Cursor<'a, Checked>;

/// A [Cursor] that trusts the caller's capacity accounting.
pub type UncheckedCursor<'a> = Cursor<'a, Unchecked>;

impl<'a, P: BoundsPolicy> Cursor<'a, P> {
    /// Create a cursor over the whole of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::from_region(region(buffer))
    }

    /// Create a cursor over the first `len` bytes of `buffer`.
    ///
    /// `len` is clamped to the length of `buffer`.
    pub fn with_len(buffer: &'a mut [u8], len: usize) -> Self {
        Self::from_span(Span::new(region(buffer), 0, len))
    }

    /// Create a cursor over `buffer[begin..end]`.
    ///
    /// Both bounds are clamped to the length of `buffer`. Unlike re-slicing `buffer` before
    /// calling [new](Cursor::new), the cursor keeps access to the whole buffer, so a later
    /// [switch_to_writer](Cursor::switch_to_writer) can move to any offset of it.
    pub fn with_bounds(buffer: &'a mut [u8], begin: usize, end: usize) -> Self {
        Self::from_span(Span::new(region(buffer), begin, end))
    }

    /// Create a cursor over a region that may also be used by other cursors.
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

    /// The offset of the next byte to be read or written, relative to the start of the backing
    /// buffer.
    pub fn position(&self) -> usize {
        self.span.pos
    }

    /// The offset where the current region starts.
    pub fn begin(&self) -> usize {
        self.span.begin
    }

    /// The offset one past the last byte of the current region.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The size of the current region.
    pub fn capacity(&self) -> usize {
        self.span.capacity()
    }

    /// When writing, the free space left. When reading, the bytes left to read.
    pub fn bytes_remaining(&self) -> usize {
        self.span.remaining()
    }

    /// When writing, the bytes written so far. When reading, the bytes read so far.
    pub fn bytes_written(&self) -> usize {
        self.span.consumed()
    }

    /// Alias of [bytes_written](Cursor::bytes_written) that reads better in read mode.
    pub fn bytes_read(&self) -> usize {
        self.span.consumed()
    }

    /// True if the position is at the start of the region.
    pub fn is_empty(&self) -> bool {
        self.span.pos == self.span.begin
    }

    /// True if no bytes remain.
    pub fn is_full(&self) -> bool {
        self.span.remaining() == 0
    }

    /// Skip `len` bytes. When writing this commits bytes that were put in place some other way.
    ///
    /// Under `Checked` an advance past the end is ignored.
    pub fn advance(&mut self, len: usize) {
        self.span.advance::<P>(len);
    }

    /// Move the position back to the start of the region.
    pub fn reset(&mut self) {
        self.span.reset();
    }

    /// Turn the bytes written so far into the readable region, in place.
    ///
    /// The end of the region becomes the current position and the position goes back to the
    /// start. Nothing is copied. Returns the previous end.
    pub fn switch_to_reader(&mut self) -> usize {
        self.span.switch_to_reader()
    }

    /// Rebind to a fresh writable region that runs from `begin` to the end of the backing
    /// buffer. Anything that was written before is discarded.
    pub fn switch_to_writer(&mut self, begin: usize) {
        self.span.switch_to_writer(begin);
    }

    /// A reader over the bytes written so far.
    ///
    /// `self` is left untouched and can keep writing; the snapshot does not see those later
    /// writes until it is re-bound.
    pub fn reader(&self) -> Reader<'a, P> {
        Reader::from_span(self.span.snapshot().shared())
    }

    impl_write_ops!();
    impl_read_ops!();
}

impl<P: BoundsPolicy> core::fmt::Debug for Cursor<'_, P> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_struct("Cursor")
            .field("begin", &self.span.begin)
            .field("position", &self.span.pos)
            .field("end", &self.span.end)
            .finish()
    }
}

impl<P: BoundsPolicy> CoreWrite for Cursor<'_, P> {
    type Error = CursorError;

    fn write(&mut self, val: u8) -> Result<(), Self::Error> {
        self.try_write_u8(val)
    }

    fn write_all(&mut self, val: &[u8]) -> Result<(), Self::Error> {
        self.try_write_data(val)
    }
}

impl<P: BoundsPolicy> CoreRead for Cursor<'_, P> {
    type Error = CursorError;

    fn read(&mut self) -> Result<u8, Self::Error> {
        self.try_read_u8()
    }

    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.try_read_data(buffer)
    }
}
