use crate::config::{BoundsPolicy, Checked, Unchecked};
use crate::region::{Bytes, Span};
use crate::traits::CoreRead;
use crate::{Cursor, CursorError, Writer};
use core::cell::Cell;
use core::marker::PhantomData;

/// A read-only cursor.
///
/// A reader is usually a snapshot of a [Writer] or [Cursor], bounded by what was written when
/// the snapshot was taken. It can be re-bound with [track](Reader::track), so a single reader
/// can follow the latest state of a writer that is reset and refilled over and over.
///
/// ```
/// use streambuf_core::{region, CheckedReader, CheckedWriter};
///
/// let mut buffer = [0u8; 32];
/// let region = region(&mut buffer);
/// let mut writer = CheckedWriter::from_region(region);
/// let mut reader = writer.reader();
///
/// for round in 0..3u32 {
///     writer.reset();
///     writer.write_u32_big_endian(round);
///     reader.track(&writer);
///     assert_eq!(round, reader.read_u32_big_endian());
/// }
/// ```
pub struct Reader<'a, P: BoundsPolicy = Checked> {
    span: Span<Bytes<'a>>,
    _policy: PhantomData<P>,
}

/// A [Reader] that yields `0` for reads which do not fit.
pub type CheckedReader<'a> = Reader<'a, Checked>;

/// A [Reader] that trusts the caller's capacity accounting.
pub type UncheckedReader<'a> = Reader<'a, Unchecked>;

impl<'a, P: BoundsPolicy> Reader<'a, P> {
    /// Create a reader over the whole of `buffer`.
    ///
    /// The buffer is borrowed mutably, like for the other cursor types. Use
    /// [from_slice](Reader::from_slice) to read memory behind a shared borrow, and
    /// [from_region](Reader::from_region) to read memory that other cursors also use.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::from_region(crate::region(buffer))
    }

    /// Create a reader over the first `len` bytes of `buffer`.
    ///
    /// `len` is clamped to the length of `buffer`.
    pub fn with_len(buffer: &'a mut [u8], len: usize) -> Self {
        Self::from_span(Span::new(crate::region(buffer), 0, len).shared())
    }

    /// Create a reader over `buffer[begin..end]`.
    ///
    /// Both bounds are clamped to the length of `buffer`.
    pub fn with_bounds(buffer: &'a mut [u8], begin: usize, end: usize) -> Self {
        Self::from_span(Span::new(crate::region(buffer), begin, end).shared())
    }

    /// Create a reader over a shared region.
    pub fn from_region(region: &'a [Cell<u8>]) -> Self {
        Self::from_span(Span::new(region, 0, region.len()).shared())
    }

    /// Create a reader over immutable memory, such as a `static` table or a received frame.
    ///
    /// ```
    /// use streambuf_core::CheckedReader;
    ///
    /// static HEADER: [u8; 3] = [0x01, 0x34, 0x12];
    ///
    /// let mut reader = CheckedReader::from_slice(&HEADER);
    /// assert_eq!(0x01, reader.read_u8());
    /// assert_eq!(0x1234, reader.read_u16());
    /// ```
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::from_span(Span::new(Bytes::Plain(bytes), 0, bytes.len()))
    }

    pub(crate) fn from_span(span: Span<Bytes<'a>>) -> Self {
        Self {
            span,
            _policy: PhantomData,
        }
    }

    /// Re-bind to the bytes `writer` has written so far and start reading from the first one.
    pub fn track(&mut self, writer: &Writer<'a, P>) {
        self.span = writer.span().snapshot().shared();
    }

    /// Re-bind to the bytes `cursor` has written so far and start reading from the first one.
    ///
    /// `cursor` is expected to be writing. Its own position and mode are left alone.
    pub fn track_cursor(&mut self, cursor: &Cursor<'a, P>) {
        self.span = cursor.span().snapshot().shared();
    }

    /// The offset of the next byte to be read, relative to the start of the backing buffer.
    pub fn position(&self) -> usize {
        self.span.pos
    }

    /// The offset where the readable region starts.
    pub fn begin(&self) -> usize {
        self.span.begin
    }

    /// The offset one past the last readable byte.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The number of bytes left to read.
    pub fn bytes_remaining(&self) -> usize {
        self.span.remaining()
    }

    /// The number of bytes read so far.
    pub fn bytes_read(&self) -> usize {
        self.span.consumed()
    }

    /// True if there is nothing left to read.
    pub fn is_empty(&self) -> bool {
        self.span.remaining() == 0
    }

    /// Skip `len` bytes. Under `Checked` a skip past the end is ignored.
    pub fn advance(&mut self, len: usize) {
        self.span.advance::<P>(len);
    }

    /// Start reading from the first byte again.
    pub fn reset(&mut self) {
        self.span.reset();
    }

    /// Shrink the readable region to what was read so far and rewind. Returns the previous end.
    pub fn switch_to_reader(&mut self) -> usize {
        self.span.switch_to_reader()
    }

    impl_read_ops!();
}

/// Copies the position, start and end of `cursor` as they are, without switching modes.
///
/// A cursor that is still writing gives a reader positioned after the written bytes; call
/// [switch_to_reader](Reader::switch_to_reader) on it to read them back. Use
/// [Cursor::reader] to get a reader that is ready to go.
impl<'a, P: BoundsPolicy> From<&Cursor<'a, P>> for Reader<'a, P> {
    fn from(cursor: &Cursor<'a, P>) -> Self {
        Self::from_span(cursor.span().shared())
    }
}

impl<'a, P: BoundsPolicy> From<Writer<'a, P>> for Reader<'a, P> {
    fn from(writer: Writer<'a, P>) -> Self {
        writer.into_reader()
    }
}

impl<P: BoundsPolicy> Clone for Reader<'_, P> {
    fn clone(&self) -> Self {
        Self::from_span(self.span)
    }
}

impl<P: BoundsPolicy> core::fmt::Debug for Reader<'_, P> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_struct("Reader")
            .field("begin", &self.span.begin)
            .field("position", &self.span.pos)
            .field("end", &self.span.end)
            .finish()
    }
}

impl<P: BoundsPolicy> CoreRead for Reader<'_, P> {
    type Error = CursorError;

    fn read(&mut self) -> Result<u8, Self::Error> {
        self.try_read_u8()
    }

    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.try_read_data(buffer)
    }
}
