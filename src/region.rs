use crate::config::BoundsPolicy;
use crate::CursorError;
use core::cell::Cell;
use core::ops::Range;

/// Borrow a mutable byte slice as a region that several cursors can share.
///
/// Writing cursors store their memory as `&[Cell<u8>]`. This lets a [Writer](crate::Writer)
/// keep appending while a [Reader](crate::Reader) snapshot of the same memory is alive, and it
/// keeps the cursor types `!Sync`. A reader can also be built over plain `&[u8]` with
/// [Reader::from_slice](crate::Reader::from_slice).
///
/// ```
/// use streambuf_core::{region, CheckedReader, CheckedWriter};
///
/// let mut buffer = [0u8; 16];
/// let region = region(&mut buffer);
/// let mut writer = CheckedWriter::from_region(region);
/// writer.write_u16(0xBEEF);
/// let mut reader = CheckedReader::from_region(&region[..writer.bytes_written()]);
/// assert_eq!(0xBEEF, reader.read_u16());
/// ```
pub fn region(buffer: &mut [u8]) -> &[Cell<u8>] {
    Cell::from_mut(buffer).as_slice_of_cells()
}

/// Memory a [Span] can read from.
pub(crate) trait Memory: Copy {
    fn len(self) -> usize;

    /// `self[range][..len]`, panicking the same way slice indexing does.
    fn window(self, range: Range<usize>, len: usize) -> Self;

    fn byte(self, index: usize) -> u8;

    /// Copies the first `out.len()` bytes into `out`.
    fn load(self, out: &mut [u8]) {
        for (index, byte) in out.iter_mut().enumerate() {
            *byte = self.byte(index);
        }
    }
}

impl<'a> Memory for &'a [Cell<u8>] {
    fn len(self) -> usize {
        <[Cell<u8>]>::len(self)
    }

    fn window(self, range: Range<usize>, len: usize) -> Self {
        &self[range][..len]
    }

    fn byte(self, index: usize) -> u8 {
        self[index].get()
    }
}

impl<'a> Memory for &'a [u8] {
    fn len(self) -> usize {
        <[u8]>::len(self)
    }

    fn window(self, range: Range<usize>, len: usize) -> Self {
        &self[range][..len]
    }

    fn byte(self, index: usize) -> u8 {
        self[index]
    }

    fn load(self, out: &mut [u8]) {
        let len = out.len();
        out.copy_from_slice(&self[..len]);
    }
}

/// What a [Reader](crate::Reader) reads from: a region shared with writers, or plain memory.
#[derive(Clone, Copy)]
pub(crate) enum Bytes<'a> {
    Shared(&'a [Cell<u8>]),
    Plain(&'a [u8]),
}

impl<'a> Memory for Bytes<'a> {
    fn len(self) -> usize {
        match self {
            Bytes::Shared(cells) => Memory::len(cells),
            Bytes::Plain(bytes) => Memory::len(bytes),
        }
    }

    fn window(self, range: Range<usize>, len: usize) -> Self {
        match self {
            Bytes::Shared(cells) => Bytes::Shared(cells.window(range, len)),
            Bytes::Plain(bytes) => Bytes::Plain(bytes.window(range, len)),
        }
    }

    fn byte(self, index: usize) -> u8 {
        match self {
            Bytes::Shared(cells) => cells.byte(index),
            Bytes::Plain(bytes) => bytes.byte(index),
        }
    }

    fn load(self, out: &mut [u8]) {
        match self {
            Bytes::Shared(cells) => cells.load(out),
            Bytes::Plain(bytes) => bytes.load(out),
        }
    }
}

/// The index triple shared by all cursor types: `begin <= pos <= end <= buf.len()`.
#[derive(Clone, Copy)]
pub(crate) struct Span<M> {
    pub(crate) buf: M,
    pub(crate) begin: usize,
    pub(crate) pos: usize,
    pub(crate) end: usize,
}

impl<M: Memory> Span<M> {
    /// Bind to `buf[begin..end]`. Out of range bounds are clamped to the backing memory.
    pub(crate) fn new(buf: M, begin: usize, end: usize) -> Self {
        let end = end.min(buf.len());
        let begin = begin.min(end);
        Self {
            buf,
            begin,
            pos: begin,
            end,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.end - self.pos
    }

    pub(crate) fn consumed(&self) -> usize {
        self.pos - self.begin
    }

    pub(crate) fn capacity(&self) -> usize {
        self.end - self.begin
    }

    /// Panics if `len` exceeds the remaining bytes.
    fn window(&self, len: usize) -> M {
        self.buf.window(self.pos..self.end, len)
    }

    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn peek<P: BoundsPolicy>(&self, op: &'static str, len: usize) -> Option<M> {
        let remaining = self.remaining();
        if P::admits(remaining, len) {
            Some(self.window(len))
        } else {
            trace!(
                "{}: dropped {} byte access, {} bytes remaining",
                op,
                len,
                remaining
            );
            None
        }
    }

    fn claim<P: BoundsPolicy>(&mut self, op: &'static str, len: usize) -> Option<M> {
        let window = self.peek::<P>(op, len)?;
        self.pos += len;
        Some(window)
    }

    fn try_claim(&mut self, len: usize, err: CursorError) -> Result<M, CursorError> {
        if len > self.remaining() {
            return Err(err);
        }
        let window = self.window(len);
        self.pos += len;
        Ok(window)
    }

    /// Copies the next `out.len()` bytes into `out`. A dropped read leaves `out` untouched.
    pub(crate) fn get<P: BoundsPolicy>(&mut self, op: &'static str, out: &mut [u8]) {
        if let Some(window) = self.claim::<P>(op, out.len()) {
            window.load(out);
        }
    }

    pub(crate) fn try_get(&mut self, out: &mut [u8]) -> Result<(), CursorError> {
        let window = self.try_claim(out.len(), CursorError::EndOfBuffer)?;
        window.load(out);
        Ok(())
    }

    /// Hands the remaining bytes out one at a time. The position only moves past bytes that
    /// `sink` accepted.
    pub(crate) fn try_get_with<E>(
        &mut self,
        mut sink: impl FnMut(u8) -> Result<(), E>,
    ) -> Result<usize, E> {
        let start = self.pos;
        let window = self.window(self.remaining());
        for index in 0..window.len() {
            sink(window.byte(index))?;
            self.pos += 1;
        }
        Ok(self.pos - start)
    }

    pub(crate) fn advance<P: BoundsPolicy>(&mut self, len: usize) {
        self.claim::<P>("advance", len);
    }

    pub(crate) fn reset(&mut self) {
        self.pos = self.begin;
    }

    /// Shrinks the region to what was consumed so far and rewinds. Returns the previous end.
    pub(crate) fn switch_to_reader(&mut self) -> usize {
        let previous_end = self.end;
        self.end = self.pos;
        self.pos = self.begin;
        previous_end
    }

    /// Rebinds to `buf[begin..]`, discarding anything written before.
    pub(crate) fn switch_to_writer(&mut self, begin: usize) {
        *self = Span::new(self.buf, begin, self.buf.len());
    }

    /// A fresh span over exactly the bytes consumed so far.
    pub(crate) fn snapshot(&self) -> Self {
        Span::new(self.buf, self.begin, self.pos)
    }
}

impl<'a> Span<&'a [Cell<u8>]> {
    /// The same indices over [Bytes], as a reader holds them.
    pub(crate) fn shared(self) -> Span<Bytes<'a>> {
        Span {
            buf: Bytes::Shared(self.buf),
            begin: self.begin,
            pos: self.pos,
            end: self.end,
        }
    }

    pub(crate) fn put<P: BoundsPolicy>(&mut self, op: &'static str, bytes: &[u8]) {
        if let Some(cells) = self.claim::<P>(op, bytes.len()) {
            store(cells, bytes);
        }
    }

    pub(crate) fn try_put(&mut self, bytes: &[u8]) -> Result<(), CursorError> {
        let cells = self.try_claim(bytes.len(), CursorError::BufferTooSmall)?;
        store(cells, bytes);
        Ok(())
    }

    /// Writes `bytes` followed by a single `0x00`, as one atomic access.
    pub(crate) fn put_terminated<P: BoundsPolicy>(&mut self, op: &'static str, bytes: &[u8]) {
        if let Some(cells) = self.claim::<P>(op, bytes.len() + 1) {
            store_terminated(cells, bytes);
        }
    }

    pub(crate) fn try_put_terminated(&mut self, bytes: &[u8]) -> Result<(), CursorError> {
        let cells = self.try_claim(bytes.len() + 1, CursorError::BufferTooSmall)?;
        store_terminated(cells, bytes);
        Ok(())
    }

    pub(crate) fn fill<P: BoundsPolicy>(&mut self, op: &'static str, value: u8, len: usize) {
        if let Some(cells) = self.claim::<P>(op, len) {
            cells.iter().for_each(|cell| cell.set(value));
        }
    }

    pub(crate) fn try_fill(&mut self, value: u8, len: usize) -> Result<(), CursorError> {
        let cells = self.try_claim(len, CursorError::BufferTooSmall)?;
        cells.iter().for_each(|cell| cell.set(value));
        Ok(())
    }

    pub(crate) fn fill_in_place<P: BoundsPolicy>(&self, op: &'static str, value: u8, len: usize) {
        if let Some(cells) = self.peek::<P>(op, len) {
            cells.iter().for_each(|cell| cell.set(value));
        }
    }

    /// Reserves `len` bytes and hands them out one at a time. If `next` fails the position is
    /// rolled back, so the cursor looks as if nothing happened.
    pub(crate) fn try_put_with<E>(
        &mut self,
        len: usize,
        mut next: impl FnMut() -> Result<u8, E>,
    ) -> Result<(), crate::TransferError<E>> {
        let start = self.pos;
        let cells = self.try_claim(len, CursorError::BufferTooSmall)?;
        for cell in cells {
            match next() {
                Ok(byte) => cell.set(byte),
                Err(e) => {
                    self.pos = start;
                    return Err(crate::TransferError::Io(e));
                }
            }
        }
        Ok(())
    }
}

fn store(cells: &[Cell<u8>], bytes: &[u8]) {
    for (cell, byte) in cells.iter().zip(bytes) {
        cell.set(*byte);
    }
}

fn store_terminated(cells: &[Cell<u8>], bytes: &[u8]) {
    store(cells, bytes);
    cells[bytes.len()].set(0);
}
