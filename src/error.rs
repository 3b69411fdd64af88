/// Errors that can be returned from the `try_*` operations of [Cursor](crate::Cursor),
/// [Reader](crate::Reader) and [Writer](crate::Writer).
///
/// The plain operations never return these; under [Checked](crate::config::Checked) they drop
/// the access instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The region does not have enough space left for the requested write.
    BufferTooSmall,

    /// The region does not have enough bytes left for the requested read.
    EndOfBuffer,
}

impl core::fmt::Display for CursorError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            CursorError::BufferTooSmall => write!(fmt, "Buffer too small"),
            CursorError::EndOfBuffer => write!(fmt, "End of buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CursorError {}

/// Any error that can be thrown while moving bytes between a cursor and a
/// [CoreRead](crate::traits::CoreRead) or [CoreWrite](crate::traits::CoreWrite) endpoint.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TransferError<E> {
    /// The cursor could not take or provide the requested bytes.
    Cursor(CursorError),

    /// The endpoint failed. See the inner error for more info.
    Io(E),
}

impl<E> From<CursorError> for TransferError<E> {
    fn from(err: CursorError) -> Self {
        TransferError::Cursor(err)
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for TransferError<E> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TransferError::Cursor(e) => write!(fmt, "Cursor error {:?}", e),
            TransferError::Io(e) => write!(fmt, "IO error {:?}", e),
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for TransferError<E> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, fmt)
    }
}
