/// A byte sink. This is similar to `std::io::Write`, but the std trait is not available in
/// `#![no_std]` projects.
///
/// This trait is implemented for [Cursor](crate::Cursor) and [Writer](crate::Writer), which
/// report [CursorError](crate::CursorError) once the region is full whatever their bounds policy.
/// With the `embedded-hal-traits` feature it is also implemented for every
/// `embedded_hal::serial::Write<u8>`, so a [Reader](crate::Reader) can be drained straight into
/// a UART.
pub trait CoreWrite {
    /// The error that this writer can encounter
    type Error: core::fmt::Debug;

    /// Write a single byte to the writer. This is assumed to be blocking, if the underlying writer
    /// is non-blocking, the value should be written to a backing buffer instead.
    fn write(&mut self, val: u8) -> Result<(), Self::Error>;

    /// Flush the writer. This should empty any backing buffer and ensure all data is transferred.
    /// This function should block until all data is flushed.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Helper function to write multiple bytes to a writer. The default implementation calls
    /// [write](CoreWrite::write) with each byte in the slice.
    fn write_all(&mut self, val: &[u8]) -> Result<(), Self::Error> {
        for byte in val {
            self.write(*byte)?;
        }
        Ok(())
    }
}
