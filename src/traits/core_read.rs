/// A byte source. This is similar to `std::io::Read`, but the std trait is not available in
/// `#![no_std]` projects.
///
/// This trait is implemented for [Cursor](crate::Cursor) and [Reader](crate::Reader), which
/// report [CursorError::EndOfBuffer](crate::CursorError::EndOfBuffer) once every byte has been
/// read whatever their bounds policy. With the `embedded-hal-traits` feature it is also
/// implemented for every `embedded_hal::serial::Read<u8>`.
///
/// Reads are expected to be blocking.
pub trait CoreRead {
    /// The error that this reader can encounter
    type Error: core::fmt::Debug;

    /// Read the next byte.
    fn read(&mut self) -> Result<u8, Self::Error>;

    /// Fills the given buffer from the reader.
    /// The input buffer MUST be completely filled. If the reader runs out of bytes before filling
    /// the buffer an error MUST be returned.
    fn fill(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        for byte in buffer {
            *byte = self.read()?;
        }
        Ok(())
    }
}
