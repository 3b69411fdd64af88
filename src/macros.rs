/// Forwards to `log::trace!` when the `log` feature is enabled, and compiles to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }};
}

/// The write surface shared by [Cursor](crate::Cursor) and [Writer](crate::Writer).
///
/// Expects a `span: Span<&'a [Cell<u8>]>` field and a `P: BoundsPolicy` parameter on the
/// implementing type.
macro_rules! impl_write_ops {
    () => {
        /// Write a single byte.
        pub fn write_u8(&mut self, value: u8) {
            self.span.put::<P>("write_u8", &[value]);
        }

        /// Write a single byte, reporting whether it fit.
        pub fn try_write_u8(&mut self, value: u8) -> Result<(), crate::CursorError> {
            self.span.try_put(&[value])
        }

        /// Write a two's complement byte.
        pub fn write_i8(&mut self, value: i8) {
            self.write_u8(value as u8);
        }

        /// Write a `u16` in little-endian order.
        pub fn write_u16(&mut self, value: u16) {
            self.write_u16_with::<byteorder::LittleEndian>(value);
        }

        /// Write a `u16` in big-endian order.
        pub fn write_u16_big_endian(&mut self, value: u16) {
            self.write_u16_with::<byteorder::BigEndian>(value);
        }

        /// Write a `u16` in the byte order `E`. Both bytes are written, or none.
        pub fn write_u16_with<E: byteorder::ByteOrder>(&mut self, value: u16) {
            let mut buf = [0u8; 2];
            E::write_u16(&mut buf, value);
            self.span.put::<P>("write_u16", &buf);
        }

        /// Write a `u16` in little-endian order, reporting whether it fit.
        pub fn try_write_u16(&mut self, value: u16) -> Result<(), crate::CursorError> {
            self.try_write_u16_with::<byteorder::LittleEndian>(value)
        }

        /// Write a `u16` in big-endian order, reporting whether it fit.
        pub fn try_write_u16_big_endian(&mut self, value: u16) -> Result<(), crate::CursorError> {
            self.try_write_u16_with::<byteorder::BigEndian>(value)
        }

        /// Write a `u16` in the byte order `E`, reporting whether it fit.
        pub fn try_write_u16_with<E: byteorder::ByteOrder>(
            &mut self,
            value: u16,
        ) -> Result<(), crate::CursorError> {
            let mut buf = [0u8; 2];
            E::write_u16(&mut buf, value);
            self.span.try_put(&buf)
        }

        /// Write an `i16` in little-endian order.
        pub fn write_i16(&mut self, value: i16) {
            self.write_u16(value as u16);
        }

        /// Write a `u32` in little-endian order.
        pub fn write_u32(&mut self, value: u32) {
            self.write_u32_with::<byteorder::LittleEndian>(value);
        }

        /// Write a `u32` in big-endian order.
        pub fn write_u32_big_endian(&mut self, value: u32) {
            self.write_u32_with::<byteorder::BigEndian>(value);
        }

        /// Write a `u32` in the byte order `E`. All four bytes are written, or none.
        pub fn write_u32_with<E: byteorder::ByteOrder>(&mut self, value: u32) {
            let mut buf = [0u8; 4];
            E::write_u32(&mut buf, value);
            self.span.put::<P>("write_u32", &buf);
        }

        /// Write a `u32` in little-endian order, reporting whether it fit.
        pub fn try_write_u32(&mut self, value: u32) -> Result<(), crate::CursorError> {
            self.try_write_u32_with::<byteorder::LittleEndian>(value)
        }

        /// Write a `u32` in big-endian order, reporting whether it fit.
        pub fn try_write_u32_big_endian(&mut self, value: u32) -> Result<(), crate::CursorError> {
            self.try_write_u32_with::<byteorder::BigEndian>(value)
        }

        /// Write a `u32` in the byte order `E`, reporting whether it fit.
        pub fn try_write_u32_with<E: byteorder::ByteOrder>(
            &mut self,
            value: u32,
        ) -> Result<(), crate::CursorError> {
            let mut buf = [0u8; 4];
            E::write_u32(&mut buf, value);
            self.span.try_put(&buf)
        }

        /// Write an `i32` in little-endian order.
        pub fn write_i32(&mut self, value: i32) {
            self.write_u32(value as u32);
        }

        /// Write the exact bit pattern of an `f32`, in little-endian order.
        ///
        /// NaN payloads, signed zeros and subnormals survive unchanged.
        pub fn write_f32(&mut self, value: f32) {
            self.write_u32(value.to_bits());
        }

        /// Write the exact bit pattern of an `f32`, reporting whether it fit.
        pub fn try_write_f32(&mut self, value: f32) -> Result<(), crate::CursorError> {
            self.try_write_u32(value.to_bits())
        }

        /// Copy a block of bytes. Under `Checked` a block that does not fit is dropped whole.
        pub fn write_data(&mut self, data: &[u8]) {
            self.span.put::<P>("write_data", data);
        }

        /// Copy a block of bytes, reporting whether it fit.
        pub fn try_write_data(&mut self, data: &[u8]) -> Result<(), crate::CursorError> {
            self.span.try_put(data)
        }

        /// Write the bytes of a string. No length prefix and no terminator is written.
        pub fn write_string(&mut self, value: &str) {
            self.span.put::<P>("write_string", value.as_bytes());
        }

        /// Write the bytes of a string, reporting whether it fit.
        pub fn try_write_string(&mut self, value: &str) -> Result<(), crate::CursorError> {
            self.span.try_put(value.as_bytes())
        }

        /// Write the bytes of a string followed by a single `0x00`.
        pub fn write_string_with_zero_terminator(&mut self, value: &str) {
            self.span
                .put_terminated::<P>("write_string_with_zero_terminator", value.as_bytes());
        }

        /// Write the bytes of a string followed by a single `0x00`, reporting whether it fit.
        pub fn try_write_string_with_zero_terminator(
            &mut self,
            value: &str,
        ) -> Result<(), crate::CursorError> {
            self.span.try_put_terminated(value.as_bytes())
        }

        /// Write a C string, including its terminator.
        pub fn write_c_str(&mut self, value: &core::ffi::CStr) {
            self.span.put::<P>("write_c_str", value.to_bytes_with_nul());
        }

        /// Write `len` copies of `value`.
        pub fn fill(&mut self, value: u8, len: usize) {
            self.span.fill::<P>("fill", value, len);
        }

        /// Write `len` copies of `value`, reporting whether they fit.
        pub fn try_fill(&mut self, value: u8, len: usize) -> Result<(), crate::CursorError> {
            self.span.try_fill(value, len)
        }

        /// Write `len` copies of `value` without moving the position.
        ///
        /// Handy for poisoning the free part of a region before a test.
        pub fn fill_without_advancing(&mut self, value: u8, len: usize) {
            self.span.fill_in_place::<P>("fill_without_advancing", value, len);
        }

        /// Pull exactly `len` bytes out of `source`.
        ///
        /// The space is checked up front, so nothing is pulled from `source` when the bytes
        /// would not fit. If `source` fails halfway the position is left where it was.
        pub fn fill_from<R: crate::traits::CoreRead>(
            &mut self,
            source: &mut R,
            len: usize,
        ) -> Result<(), crate::TransferError<R::Error>> {
            self.span.try_put_with(len, || source.read())
        }
    };
}

/// The read surface shared by [Cursor](crate::Cursor) and [Reader](crate::Reader).
///
/// Expects a `span: Span<M>` field over any readable memory and a `P: BoundsPolicy` parameter on
/// the implementing type.
macro_rules! impl_read_ops {
    () => {
        /// Read a single byte.
        pub fn read_u8(&mut self) -> u8 {
            let mut buf = [0u8; 1];
            self.span.get::<P>("read_u8", &mut buf);
            buf[0]
        }

        /// Read a single byte, reporting whether one was left.
        pub fn try_read_u8(&mut self) -> Result<u8, crate::CursorError> {
            let mut buf = [0u8; 1];
            self.span.try_get(&mut buf)?;
            Ok(buf[0])
        }

        /// Read a two's complement byte.
        pub fn read_i8(&mut self) -> i8 {
            self.read_u8() as i8
        }

        /// Read a little-endian `u16`.
        pub fn read_u16(&mut self) -> u16 {
            self.read_u16_with::<byteorder::LittleEndian>()
        }

        /// Read a big-endian `u16`.
        pub fn read_u16_big_endian(&mut self) -> u16 {
            self.read_u16_with::<byteorder::BigEndian>()
        }

        /// Read a `u16` in the byte order `E`.
        pub fn read_u16_with<E: byteorder::ByteOrder>(&mut self) -> u16 {
            let mut buf = [0u8; 2];
            self.span.get::<P>("read_u16", &mut buf);
            E::read_u16(&buf)
        }

        /// Read a little-endian `u16`, reporting whether enough bytes were left.
        pub fn try_read_u16(&mut self) -> Result<u16, crate::CursorError> {
            self.try_read_u16_with::<byteorder::LittleEndian>()
        }

        /// Read a big-endian `u16`, reporting whether enough bytes were left.
        pub fn try_read_u16_big_endian(&mut self) -> Result<u16, crate::CursorError> {
            self.try_read_u16_with::<byteorder::BigEndian>()
        }

        /// Read a `u16` in the byte order `E`, reporting whether enough bytes were left.
        pub fn try_read_u16_with<E: byteorder::ByteOrder>(
            &mut self,
        ) -> Result<u16, crate::CursorError> {
            let mut buf = [0u8; 2];
            self.span.try_get(&mut buf)?;
            Ok(E::read_u16(&buf))
        }

        /// Read a little-endian `i16`.
        pub fn read_i16(&mut self) -> i16 {
            self.read_u16() as i16
        }

        /// Read a little-endian `u32`.
        pub fn read_u32(&mut self) -> u32 {
            self.read_u32_with::<byteorder::LittleEndian>()
        }

        /// Read a big-endian `u32`.
        pub fn read_u32_big_endian(&mut self) -> u32 {
            self.read_u32_with::<byteorder::BigEndian>()
        }

        /// Read a `u32` in the byte order `E`.
        pub fn read_u32_with<E: byteorder::ByteOrder>(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.span.get::<P>("read_u32", &mut buf);
            E::read_u32(&buf)
        }

        /// Read a little-endian `u32`, reporting whether enough bytes were left.
        pub fn try_read_u32(&mut self) -> Result<u32, crate::CursorError> {
            self.try_read_u32_with::<byteorder::LittleEndian>()
        }

        /// Read a big-endian `u32`, reporting whether enough bytes were left.
        pub fn try_read_u32_big_endian(&mut self) -> Result<u32, crate::CursorError> {
            self.try_read_u32_with::<byteorder::BigEndian>()
        }

        /// Read a `u32` in the byte order `E`, reporting whether enough bytes were left.
        pub fn try_read_u32_with<E: byteorder::ByteOrder>(
            &mut self,
        ) -> Result<u32, crate::CursorError> {
            let mut buf = [0u8; 4];
            self.span.try_get(&mut buf)?;
            Ok(E::read_u32(&buf))
        }

        /// Read a little-endian `i32`.
        pub fn read_i32(&mut self) -> i32 {
            self.read_u32() as i32
        }

        /// Read an `f32` from the exact bit pattern written by `write_f32`.
        pub fn read_f32(&mut self) -> f32 {
            f32::from_bits(self.read_u32())
        }

        /// Read an `f32`, reporting whether enough bytes were left.
        pub fn try_read_f32(&mut self) -> Result<f32, crate::CursorError> {
            self.try_read_u32().map(f32::from_bits)
        }

        /// Fill `out` with the next `out.len()` bytes.
        ///
        /// Under `Checked` a block that is not fully available leaves `out` untouched.
        pub fn read_data(&mut self, out: &mut [u8]) {
            self.span.get::<P>("read_data", out);
        }

        /// Fill `out` with the next `out.len()` bytes, reporting whether enough were left.
        pub fn try_read_data(&mut self, out: &mut [u8]) -> Result<(), crate::CursorError> {
            self.span.try_get(out)
        }

        /// Push every remaining byte into `sink`, returning how many were pushed.
        ///
        /// On failure the position stays right after the last byte `sink` accepted.
        pub fn drain_into<W: crate::traits::CoreWrite>(
            &mut self,
            sink: &mut W,
        ) -> Result<usize, W::Error> {
            self.span.try_get_with(|byte| sink.write(byte))
        }
    };
}
