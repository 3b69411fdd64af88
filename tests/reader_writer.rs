use streambuf_core::traits::{CoreRead, CoreWrite};
use streambuf_core::{
    region, CheckedCursor, CheckedReader, CheckedWriter, CursorError, Reader, TransferError,
    UncheckedReader, UncheckedWriter,
};

#[test]
fn writer_snapshot() {
    let mut buffer = [0u8; 256];
    let mut writer = CheckedWriter::new(&mut buffer);
    assert_eq!(256, writer.bytes_remaining());

    writer.write_u8(1);
    writer.write_u16(2);
    writer.write_u32(3);
    assert_eq!(7, writer.bytes_written());
    assert_eq!(249, writer.bytes_remaining());

    let mut reader = writer.reader();
    assert_eq!(0, reader.bytes_read());
    assert_eq!(7, reader.bytes_remaining());
    assert_eq!(1, reader.read_u8());
    assert_eq!(1, reader.bytes_read());
    assert_eq!(2, reader.read_u16());
    assert_eq!(3, reader.read_u32());
    assert_eq!(7, reader.bytes_read());
    assert!(reader.is_empty());
}

#[test]
fn writer_keeps_appending_behind_snapshot() {
    let mut buffer = [0u8; 16];
    let mut writer = CheckedWriter::new(&mut buffer);
    writer.write_u8(1);

    let mut reader = writer.reader();
    writer.write_u8(2);
    writer.write_u8(3);

    assert_eq!(1, reader.bytes_remaining());
    assert_eq!(1, reader.read_u8());
    assert_eq!(0, reader.read_u8());

    reader.track(&writer);
    assert_eq!(3, reader.bytes_remaining());
    let mut out = [0u8; 3];
    reader.read_data(&mut out);
    assert_eq!([1, 2, 3], out);
}

#[test]
fn reader_tracks_rotating_writer() {
    let mut buffer = [0u8; 8];
    let region = region(&mut buffer);
    let mut writer = CheckedWriter::from_region(region);
    let mut reader = writer.reader();
    assert!(reader.is_empty());

    for round in 0..4u16 {
        writer.reset();
        for _ in 0..=round {
            writer.write_u16_big_endian(round);
        }
        reader.track(&writer);
        assert_eq!(2 * (round as usize + 1), reader.bytes_remaining());
        while !reader.is_empty() {
            assert_eq!(round, reader.read_u16_big_endian());
        }
    }
}

#[test]
fn into_reader() {
    let mut buffer = [0xFFu8; 8];
    let mut writer = CheckedWriter::new(&mut buffer);
    writer.write_string_with_zero_terminator("Hi");
    writer.write_u16(0x0102);

    let mut reader = writer.into_reader();
    assert_eq!(5, reader.bytes_remaining());
    let mut text = [0u8; 3];
    reader.read_data(&mut text);
    assert_eq!(*b"Hi\0", text);
    assert_eq!(0x0102, reader.read_u16());
    assert!(reader.is_empty());
}

#[test]
fn reader_from_writer() {
    let mut buffer = [0u8; 4];
    let mut writer = CheckedWriter::new(&mut buffer);
    writer.write_u32_big_endian(0xDEAD_BEEF);

    let mut reader = Reader::from(writer);
    assert_eq!(0xDEAD_BEEF, reader.read_u32_big_endian());
}

#[test]
fn reader_over_plain_buffer() {
    let mut buffer = [0x01, 0x02, 0x03, 0x04, 0x05];
    let mut reader = CheckedReader::with_len(&mut buffer, 4);
    assert_eq!(4, reader.bytes_remaining());
    assert_eq!(0x0201, reader.read_u16());
    reader.advance(1);
    assert_eq!(3, reader.bytes_read());
    assert_eq!(0x04, reader.read_u8());
    assert_eq!(0, reader.read_u8());

    reader.reset();
    assert_eq!(0x0403_0201, reader.read_u32());
}

#[test]
fn reader_switch_to_reader_shrinks_to_consumed() {
    let mut buffer = [9, 8, 7, 6];
    let mut reader = CheckedReader::new(&mut buffer);
    reader.read_u16();
    assert_eq!(4, reader.switch_to_reader());
    assert_eq!(2, reader.bytes_remaining());
    assert_eq!(9, reader.read_u8());
}

#[test]
fn checked_writer_drops_oversized_writes() {
    let mut buffer = [0u8; 3];
    let region = region(&mut buffer);
    let mut writer = CheckedWriter::from_region(region);
    writer.write_u32(0x0102_0304);
    assert!(writer.is_empty());
    writer.write_u16(0x0506);
    writer.write_u16(0x0708);
    assert_eq!(2, writer.bytes_written());
    writer.write_u8(9);
    assert!(writer.is_full());

    let bytes: Vec<u8> = region.iter().map(|cell| cell.get()).collect();
    assert_eq!(vec![0x06, 0x05, 9], bytes);
}

#[test]
fn unchecked_views() {
    let mut buffer = [0u8; 6];
    let mut writer = UncheckedWriter::new(&mut buffer);
    writer.write_u16(1);
    writer.write_u32_big_endian(2);

    let mut reader: UncheckedReader = writer.into_reader();
    assert_eq!(1, reader.read_u16());
    assert_eq!(2, reader.read_u32_big_endian());
}

#[test]
fn drain_into_writer() {
    let mut source = [0u8; 8];
    let mut cursor = CheckedCursor::new(&mut source);
    cursor.write_string("Hello!");
    let mut reader = cursor.reader();

    let mut target = [0u8; 4];
    let mut writer = CheckedWriter::new(&mut target);
    assert_eq!(Err(CursorError::BufferTooSmall), reader.drain_into(&mut writer));
    assert_eq!(4, reader.bytes_read());
    assert!(writer.is_full());

    let mut reader = writer.into_reader();
    let mut out = [0u8; 4];
    reader.read_data(&mut out);
    assert_eq!(*b"Hell", out);
}

#[test]
fn fill_from_reader() {
    let mut source = [1, 2, 3, 4, 5];
    let mut reader = CheckedReader::new(&mut source);

    let mut target = [0u8; 4];
    let mut writer = CheckedWriter::new(&mut target);
    assert_eq!(
        Err(TransferError::Cursor(CursorError::BufferTooSmall)),
        writer.fill_from(&mut reader, 5)
    );
    assert_eq!(0, reader.bytes_read());

    assert_eq!(Ok(()), writer.fill_from(&mut reader, 3));
    assert_eq!(3, writer.bytes_written());

    // only two bytes left in the source
    writer.reset();
    assert_eq!(
        Err(TransferError::Io(CursorError::EndOfBuffer)),
        writer.fill_from(&mut reader, 4)
    );
    assert_eq!(0, writer.bytes_written());
}

/// A sink that accepts a fixed number of bytes, then fails.
struct Flaky {
    accepted: Vec<u8>,
    budget: usize,
}

#[derive(Debug, PartialEq)]
struct Broken;

impl CoreWrite for Flaky {
    type Error = Broken;

    fn write(&mut self, val: u8) -> Result<(), Broken> {
        if self.accepted.len() == self.budget {
            return Err(Broken);
        }
        self.accepted.push(val);
        Ok(())
    }
}

#[test]
fn drain_into_stops_at_sink_failure() {
    let mut buffer = [1, 2, 3, 4];
    let mut reader = CheckedReader::new(&mut buffer);
    let mut sink = Flaky {
        accepted: Vec::new(),
        budget: 3,
    };
    assert_eq!(Err(Broken), reader.drain_into(&mut sink));
    assert_eq!(vec![1, 2, 3], sink.accepted);
    assert_eq!(1, reader.bytes_remaining());
    assert_eq!(4, reader.read_u8());
}

#[test]
fn core_traits_on_cursor_types() {
    let mut buffer = [0u8; 4];
    let mut writer = CheckedWriter::new(&mut buffer);
    assert_eq!(Ok(()), CoreWrite::write_all(&mut writer, &[1, 2, 3]));
    assert_eq!(
        Err(CursorError::BufferTooSmall),
        CoreWrite::write_all(&mut writer, &[4, 5])
    );
    assert_eq!(Ok(()), CoreWrite::write(&mut writer, 4));
    assert_eq!(Ok(()), CoreWrite::flush(&mut writer));

    let mut reader = writer.into_reader();
    let mut out = [0u8; 3];
    assert_eq!(Ok(()), CoreRead::fill(&mut reader, &mut out));
    assert_eq!([1, 2, 3], out);
    assert_eq!(Ok(4), CoreRead::read(&mut reader));
    assert_eq!(Err(CursorError::EndOfBuffer), CoreRead::read(&mut reader));
}

static FRAME: [u8; 7] = [0x02, 0x12, 0x34, 0x78, 0x56, 0x34, 0x12];

#[test]
fn reader_over_static_memory() {
    let mut reader = CheckedReader::from_slice(&FRAME);
    assert_eq!(7, reader.bytes_remaining());
    assert_eq!(0x02, reader.read_u8());
    assert_eq!(0x1234, reader.read_u16_big_endian());
    assert_eq!(0x1234_5678, reader.read_u32());
    assert!(reader.is_empty());

    // a checked read past the end yields 0 and leaves the position alone
    assert_eq!(0, reader.read_u16());
    assert_eq!(7, reader.bytes_read());
    assert_eq!(Err(CursorError::EndOfBuffer), reader.try_read_u8());

    reader.reset();
    let mut sink = [0u8; 7];
    let mut writer = CheckedWriter::new(&mut sink);
    assert_eq!(Ok(7), reader.drain_into(&mut writer));
    drop(writer);
    assert_eq!(FRAME, sink);
}

#[test]
fn reader_over_shared_borrow_of_a_received_frame() {
    let frame: Vec<u8> = vec![0xAA, 0x01, 0x00, 0xBB];
    let first = CheckedReader::from_slice(&frame[1..3]);
    let mut second = first.clone();
    assert_eq!(0x0001, second.read_u16());
    assert_eq!(2, first.bytes_remaining());
    assert_eq!(0xAA, frame[0]);
}

#[test]
#[should_panic]
fn unchecked_reader_over_static_memory_panics_past_the_end() {
    let mut reader = UncheckedReader::from_slice(&FRAME[..2]);
    reader.read_u32();
}

#[test]
fn reader_with_bounds() {
    let mut buffer = [0xFF, 0x01, 0x02, 0x03, 0xFF];
    let mut reader = CheckedReader::with_bounds(&mut buffer, 1, 4);
    assert_eq!(1, reader.begin());
    assert_eq!(4, reader.end());
    assert_eq!(3, reader.bytes_remaining());
    assert_eq!(0x0201, reader.read_u16());
    assert_eq!(0x03, reader.read_u8());
    assert_eq!(0, reader.read_u8());

    let mut buffer = [1, 2, 3];
    let mut reader = CheckedReader::with_bounds(&mut buffer, 2, 10);
    assert_eq!(1, reader.bytes_remaining());
    assert_eq!(3, reader.read_u8());
}

#[test]
fn reader_tracks_cursor() {
    let mut buffer = [0u8; 8];
    let mut cursor = CheckedCursor::new(&mut buffer);
    let mut reader = cursor.reader();
    assert!(reader.is_empty());

    for round in 0..3u16 {
        cursor.reset();
        cursor.write_u16(round);
        cursor.write_u16(round + 100);
        reader.track_cursor(&cursor);
        assert_eq!(4, reader.bytes_remaining());
        assert_eq!(round, reader.read_u16());
        assert_eq!(round + 100, reader.read_u16());
    }

    // tracking leaves the cursor in write mode
    assert_eq!(4, cursor.bytes_written());
    cursor.write_u8(7);
    assert_eq!(5, cursor.bytes_written());
}

#[cfg(feature = "embedded-hal-traits")]
mod serial_port {
    use embedded_hal::serial;
    use streambuf_core::{CheckedCursor, CheckedReader, CheckedWriter, TransferError};

    #[derive(Debug, PartialEq)]
    enum UartError {
        Overrun,
        TxFull,
    }

    /// A serial port that stalls once before every byte it moves.
    #[derive(Default)]
    struct Uart {
        rx: Vec<u8>,
        tx: Vec<u8>,
        tx_limit: Option<usize>,
        rx_stalled: bool,
        tx_stalled: bool,
        stalls: usize,
        flushes: usize,
    }

    impl serial::Read<u8> for Uart {
        type Error = UartError;

        fn read(&mut self) -> nb::Result<u8, UartError> {
            self.rx_stalled = !self.rx_stalled;
            if self.rx_stalled {
                self.stalls += 1;
                return Err(nb::Error::WouldBlock);
            }
            if self.rx.is_empty() {
                return Err(nb::Error::Other(UartError::Overrun));
            }
            Ok(self.rx.remove(0))
        }
    }

    impl serial::Write<u8> for Uart {
        type Error = UartError;

        fn write(&mut self, word: u8) -> nb::Result<(), UartError> {
            self.tx_stalled = !self.tx_stalled;
            if self.tx_stalled {
                self.stalls += 1;
                return Err(nb::Error::WouldBlock);
            }
            if Some(self.tx.len()) == self.tx_limit {
                return Err(nb::Error::Other(UartError::TxFull));
            }
            self.tx.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), UartError> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn drain_into_uart() {
        let mut buffer = [0u8; 8];
        let mut cursor = CheckedCursor::new(&mut buffer);
        cursor.write_string("AT\r\n");
        let mut reader = cursor.reader();

        let mut uart = Uart::default();
        assert_eq!(Ok(4), reader.drain_into(&mut uart));
        assert_eq!(b"AT\r\n".to_vec(), uart.tx);
        assert_eq!(4, uart.stalls);
        assert!(reader.is_empty());

        assert_eq!(Ok(()), streambuf_core::traits::CoreWrite::flush(&mut uart));
        assert_eq!(1, uart.flushes);
    }

    #[test]
    fn drain_into_uart_stops_at_error() {
        let mut reader = CheckedReader::from_slice(b"hello");
        let mut uart = Uart {
            tx_limit: Some(2),
            ..Uart::default()
        };
        assert_eq!(Err(UartError::TxFull), reader.drain_into(&mut uart));
        assert_eq!(b"he".to_vec(), uart.tx);
        assert_eq!(3, reader.bytes_remaining());
    }

    #[test]
    fn fill_from_uart() {
        let mut uart = Uart {
            rx: vec![0x34, 0x12, 0xAB],
            ..Uart::default()
        };
        let mut buffer = [0u8; 8];
        let mut writer = CheckedWriter::new(&mut buffer);

        assert_eq!(Ok(()), writer.fill_from(&mut uart, 2));
        assert_eq!(2, uart.stalls);
        assert_eq!(2, writer.bytes_written());

        // one byte left on the line, the failed transfer is rolled back
        assert_eq!(
            Err(TransferError::Io(UartError::Overrun)),
            writer.fill_from(&mut uart, 2)
        );
        assert_eq!(2, writer.bytes_written());

        let mut reader = writer.into_reader();
        assert_eq!(0x1234, reader.read_u16());
        assert!(reader.is_empty());
    }
}
