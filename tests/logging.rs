#![cfg(feature = "log")]

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use streambuf_core::{CheckedCursor, CheckedReader, CheckedWriter};

/// Keeps every trace record so the messages can be asserted on.
struct Capture {
    lines: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Trace {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *CAPTURE.lines.lock().unwrap())
}

// One test only: the logger is process wide.
#[test]
fn dropped_accesses_are_traced() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut buffer = [0u8; 2];
    let mut cursor = CheckedCursor::new(&mut buffer);
    cursor.write_u16(0xABCD);
    assert!(take_lines().is_empty());

    cursor.write_u32(1);
    cursor.write_string_with_zero_terminator("Hi");
    cursor.fill(0, 3);
    assert_eq!(
        vec![
            "write_u32: dropped 4 byte access, 0 bytes remaining".to_string(),
            "write_string_with_zero_terminator: dropped 3 byte access, 0 bytes remaining"
                .to_string(),
            "fill: dropped 3 byte access, 0 bytes remaining".to_string(),
        ],
        take_lines()
    );

    cursor.switch_to_reader();
    cursor.read_u8();
    cursor.read_u16();
    assert_eq!(
        vec!["read_u16: dropped 2 byte access, 1 bytes remaining".to_string()],
        take_lines()
    );

    let mut reader = CheckedReader::from_slice(&[1, 2, 3]);
    reader.advance(4);
    let mut out = [0u8; 8];
    reader.read_data(&mut out);
    assert_eq!(
        vec![
            "advance: dropped 4 byte access, 3 bytes remaining".to_string(),
            "read_data: dropped 8 byte access, 3 bytes remaining".to_string(),
        ],
        take_lines()
    );

    // try_ variants report through their Result and stay quiet
    let mut target = [0u8; 1];
    let mut writer = CheckedWriter::new(&mut target);
    assert!(writer.try_write_u16(7).is_err());
    assert!(take_lines().is_empty());
}
