//! Byte-at-a-time endpoints that cursors can pull from and push into.
//!
//! ```
//! use streambuf_core::{CheckedCursor, CheckedWriter};
//!
//! let mut source = [0u8; 8];
//! let mut cursor = CheckedCursor::new(&mut source);
//! cursor.write_string("ping");
//! let mut reader = cursor.reader();
//!
//! let mut target = [0u8; 8];
//! let mut writer = CheckedWriter::new(&mut target);
//! assert_eq!(Ok(4), reader.drain_into(&mut writer));
//! assert_eq!(4, writer.bytes_written());
//! ```

mod core_read;
mod core_write;

#[cfg(feature = "embedded-hal-traits")]
mod impl_embedded_hal;

pub use self::core_read::CoreRead;
pub use self::core_write::CoreWrite;
