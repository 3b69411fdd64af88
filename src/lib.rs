#![warn(missing_docs)]
#![no_std]

//! Embedded stream buffer
//!
//! This crate packs and unpacks fixed-width integers, `f32` bit patterns, raw byte blocks and
//! strings in a single caller-owned memory region. Nothing is allocated: a cursor borrows the
//! region, writes into it, and the same bytes are then read back from the same memory.
//!
//! Three cursor types share one implementation:
//! - [Cursor] can both read and write. [Cursor::switch_to_reader] turns the bytes written so far
//!   into the readable region, in place.
//! - [Writer] can only write, and [Reader] can only read. A reader is usually a snapshot of a
//!   writer (or a cursor) bounded by what had been written at that point.
//!
//! Each type is generic over a [BoundsPolicy](config::BoundsPolicy). With
//! [Checked](config::Checked), the default, a write that does not fit is dropped and a read that
//! does not fit yields `0`, leaving the position where it was. With
//! [Unchecked](config::Unchecked) the caller vouches for the sizes. Every primitive also has a
//! `try_` variant that reports a [CursorError] instead.
//!
//! Multi-byte values are little-endian unless the method name says `big_endian`; the `_with`
//! variants take any [byteorder::ByteOrder].
//!
//! ```
//! use streambuf_core::CheckedCursor;
//!
//! let mut buffer = [0xFFu8; 2];
//! let mut cursor = CheckedCursor::new(&mut buffer);
//! cursor.write_u16(0xABCD);
//! assert!(cursor.is_full());
//!
//! // does not fit, nothing happens
//! cursor.write_u32(0x1234_5678);
//! assert_eq!(2, cursor.bytes_written());
//! # drop(cursor);
//! assert_eq!([0xCD, 0xAB], buffer);
//! ```

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod config;
pub mod traits;

mod cursor;
mod error;
mod reader;
mod region;
mod writer;

pub use self::cursor::{CheckedCursor, Cursor, UncheckedCursor};
pub use self::error::{CursorError, TransferError};
pub use self::reader::{CheckedReader, Reader, UncheckedReader};
pub use self::region::region;
pub use self::writer::{CheckedWriter, UncheckedWriter, Writer};
