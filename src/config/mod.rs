//! Type-level configuration of the cursor types.
//!
//! ### Bounds policies
//!
//! | Policy        | Write past the end | Read past the end | Position      |
//! |---------------|--------------------|-------------------|---------------|
//! | [Checked]     | dropped            | returns `0`       | unchanged     |
//! | [Unchecked]   | panics             | panics            | n/a           |
//!
//! [Checked] is the default for every cursor type. Both policies also offer `try_*` methods which
//! always check and report the outcome as a [CursorError](crate::CursorError).
//!
//! ```
//! use streambuf_core::config::Unchecked;
//! use streambuf_core::Cursor;
//!
//! let mut buffer = [0u8; 8];
//! let mut header: Cursor<Unchecked> = Cursor::new(&mut buffer);
//! if header.bytes_remaining() >= 6 {
//!     header.write_u16_big_endian(0x0102);
//!     header.write_u32_big_endian(0x0304_0506);
//! }
//! assert_eq!(6, header.bytes_written());
//! ```

mod policy;

pub use self::policy::{BoundsPolicy, Checked, Unchecked};
