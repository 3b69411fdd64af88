/// Selects how a cursor reacts when an access does not fit in the bytes left in its region.
///
/// The policy is a type parameter of [Cursor](crate::Cursor), [Reader](crate::Reader) and
/// [Writer](crate::Writer), so the choice is made once per instantiation and costs nothing at
/// runtime.
pub trait BoundsPolicy {
    /// Tells whether an access of `len` bytes may go ahead while `remaining` bytes are left.
    ///
    /// When this returns `false` the cursor leaves its position and the region untouched.
    fn admits(remaining: usize, len: usize) -> bool;
}

/// Every access is trusted.
///
/// The caller is expected to have done its own capacity accounting, e.g. with
/// `bytes_remaining()` before encoding a fixed-size header. An access that runs past the end of
/// the region panics on the slice bounds check instead of touching memory outside of it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Unchecked;

/// Every access is tested against the remaining capacity first.
///
/// A write that does not fit is silently dropped, and a read that does not fit yields `0`. In
/// both cases the position does not move and no partial access happens. Use this for anything
/// that handles externally sourced lengths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Checked;

impl BoundsPolicy for Unchecked {
    #[inline(always)]
    fn admits(_remaining: usize, _len: usize) -> bool {
        true
    }
}

impl BoundsPolicy for Checked {
    #[inline(always)]
    fn admits(remaining: usize, len: usize) -> bool {
        len <= remaining
    }
}
