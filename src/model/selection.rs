//! Selection index arithmetic
//!
//! A selection is `Option<usize>`: `None` means no token is selected. The
//! signed form (`-1` for none) is used for requests coming from the outside,
//! which may be out of range in either direction.

/// Clamp a requested index into a list of `len` tokens
///
/// Empty list gives no selection; below zero clamps to the first token,
/// beyond the end clamps to the last.
pub fn clamp_index(requested: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if requested < 0 {
        Some(0)
    } else {
        Some((requested as usize).min(len - 1))
    }
}

/// Step the selection by `direction`, wrapping at either end
///
/// With no current selection, stepping forward lands on the first token and
/// stepping backward on the last.
pub fn wrap_index(current: Option<usize>, direction: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = as_signed(current) + direction;
    if next < 0 {
        Some(len - 1)
    } else if next as usize >= len {
        Some(0)
    } else {
        Some(next as usize)
    }
}

/// Signed form of a selection (`-1` for none)
#[inline]
pub fn as_signed(selection: Option<usize>) -> isize {
    selection.map_or(-1, |i| i as isize)
}
