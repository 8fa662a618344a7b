//! 1-based, end-relative position handling.
//!
//! Positions follow string-slicing conventions: position 1 is the first
//! pixel and negative positions count back from the end (`-1` is the last
//! pixel). Clamping is left to the call site because it differs between
//! range starts (floor at 1) and range ends (cap at the pixel count).

/// Resolve a possibly negative position against `len` elements.
///
/// Negative positions are end-relative. The result is floored at zero and
/// otherwise unclamped.
#[allow(clippy::cast_possible_wrap)]
pub const fn resolve(pos: isize, len: usize) -> isize {
    let pos = if pos < 0 { pos + len as isize + 1 } else { pos };
    if pos >= 0 { pos } else { 0 }
}

/// Resolve an inclusive 1-based `[start, end]` window against `len` pixels.
///
/// Returns the zero-based offset of the window and its size in pixels.
/// An inverted window has size zero.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) const fn resolve_window(start: isize, end: isize, len: usize) -> (usize, usize) {
    let mut start = resolve(start, len);
    let mut end = resolve(end, len);
    if start < 1 {
        start = 1;
    }
    if end > len as isize {
        end = len as isize;
    }
    if start > end {
        return (0, 0);
    }
    ((start - 1) as usize, (end - start + 1) as usize)
}
