//! Windowed pixel shifting.
//!
//! The shift operates on a byte slice that is already cut down to the
//! resolved window, so wrap-around never reaches bytes outside of it.

/// What happens to the region a shift vacates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftMode {
    /// Vacated pixels are zero-filled; shifted-out pixels are lost.
    #[default]
    Logical,
    /// Shifted-out pixels wrap around into the vacated region.
    Circular,
}

/// Shift the window by `amount` pixels.
///
/// Positive amounts move pixels toward higher indices. The caller has
/// already validated `|amount| < window size in pixels`.
pub(crate) fn shift_window(
    window: &mut [u8],
    amount: isize,
    channels_per_led: usize,
    mode: ShiftMode,
) {
    let magnitude = amount.unsigned_abs() * channels_per_led;

    if amount > 0 {
        window.rotate_right(magnitude);
        if mode == ShiftMode::Logical {
            window[..magnitude].fill(0);
        }
    } else {
        window.rotate_left(magnitude);
        if mode == ShiftMode::Logical {
            let len = window.len();
            window[len - magnitude..].fill(0);
        }
    }
}
