//! Fixed-shape pixel buffer and its transformation algebra.
//!
//! A [`PixelBuffer`] holds `led_count * channels_per_led` bytes in a
//! fixed-capacity container. In-place operations (fill, fade, shift,
//! replace, set, mix) validate everything up front and either mutate the
//! whole target or leave it untouched; `sub` and `concat` build new
//! buffers and leave their operands alone.

use core::fmt;

use heapless::Vec;

use crate::Rgb;
use crate::error::{BufferError, Result};
use crate::position::{resolve, resolve_window};
use crate::shift::{ShiftMode, shift_window};

/// Direction for [`PixelBuffer::fade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeDirection {
    /// Divide every byte by the factor (dim).
    #[default]
    Out,
    /// Multiply every byte by the factor, saturating at 255 (brighten).
    In,
}

/// Source of a single-pixel [`PixelBuffer::set`] write.
#[derive(Debug, Clone, Copy)]
pub enum PixelSource<'a> {
    /// Exactly `channels_per_led` values for the addressed pixel.
    Channels(&'a [u8]),
    /// Raw bytes copied starting at the addressed pixel's byte offset,
    /// possibly spanning several pixels.
    Raw(&'a [u8]),
}

/// Source of a [`PixelBuffer::replace`].
#[derive(Debug, Clone, Copy)]
pub enum ReplaceSource<'a, const CAP: usize> {
    /// Raw bytes; the length must be a whole number of pixels.
    Raw(&'a [u8]),
    /// Another buffer with the same `channels_per_led`.
    Buffer(&'a PixelBuffer<CAP>),
}

/// Per-LED channel data for one strip.
///
/// `CAP` is the compile-time byte capacity backing the buffer. Shape is
/// fixed at creation: `led_count` pixels of `channels_per_led` bytes each
/// (3 for RGB, 4 for RGBW, or anything else the strip speaks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const CAP: usize> {
    led_count: usize,
    channels_per_led: usize,
    values: Vec<u8, CAP>,
}

impl<const CAP: usize> PixelBuffer<CAP> {
    /// Create a zero-filled buffer for `led_count` pixels.
    ///
    /// Both dimensions must be non-zero. Fails with `Overflow` if the
    /// byte length exceeds `CAP`.
    pub fn new(led_count: usize, channels_per_led: usize) -> Result<Self> {
        if led_count == 0 || channels_per_led == 0 {
            return Err(BufferError::InvalidArgument);
        }
        let byte_len = led_count
            .checked_mul(channels_per_led)
            .ok_or(BufferError::Overflow)?;

        let mut values = Vec::new();
        values
            .resize(byte_len, 0)
            .map_err(|()| BufferError::Overflow)?;

        Ok(Self {
            led_count,
            channels_per_led,
            values,
        })
    }

    /// Build a 3-channel buffer from a rendered RGB frame.
    pub fn from_rgb(colors: &[Rgb]) -> Result<Self> {
        let mut buffer = Self::empty(3);
        buffer.led_count = colors.len();
        for color in colors {
            buffer
                .values
                .extend_from_slice(&[color.r, color.g, color.b])
                .map_err(|()| BufferError::Overflow)?;
        }
        Ok(buffer)
    }

    /// Zero-length buffer that keeps the channel shape.
    const fn empty(channels_per_led: usize) -> Self {
        Self {
            led_count: 0,
            channels_per_led,
            values: Vec::new(),
        }
    }

    /// Number of pixels.
    pub const fn size(&self) -> usize {
        self.led_count
    }

    /// Bytes per pixel.
    pub const fn channels_per_led(&self) -> usize {
        self.channels_per_led
    }

    pub const fn is_empty(&self) -> bool {
        self.led_count == 0
    }

    /// The raw underlying bytes, verbatim.
    pub fn dump(&self) -> &[u8] {
        &self.values
    }

    /// Sum of all bytes. A coarse proxy for the strip's power draw.
    pub fn power(&self) -> u32 {
        self.values.iter().map(|&value| u32::from(value)).sum()
    }

    /// Write the given per-channel color to every pixel.
    pub fn fill(&mut self, channel_values: &[u8]) -> Result<()> {
        if channel_values.len() != self.channels_per_led {
            return Err(BufferError::ShapeMismatch);
        }
        for pixel in self.values.chunks_exact_mut(self.channels_per_led) {
            pixel.copy_from_slice(channel_values);
        }
        Ok(())
    }

    /// Overwrite an existing 3-channel buffer from a rendered RGB frame.
    pub fn copy_from_rgb(&mut self, colors: &[Rgb]) -> Result<()> {
        if self.channels_per_led != 3 || colors.len() != self.led_count {
            return Err(BufferError::ShapeMismatch);
        }
        for (pixel, color) in self.values.chunks_exact_mut(3).zip(colors) {
            pixel.copy_from_slice(&[color.r, color.g, color.b]);
        }
        Ok(())
    }

    /// Dim or brighten every byte by an integer factor.
    ///
    /// Fading out divides with truncation; fading in multiplies in a
    /// wider type and saturates at 255. The factor must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn fade(&mut self, factor: u16, direction: FadeDirection) -> Result<()> {
        if factor == 0 {
            return Err(BufferError::InvalidArgument);
        }
        for value in &mut self.values {
            *value = match direction {
                FadeDirection::Out => (u16::from(*value) / factor) as u8,
                FadeDirection::In => {
                    (u32::from(*value) * u32::from(factor)).min(255) as u8
                }
            };
        }
        Ok(())
    }

    /// Shift the whole strip by `amount` pixels.
    pub fn shift(&mut self, amount: isize, mode: ShiftMode) -> Result<()> {
        self.shift_range(amount, mode, 1, -1)
    }

    /// Shift the pixels inside the inclusive 1-based window `[start, end]`.
    ///
    /// Positive amounts move pixels toward higher indices. Vacated pixels
    /// are zeroed or wrapped according to `mode`; bytes outside the window
    /// are never touched. An empty window or a zero amount is a no-op;
    /// `|amount|` must otherwise be smaller than the window.
    #[allow(clippy::cast_possible_wrap)]
    pub fn shift_range(
        &mut self,
        amount: isize,
        mode: ShiftMode,
        start: isize,
        end: isize,
    ) -> Result<()> {
        let (offset, window) = resolve_window(start, end, self.led_count);
        if window == 0 {
            return Ok(());
        }
        if amount <= -(window as isize) || amount >= window as isize {
            return Err(BufferError::InvalidArgument);
        }
        if amount == 0 {
            return Ok(());
        }

        let cpl = self.channels_per_led;
        let bytes = &mut self.values[offset * cpl..(offset + window) * cpl];
        shift_window(bytes, amount, cpl, mode);
        Ok(())
    }

    /// Copy whole pixels from `source` into this buffer at `dest_start`.
    ///
    /// The destination region is fully overwritten; nothing is written if
    /// any check fails. A raw source must be a whole number of pixels.
    #[allow(clippy::cast_sign_loss)]
    pub fn replace<const SRC: usize>(
        &mut self,
        source: ReplaceSource<'_, SRC>,
        dest_start: isize,
    ) -> Result<()> {
        let start = resolve(dest_start, self.led_count);
        if start < 1 {
            return Err(BufferError::OutOfBounds);
        }
        let start = start as usize;

        let (bytes, src_leds) = match source {
            ReplaceSource::Raw(raw) => {
                if !raw.len().is_multiple_of(self.channels_per_led) {
                    return Err(BufferError::InvalidArgument);
                }
                (raw, raw.len() / self.channels_per_led)
            }
            ReplaceSource::Buffer(rhs) => {
                if rhs.channels_per_led != self.channels_per_led {
                    return Err(BufferError::ShapeMismatch);
                }
                (rhs.values.as_slice(), rhs.led_count)
            }
        };

        if src_leds + start - 1 > self.led_count {
            return Err(BufferError::OutOfBounds);
        }

        let offset = (start - 1) * self.channels_per_led;
        self.values[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Recompute every byte as a fixed-point weighted sum of sources.
    ///
    /// A factor of 256 is a 100% contribution; negative factors subtract.
    /// Each byte becomes `clamp(sum((source[i] * factor) >> 8), 0, 255)`.
    /// Every source must have exactly this buffer's shape. The previous
    /// contents do not participate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn mix<const SRC: usize>(
        &mut self,
        sources: &[(i32, &PixelBuffer<SRC>)],
    ) -> Result<()> {
        for (_, source) in sources {
            if source.led_count != self.led_count
                || source.channels_per_led != self.channels_per_led
            {
                return Err(BufferError::ShapeMismatch);
            }
        }

        for i in 0..self.values.len() {
            let mut total: i32 = 0;
            for (factor, source) in sources {
                total += (i32::from(source.values[i]) * factor) >> 8;
            }
            self.values[i] = total.clamp(0, 255) as u8;
        }
        Ok(())
    }

    /// The channel values of the 1-based pixel `led`.
    pub fn get(&self, led: usize) -> Result<&[u8]> {
        let offset = self.pixel_offset(led)?;
        Ok(&self.values[offset..offset + self.channels_per_led])
    }

    /// Write one pixel (or, for a raw source, a run of bytes starting at
    /// that pixel's offset).
    pub fn set(&mut self, led: usize, source: PixelSource<'_>) -> Result<()> {
        let offset = self.pixel_offset(led)?;
        match source {
            PixelSource::Channels(channels) => {
                if channels.len() != self.channels_per_led {
                    return Err(BufferError::ShapeMismatch);
                }
                self.values[offset..offset + channels.len()].copy_from_slice(channels);
            }
            PixelSource::Raw(raw) => {
                if offset + raw.len() > self.values.len() {
                    return Err(BufferError::Overflow);
                }
                self.values[offset..offset + raw.len()].copy_from_slice(raw);
            }
        }
        Ok(())
    }

    /// Copy of the inclusive 1-based pixel window `[start, end]`.
    ///
    /// Out-of-range positions are clamped; an inverted window yields an
    /// empty buffer with the same channel shape.
    pub fn sub(&self, start: isize, end: isize) -> Self {
        let (offset, window) = resolve_window(start, end, self.led_count);
        let cpl = self.channels_per_led;
        let bytes = &self.values[offset * cpl..(offset + window) * cpl];
        match Vec::from_slice(bytes) {
            Ok(values) => Self {
                led_count: window,
                channels_per_led: cpl,
                values,
            },
            // A window of self always fits within the same capacity.
            Err(()) => Self::empty(cpl),
        }
    }

    /// New buffer holding this buffer's pixels followed by `rhs`'s.
    pub fn concat<const SRC: usize>(&self, rhs: &PixelBuffer<SRC>) -> Result<Self> {
        if self.channels_per_led != rhs.channels_per_led {
            return Err(BufferError::ShapeMismatch);
        }
        let mut values = Vec::from_slice(&self.values).map_err(|()| BufferError::Overflow)?;
        values
            .extend_from_slice(&rhs.values)
            .map_err(|()| BufferError::Overflow)?;
        Ok(Self {
            led_count: self.led_count + rhs.led_count,
            channels_per_led: self.channels_per_led,
            values,
        })
    }

    fn pixel_offset(&self, led: usize) -> Result<usize> {
        if led < 1 || led > self.led_count {
            return Err(BufferError::OutOfBounds);
        }
        Ok((led - 1) * self.channels_per_led)
    }
}

/// Renders the buffer grouped by pixel, e.g. `[(0,255,0),(0,255,0)]`.
impl<const CAP: usize> fmt::Display for PixelBuffer<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, pixel) in self.values.chunks_exact(self.channels_per_led).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("(")?;
            for (j, value) in pixel.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str(")")?;
        }
        f.write_str("]")
    }
}
