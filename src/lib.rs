#![no_std]

pub mod buffer;
pub mod error;
pub mod position;
pub mod shift;
pub mod transmit;

pub use buffer::{FadeDirection, PixelBuffer, PixelSource, ReplaceSource};
pub use error::{BufferError, Result};
pub use shift::ShiftMode;
pub use transmit::{
    StepChain, StripTransmitter, StripWrite, TransmitError, write_steps, write_strips,
};

pub use embassy_time::Duration;

/// Per-LED color type shared with the rendering side
pub type Rgb = smart_leds::RGB8;
