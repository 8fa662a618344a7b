//! Transmission gateway boundary.
//!
//! The buffer engine never talks to hardware itself; it only produces byte
//! payloads. A platform implements [`StripTransmitter`] over its output
//! peripheral, and the glue functions here stage one or more payloads and
//! fire them in a single send round, releasing the peripheral on every
//! exit path.

use core::fmt;

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Error from the transmission peripheral boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitError {
    /// The peripheral rejected channel setup.
    Setup,
    /// Sending the staged channels failed.
    Send,
    /// A generated payload does not fit the scratch capacity.
    PayloadTooLarge,
}

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Setup => "can't set up channel",
            Self::Send => "sending failed",
            Self::PayloadTooLarge => "payload exceeds scratch capacity",
        };
        f.write_str(text)
    }
}

/// Hardware transmission peripheral.
///
/// Implement this trait to support different output platforms. Channels
/// are staged with `setup` and emitted together by `send`; `release`
/// frees the peripheral and must be safe to call after a failure.
pub trait StripTransmitter {
    /// Stage a payload on an output channel.
    ///
    /// `repeats` of zero sends the payload once.
    fn setup(
        &mut self,
        pin: u8,
        channel: u8,
        payload: &[u8],
        bit_time: Duration,
        repeats: u32,
    ) -> core::result::Result<(), TransmitError>;

    /// Send all staged channels at once.
    fn send(&mut self) -> core::result::Result<(), TransmitError>;

    /// Release the peripheral.
    fn release(&mut self);
}

/// One strip payload to stage on a pin.
#[derive(Debug, Clone, Copy)]
pub struct StripWrite<'a> {
    pub pin: u8,
    /// Finished bytes, usually a buffer's `dump`.
    pub payload: &'a [u8],
    pub bit_time: Duration,
}

/// One pulse chain to emit on a pin.
#[derive(Debug, Clone, Copy)]
pub struct StepChain {
    pub pin: u8,
    /// Number of high bits to emit.
    pub steps: u32,
    pub bit_time: Duration,
}

/// Stage every strip payload, then send them in one round.
pub fn write_strips<T: StripTransmitter>(
    tx: &mut T,
    writes: &[StripWrite<'_>],
) -> core::result::Result<(), TransmitError> {
    for write in writes {
        #[cfg(feature = "esp32-log")]
        println!(
            "[write_strips] staging {} bytes on pin {}",
            write.payload.len(),
            write.pin
        );
        if let Err(err) = tx.setup(write.pin, 1, write.payload, write.bit_time, 0) {
            tx.release();
            return Err(err);
        }
    }

    let sent = tx.send();
    tx.release();
    sent
}

/// Stage a pulse-train payload per chain, then send them in one round.
///
/// `SCRATCH` bounds the per-chain payload size in bytes.
pub fn write_steps<T: StripTransmitter, const SCRATCH: usize>(
    tx: &mut T,
    chains: &[StepChain],
) -> core::result::Result<(), TransmitError> {
    for chain in chains {
        let payload = match step_payload::<SCRATCH>(chain.steps) {
            Ok(payload) => payload,
            Err(err) => {
                tx.release();
                return Err(err);
            }
        };
        if let Err(err) = tx.setup(chain.pin, 1, &payload, chain.bit_time, chain.steps) {
            tx.release();
            return Err(err);
        }
    }

    let sent = tx.send();
    tx.release();
    sent
}

/// One high bit per step, zero-padded to a whole number of bytes.
fn step_payload<const SCRATCH: usize>(
    steps: u32,
) -> core::result::Result<Vec<u8, SCRATCH>, TransmitError> {
    let mut payload = Vec::new();
    for _ in 0..steps / 8 {
        payload
            .push(0xff)
            .map_err(|_| TransmitError::PayloadTooLarge)?;
    }
    let leftover = steps % 8;
    if leftover != 0 {
        payload
            .push(0xff << (8 - leftover))
            .map_err(|_| TransmitError::PayloadTooLarge)?;
    }
    Ok(payload)
}
