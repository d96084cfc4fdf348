//! Sensor access behind a typed read seam.
//!
//! The ranging loop only ever talks to a [`DistanceSource`]; the one real
//! implementation is [`TofSensor`], which binds a VL53L4CD on a Linux I²C
//! bus. Tests substitute scripted doubles.

use tracing::{debug, instrument};
use vl53l4cd::i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use vl53l4cd::{Status, Vl53l4cd, PERIPHERAL_ADDR};

/// Anything that can produce a distance reading on demand.
pub trait DistanceSource {
    /// Error produced when a read yields no usable distance.
    type Error;

    /// Current distance to the target, in millimeters.
    #[allow(async_fn_in_trait)]
    async fn distance(&mut self) -> Result<u16, Self::Error>;
}

/// Ways a single read can fail. Callers treat every variant the same; the
/// split only matters for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The I²C transaction itself failed.
    #[error("i2c transfer failed: {0}")]
    Bus(#[from] LinuxI2CError),
    /// The sensor answered but flagged the measurement as unusable.
    #[error("measurement rejected by sensor: {0:?}")]
    Range(Status),
}

/// A VL53L4CD on a Linux I²C bus, initialized and ranging continuously.
pub struct TofSensor {
    vl53: Vl53l4cd<LinuxI2CDevice>,
}

impl TofSensor {
    /// Open the sensor on the given I²C character device and start it
    /// ranging in continuous mode with a 50 ms timing budget.
    ///
    /// Fails if the bus cannot be claimed or the device does not respond at
    /// [`PERIPHERAL_ADDR`].
    #[instrument(err)]
    pub async fn open(path: &str) -> Result<Self, LinuxI2CError> {
        let dev = LinuxI2CDevice::new(path, PERIPHERAL_ADDR)?;
        let mut vl53 = Vl53l4cd::new(dev);

        vl53.init().await?;
        vl53.set_range_timing(50, 0).await?;
        vl53.start_ranging().await?;
        debug!("ranging started");

        Ok(Self { vl53 })
    }
}

impl DistanceSource for TofSensor {
    type Error = ReadError;

    async fn distance(&mut self) -> Result<u16, ReadError> {
        let measurement = self.vl53.measure().await?;

        if measurement.is_valid() {
            Ok(measurement.distance)
        } else {
            Err(ReadError::Range(measurement.status))
        }
    }
}
