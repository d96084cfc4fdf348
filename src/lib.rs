//! Continuously sample a [VL53L4CD ToF distance sensor](https://www.st.com/en/imaging-and-photonics-solutions/vl53l4cd.html)
//! and stream the readings to standard output, one per line.
//!
//! Each cycle prints either the measured distance in millimeters or `-1`
//! when no usable measurement could be obtained, flushed immediately so a
//! consumer reading the pipe sees every sample as it happens. A successful
//! read is followed by a [`SAMPLE_INTERVAL`] pause (≈ 20 Hz), a failed one
//! by the longer [`ERROR_BACKOFF`].
//!
//! ```no_run
//! # tokio_test::block_on(async {
//! use rangefeed::TofSensor;
//!
//! let mut sensor = TofSensor::open("/dev/i2c-1").await?;
//! let mut stdout = std::io::stdout();
//!
//! rangefeed::run(&mut sensor, &mut stdout).await?;
//! # Ok::<(), anyhow::Error>(())
//! # });
//! ```

#![warn(missing_docs)]

pub mod sensor;
pub mod stream;

pub use sensor::{DistanceSource, ReadError, TofSensor};
pub use stream::run;

use core::time::Duration;

/// Pause after a successfully printed reading (≈ 20 Hz sampling).
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

/// Pause after a failed reading, strictly longer than [`SAMPLE_INTERVAL`].
pub const ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Line printed for a cycle that produced no usable measurement.
pub const ERROR_SENTINEL: i32 = -1;
