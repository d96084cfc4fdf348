//! Poll a VL53L4CD over I²C and stream distances to stdout, one per line.
//!
//! Diagnostics go to stderr so the stdout stream stays machine-readable.

use std::io;

use anyhow::Context;
use rangefeed::TofSensor;
use tracing::info;

const I2C_BUS: &str = "/dev/i2c-1";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rangefeed=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let mut sensor = TofSensor::open(I2C_BUS)
        .await
        .with_context(|| format!("failed to bring up sensor on {}", I2C_BUS))?;
    info!("sensor ranging, streaming distances to stdout");

    let mut stdout = io::stdout();
    rangefeed::run(&mut sensor, &mut stdout).await?;

    Ok(())
}
