//! The read → print → pause cycle.

use std::fmt;
use std::io::{self, Write};

use tracing::trace;

use crate::sensor::DistanceSource;
use crate::{ERROR_BACKOFF, ERROR_SENTINEL, SAMPLE_INTERVAL};

/// Drive `source` forever, writing one line per cycle to `out`.
///
/// A successful read prints the millimeter value and pauses for
/// [`SAMPLE_INTERVAL`]; any failure prints [`ERROR_SENTINEL`] instead and
/// pauses for [`ERROR_BACKOFF`]. Every line is flushed as it is written.
/// Failures are absorbed without inspection and the loop has no exit of its
/// own; it only returns if `out` stops accepting writes.
pub async fn run<S, W>(source: &mut S, out: &mut W) -> io::Result<()>
where
    S: DistanceSource,
    S::Error: fmt::Debug,
    W: Write,
{
    loop {
        match source.distance().await {
            Ok(mm) => {
                writeln!(out, "{}", mm)?;
                out.flush()?;
                tokio::time::sleep(SAMPLE_INTERVAL).await;
            }
            Err(err) => {
                trace!("read failed: {:?}", err);
                writeln!(out, "{}", ERROR_SENTINEL)?;
                out.flush()?;
                tokio::time::sleep(ERROR_BACKOFF).await;
            }
        }
    }
}
