//! Probe utility for eyeballing the live display.
#![allow(missing_docs)]

use anyhow::Result;
use logpane::{ProgressRenderer, TermSurface};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let steps = 8;
    let mut status = ProgressRenderer::new(TermSurface::new(), steps)?;
    status.set_title("logpane probe")?;

    for step in 1..=steps {
        for line in 0..3 {
            status.write_info(format!("step {step}: unit {line} processed"))?;
            thread::sleep(Duration::from_millis(60));
        }
        if step == 3 {
            status.write_warning(format!("step {step}: checksum mismatch, retried"))?;
        }
        if step == 6 {
            status.write_error(format!("step {step}: upstream refused connection"))?;
        }
        status.advance(1)?;
        thread::sleep(Duration::from_millis(120));
    }

    status.finish(true)?;
    Ok(())
}
