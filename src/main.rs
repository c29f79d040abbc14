// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generate the Marching Cubes 33 lookup table as C++ source.
//!
//! Writes the header followed by the source to stdout. Logging goes to
//! stderr and is controlled by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use marching_cubes_33::{emit, LookupTable};
use std::io::Write;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let table = LookupTable::build().context("building the lookup table")?;
    let header = emit::header();
    let source = emit::source(&table).context("emitting the lookup table")?;
    info!(
        header_bytes = header.len(),
        source_bytes = source.len(),
        "source emitted"
    );

    let mut out = std::io::stdout().lock();
    out.write_all(header.as_bytes())?;
    out.write_all(b"\n")?;
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}
