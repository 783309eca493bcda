/// Output formatting: text, table and JSON modes.
use std::io::{self, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use log::debug;
use serde::Serialize;

use super::args::OutputFormat;
use crate::airports::{AirportRegistry, FieldValue, OutputConfig, render_text};
use crate::types::{AirportOutput, ErrorOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

// --- Airports ---

/// Write the registry to `out` (stdout in a real run) in the context's format.
///
/// A closed pipe (e.g. `| head`) ends output quietly.
///
/// # Errors
///
/// Returns any other I/O error from writing.
pub fn write_airports(
    out: &mut impl Write,
    registry: &AirportRegistry,
    config: &OutputConfig,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match write_airports_to(out, registry, config, ctx).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_airports_to(
    out: &mut impl Write,
    registry: &AirportRegistry,
    config: &OutputConfig,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Text => {
            for line in render_text(config, registry) {
                writeln!(out, "{line}")?;
            }
            Ok(())
        }
        OutputFormat::Table => write_airports_table(out, registry, config, ctx),
        OutputFormat::Json => write_json(out, &project_all(registry, config)),
        OutputFormat::Ndjson => {
            for airport in project_all(registry, config) {
                writeln!(out, "{}", to_json(&airport, false)?)?;
            }
            Ok(())
        }
    }
}

fn project_all(registry: &AirportRegistry, config: &OutputConfig) -> Vec<AirportOutput> {
    let fields = config.projection();
    registry
        .records()
        .map(|record| AirportOutput::project(record, &fields))
        .collect()
}

fn write_airports_table(
    out: &mut impl Write,
    registry: &AirportRegistry,
    config: &OutputConfig,
    ctx: &OutputCtx,
) -> io::Result<()> {
    let fields = config.projection();
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    if !ctx.no_header {
        let headers: Vec<Cell> = fields
            .iter()
            .flat_map(|f| f.columns())
            .map(|c| Cell::new(c.to_uppercase()))
            .collect();
        table.set_header(headers);
    }

    for record in registry.records() {
        let row: Vec<Cell> = fields
            .iter()
            .flat_map(|f| f.values(record))
            .map(|v| match v {
                FieldValue::Coordinate(None) => Cell::new(""),
                v => Cell::new(v),
            })
            .collect();
        table.add_row(row);
    }

    writeln!(out, "{table}")
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Silent unless debug logging is enabled.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!("{}: {ms:.2}ms", self.label);
    }
}

// --- Generic JSON helpers ---

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> io::Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    s.map_err(io::Error::other)
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    writeln!(out, "{}", to_json(value, true)?)
}
