use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{BenchError, Result};

/// Renders pretty JSON with a four-space indent and no trailing
/// newline. Struct fields are declared in key order, so keys come out
/// sorted.
pub fn render_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = render_pretty(value)?;
    std::fs::write(path, rendered).map_err(|err| BenchError::write(path, err))
}
