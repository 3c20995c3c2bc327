use crate::model::{PathCommand, PathData, PathOptions};
use serde::Serialize;
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn to_json_impl(p: &PathData) -> Value {
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        d: String,
        closed: bool,
        segments: usize,
        commands: &'a [PathCommand],
    }
    serde_json::to_value(Doc {
        version: DOC_VERSION,
        d: p.to_svg_d(),
        closed: p.is_closed(),
        segments: p.segment_count(),
        commands: &p.commands,
    })
    .unwrap_or(Value::Null)
}

/// Parses and validates a [`PathOptions`] document; unknown fields are ignored.
pub fn options_from_json_impl(v: Value) -> Result<PathOptions, (&'static str, String)> {
    let opts: PathOptions = serde_json::from_value(v).map_err(|e| ("json_parse", format!("{}", e)))?;
    crate::check_options(&opts)?;
    Ok(opts)
}

pub fn options_from_json_str(s: &str) -> Result<PathOptions, (&'static str, String)> {
    let v: Value = serde_json::from_str(s).map_err(|e| ("json_parse", format!("{}", e)))?;
    options_from_json_impl(v)
}
