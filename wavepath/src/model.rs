use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Target range used by the normalized path generator; keeps the curve
    /// off the exact top and bottom edges of the drawing area.
    pub const NORMALIZED: Range = Range { min: 2.0, max: 99.0 };

    pub const fn new(min: f64, max: f64) -> Range { Range { min, max } }
    pub fn span(&self) -> f64 { self.max - self.min }
    pub fn midpoint(&self) -> f64 { self.min + self.span() / 2.0 }
}

impl Default for Range {
    fn default() -> Self { Range::NORMALIZED }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> PathData { PathData { commands: Vec::new() } }
    pub fn with_capacity(n: usize) -> PathData { PathData { commands: Vec::with_capacity(n) } }
    pub fn push(&mut self, cmd: PathCommand) { self.commands.push(cmd); }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_closed(&self) -> bool { matches!(self.commands.last(), Some(PathCommand::Close)) }
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::CubicTo { .. })).count()
    }
}

/// Runtime options for path generation. Missing fields take their defaults
/// when deserialised from JSON or a JS object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    pub width: f64,
    pub height: f64,
    pub closed: bool,
    pub range: Range,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions { width: 100.0, height: 100.0, closed: false, range: Range::NORMALIZED }
    }
}
