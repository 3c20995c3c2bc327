use crate::model::{PathCommand, PathData};
use std::fmt;

/// Formats a number the way JavaScript's `Number#toString` does: shortest
/// round-trip digits, exponent form outside `[1e-6, 1e21)`, `-0` as `0`.
pub fn fmt_num(v: f64) -> String {
    let mut s = String::new();
    push_num(&mut s, v);
    s
}

pub fn push_num(out: &mut String, v: f64) {
    use std::fmt::Write;
    if v.is_nan() { out.push_str("NaN"); return; }
    if v.is_infinite() { out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" }); return; }
    if v == 0.0 { out.push('0'); return; }
    let a = v.abs();
    if a >= 1e21 || a < 1e-6 {
        let e = format!("{:e}", v);
        match e.split_once('e') {
            Some((mant, exp)) if !exp.starts_with('-') => { let _ = write!(out, "{}e+{}", mant, exp); }
            _ => out.push_str(&e),
        }
    } else {
        let _ = write!(out, "{}", v);
    }
}

fn push_pair(out: &mut String, x: f64, y: f64) {
    push_num(out, x);
    out.push(' ');
    push_num(out, y);
}

pub fn push_command(out: &mut String, cmd: &PathCommand) {
    match *cmd {
        PathCommand::MoveTo { x, y } => { out.push('M'); push_pair(out, x, y); }
        PathCommand::CubicTo { x1, y1, x2, y2, x, y } => {
            out.push('C');
            push_pair(out, x1, y1);
            out.push(' ');
            push_pair(out, x2, y2);
            out.push(' ');
            push_pair(out, x, y);
        }
        PathCommand::LineTo { x, y } => { out.push('L'); push_pair(out, x, y); }
        PathCommand::Close => out.push('Z'),
    }
}

pub fn to_svg_d_impl(p: &PathData) -> String {
    // ~48 bytes per cubic segment at typical precision
    let mut d = String::with_capacity(p.commands.len() * 48);
    for (i, cmd) in p.commands.iter().enumerate() {
        if i > 0 { d.push(' '); }
        push_command(&mut d, cmd);
    }
    d
}

impl PathData {
    /// SVG `d` attribute for this path; empty paths give `""`.
    pub fn to_svg_d(&self) -> String { to_svg_d_impl(self) }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        push_command(&mut s, self);
        f.write_str(&s)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_svg_d_impl(self))
    }
}
