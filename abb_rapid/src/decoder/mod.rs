//! Line-oriented recognition of RAPID declarations and move instructions.
//!
//! Each line is classified on its own. Lines that match nothing are ignored,
//! so the decoder can be pointed at complete controller modules and pick out
//! only the statements it understands.

mod declarations;
mod motion;
mod parser;
mod records;
mod scanner;

pub use parser::*;
pub use records::*;

use crate::RobotTarget;
use motion::MoveLine;

/// What a single line of source was recognized as.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Speed(Declared<Vec<f64>>),
    Zone(Declared<Vec<ZoneValue>>),
    Tool(Declared<RawToolData>),
    WorkObject(Declared<RawWorkObjectData>),
    Move(RobotTarget),
    /// Starts with a move keyword but does not have the expected structure.
    MalformedMove,
    Unrecognized,
}

impl_extract_inner!(ParsedLine, Speed, Declared<Vec<f64>>);
impl_extract_inner!(ParsedLine, Zone, Declared<Vec<ZoneValue>>);
impl_extract_inner!(ParsedLine, Tool, Declared<RawToolData>);
impl_extract_inner!(ParsedLine, WorkObject, Declared<RawWorkObjectData>);
impl_extract_inner!(ParsedLine, Move, RobotTarget);

/// Classifies one line of RAPID source. Surrounding whitespace is ignored.
///
/// ```rust
/// use abb_rapid::{parse_line, ExtractInner, MoveType, RobotTarget};
///
/// let line = parse_line("MoveJ [[1,2,3],[1,0,0,0],[0,0,0,1],[9E9,0,0,0,0,0]], v100, z10, tool0;");
/// let target: &RobotTarget = line.as_inner().unwrap();
/// assert_eq!(target.move_type, MoveType::MoveJ);
/// assert_eq!(target.ext_axes[0], f64::INFINITY);
/// ```
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Unrecognized;
    }
    if let Some(declaration) = declarations::parse_declaration(line) {
        return declaration;
    }
    match motion::parse_move(line) {
        MoveLine::Target(target) => ParsedLine::Move(target),
        MoveLine::Malformed => ParsedLine::MalformedMove,
        MoveLine::NotMove => ParsedLine::Unrecognized,
    }
}

/// Serde adapter for external axes.
///
/// Human-readable formats write an unused axis as the string `"9E9"`, so a
/// finite axis at 9e9 survives export unchanged. Binary formats keep the raw
/// `f64`, infinity included.
pub(crate) mod ext_axes_serde {
    use serde::de::Error;
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::EXT_AXIS_UNUSED;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Axis {
        Value(f64),
        Unused(String),
    }

    pub fn serialize<S: Serializer>(axes: &[f64; 6], serializer: S) -> Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return axes.serialize(serializer);
        }
        let mut tuple = serializer.serialize_tuple(axes.len())?;
        for &axis in axes {
            if axis == f64::INFINITY {
                tuple.serialize_element(&Axis::Unused(EXT_AXIS_UNUSED.to_string()))?;
            } else {
                tuple.serialize_element(&Axis::Value(axis))?;
            }
        }
        tuple.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[f64; 6], D::Error> {
        if !deserializer.is_human_readable() {
            return <[f64; 6]>::deserialize(deserializer);
        }
        let axes = <[Axis; 6]>::deserialize(deserializer)?;
        let mut out = [0.0; 6];
        for (slot, axis) in out.iter_mut().zip(axes) {
            *slot = match axis {
                Axis::Value(v) => v,
                Axis::Unused(s) if s.eq_ignore_ascii_case(EXT_AXIS_UNUSED) => f64::INFINITY,
                Axis::Unused(s) => {
                    return Err(D::Error::custom(format!("invalid external axis `{}`", s)))
                }
            };
        }
        Ok(out)
    }
}
