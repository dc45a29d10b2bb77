use std::fmt;
use std::str::FromStr;

use int_enum::IntEnum;
use serde::{Deserialize, Serialize};

// Logging shim and extract macros must be declared first so they are available to other modules
#[macro_use]
mod logging;
#[macro_use]
mod extract;
pub use extract::ExtractInner;

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod transforms;

pub use config::{DecoderConfig, ParseMode};
pub use decoder::{
    parse_line, Declared, ParseWarning, ParsedLine, ParsedProgram, RapidParser, RawToolData,
    RawWorkObjectData, ZoneValue,
};
pub use encoder::{build_target_literal, RapidProgram};
pub use errors::*;

/// Literal RAPID uses for an external axis that is not in use.
pub const EXT_AXIS_UNUSED: &str = "9E9";

/// Frame made of a translation and a unit quaternion `[q1, q2, q3, q4]`
/// where `q1` is the scalar part.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub trans: [f64; 3],
    pub rot: [f64; 4],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            trans: [0.0, 0.0, 0.0],
            rot: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Payload carried by a tool.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LoadData {
    pub mass: f64,
    pub cog: [f64; 3],
    pub aom: [f64; 4],
    pub inertia: [f64; 3],
}

impl Default for LoadData {
    fn default() -> Self {
        Self {
            mass: 0.0,
            cog: [0.0, 0.0, 0.0],
            aom: [1.0, 0.0, 0.0, 0.0],
            inertia: [0.0, 0.0, 0.0],
        }
    }
}

/// `tooldata` declaration.
///
/// `rob_hold` is `true` when the tool is mounted on the robot arm.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToolData {
    pub name: String,
    pub rob_hold: bool,
    pub tframe: Pose,
    pub tload: LoadData,
}

impl Default for ToolData {
    fn default() -> Self {
        Self {
            name: "tool".to_string(),
            rob_hold: true,
            tframe: Pose::default(),
            tload: LoadData::default(),
        }
    }
}

/// Predefined blending radii (in mm) for `zonedata`.
///
/// The integer tag is written verbatim after the `z` prefix, so `Zone::Z50`
/// becomes `z50`. Only these six values are accepted by the encoder.
#[repr(u8)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntEnum)]
pub enum Zone {
    #[default]
    Z0 = 0,
    Z5 = 5,
    Z10 = 10,
    Z50 = 50,
    Z100 = 100,
    Z200 = 200,
}

impl Zone {
    pub fn radius(self) -> u8 {
        self.into()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z{}", self.radius())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZoneData {
    pub name: String,
    pub zone: Zone,
}

impl Default for ZoneData {
    fn default() -> Self {
        Self {
            name: "zone".to_string(),
            zone: Zone::Z0,
        }
    }
}

/// `speeddata` declaration.
///
/// * `v_tcp` - TCP velocity in mm/s
/// * `v_ori` - reorientation velocity in deg/s
/// * `v_leax` - linear external axis velocity in mm/s
/// * `v_reax` - rotating external axis velocity in deg/s
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeedData {
    pub name: String,
    pub v_tcp: f64,
    pub v_ori: f64,
    pub v_leax: f64,
    pub v_reax: f64,
}

impl SpeedData {
    pub fn new(name: &str, v_tcp: f64, v_ori: f64, v_leax: f64, v_reax: f64) -> Self {
        Self {
            name: name.to_string(),
            v_tcp,
            v_ori,
            v_leax,
            v_reax,
        }
    }
}

impl Default for SpeedData {
    fn default() -> Self {
        Self::new("speed", 50.0, 50.0, 0.0, 0.0)
    }
}

/// `wobjdata` declaration.
///
/// `uf_mec` names the mechanical unit moving the user frame and may be empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkObjectData {
    pub name: String,
    pub rob_hold: bool,
    pub uf_prog: bool,
    pub uf_mec: String,
    pub uframe: Pose,
    pub oframe: Pose,
}

impl Default for WorkObjectData {
    fn default() -> Self {
        Self {
            name: "wobj".to_string(),
            rob_hold: false,
            uf_prog: true,
            uf_mec: String::new(),
            uframe: Pose::default(),
            oframe: Pose::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    MoveJ,
    MoveL,
    MoveAbsJ,
}

impl MoveType {
    pub fn keyword(self) -> &'static str {
        match self {
            MoveType::MoveJ => "MoveJ",
            MoveType::MoveL => "MoveL",
            MoveType::MoveAbsJ => "MoveAbsJ",
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for MoveType {
    type Err = RapidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveJ" => Ok(MoveType::MoveJ),
            "MoveL" => Ok(MoveType::MoveL),
            "MoveAbsJ" => Ok(MoveType::MoveAbsJ),
            other => Err(RapidError::InvalidArgument(format!(
                "unknown move instruction `{}`",
                other
            ))),
        }
    }
}

/// Move instruction recovered from RAPID source.
///
/// External axes that are not in use (`9E9` in source) hold `f64::INFINITY`.
/// For `MoveAbsJ` the joint angles are stored in `joints` and the cartesian
/// fields keep their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RobotTarget {
    pub position: [f64; 3],
    pub orientation: [f64; 4],
    pub conf: [i32; 4],
    #[serde(with = "crate::decoder::ext_axes_serde")]
    pub ext_axes: [f64; 6],
    pub speed: String,
    pub zone: String,
    pub tool: String,
    #[serde(default)]
    pub wobj: Option<String>,
    pub move_type: MoveType,
    #[serde(default)]
    pub joints: Option<[f64; 6]>,
}

impl Default for RobotTarget {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            orientation: [1.0, 0.0, 0.0, 0.0],
            conf: [0, 0, 0, 1],
            ext_axes: [0.0; 6],
            speed: "speed".to_string(),
            zone: "zone".to_string(),
            tool: "tool".to_string(),
            wobj: None,
            move_type: MoveType::MoveL,
            joints: None,
        }
    }
}

/// Optional value attached to a `TPWrite` statement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum PrintValue {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for PrintValue {
    fn from(value: bool) -> Self {
        PrintValue::Bool(value)
    }
}

impl From<i64> for PrintValue {
    fn from(value: i64) -> Self {
        PrintValue::Int(value)
    }
}

impl From<i32> for PrintValue {
    fn from(value: i32) -> Self {
        PrintValue::Int(value.into())
    }
}

impl From<f64> for PrintValue {
    fn from(value: f64) -> Self {
        PrintValue::Float(value)
    }
}

impl From<&str> for PrintValue {
    fn from(value: &str) -> Self {
        PrintValue::Str(value.to_string())
    }
}

impl From<String> for PrintValue {
    fn from(value: String) -> Self {
        PrintValue::Str(value)
    }
}

impl<T: Into<PrintValue>> From<Option<T>> for PrintValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PrintValue::Absent, Into::into)
    }
}
