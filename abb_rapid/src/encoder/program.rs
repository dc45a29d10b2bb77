use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::format::{ext_axis_list, fixed, int_list, num, num_list, quoted, rapid_bool};
use crate::{
    MoveType, PrintValue, RapidError, RobotTarget, SpeedData, ToolData, WorkObjectData, Zone,
    ZoneData,
};

/// Renders the inline `robtarget` literal used by `MoveL` and `MoveJ`:
/// `[[x,y,z],[q1,q2,q3,q4],[cf1,cf4,cf6,cfx],[eax_a,...,eax_f]]`.
///
/// Fails with `InvalidArgument` unless the slices hold 3, 4, 4 and 6 values.
pub fn build_target_literal(pos: &[f64], orient: &[f64], conf: &[i32], ext_axes: &[f64]) -> Result<String, RapidError> {
    let pos: [f64; 3] = fixed("position", pos)?;
    let orient: [f64; 4] = fixed("orientation", orient)?;
    let conf: [i32; 4] = fixed("configuration", conf)?;
    let ext_axes: [f64; 6] = fixed("external axes", ext_axes)?;
    Ok(target_literal(&pos, &orient, &conf, &ext_axes))
}

fn target_literal(pos: &[f64; 3], orient: &[f64; 4], conf: &[i32; 4], ext_axes: &[f64; 6]) -> String {
    format!(
        "[{},{},{},{}]",
        num_list(pos),
        num_list(orient),
        int_list(conf),
        ext_axis_list(ext_axes)
    )
}

impl RobotTarget {
    /// The literal this target is written with after its move keyword.
    pub fn literal(&self) -> String {
        match (self.move_type, self.joints) {
            (MoveType::MoveAbsJ, Some(joints)) => joint_literal(&joints, &self.ext_axes),
            (MoveType::MoveAbsJ, None) => joint_literal(&[0.0; 6], &self.ext_axes),
            _ => target_literal(&self.position, &self.orientation, &self.conf, &self.ext_axes),
        }
    }
}

fn joint_literal(joints: &[f64; 6], ext_axes: &[f64; 6]) -> String {
    format!("[{}, {}]", num_list(joints), ext_axis_list(ext_axes))
}

/// A RAPID module under construction.
///
/// Statements are appended in call order and never rewritten. Once a work
/// object has been declared every following move instruction references it
/// through a `\Wobj:=` argument.
///
/// ```rust
/// use abb_rapid::{RapidProgram, SpeedData, Zone};
///
/// let mut program = RapidProgram::new();
/// program.open_module("MainModule", "main");
/// program.declare_speed(&SpeedData::default());
/// program.declare_zone("zone", Zone::Z10);
/// program
///     .add_linear_move(&[1.0, 2.0, 3.0], &[1.0, 0.0, 0.0, 0.0], &[0, 0, 0, 1], &[0.0; 6], "speed", "zone", "tool")
///     .unwrap();
/// program.close_module();
///
/// assert!(program.as_str().contains("MoveL [[1,2,3],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], speed, zone, tool;"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RapidProgram {
    program: String,
    active_wobj: Option<String>,
}

impl RapidProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.program
    }

    pub fn into_string(self) -> String {
        self.program
    }

    /// Name of the work object referenced by subsequent moves, if any.
    pub fn active_work_object(&self) -> Option<&str> {
        self.active_wobj.as_deref()
    }

    /// Stops referencing a work object in subsequent moves.
    pub fn clear_work_object(&mut self) {
        self.active_wobj = None;
    }

    fn push_line(&mut self, statement: &str) {
        log_debug!(statement, "appending statement");
        self.program.push_str(statement);
        self.program.push('\n');
    }

    pub fn open_module(&mut self, module_name: &str, procedure_name: &str) {
        self.push_line(&format!("MODULE {}", module_name));
        self.push_line(&format!("PROC {}()", procedure_name));
    }

    /// Closes the procedure and module opened by [`RapidProgram::open_module`].
    /// Calling it without a matching open produces invalid RAPID.
    pub fn close_module(&mut self) {
        self.push_line("ENDPROC");
        self.push_line("ENDMODULE");
    }

    pub fn declare_tool(&mut self, tool: &ToolData) {
        self.push_line(&tool.to_string());
    }

    pub fn declare_zone(&mut self, name: &str, zone: Zone) {
        self.push_line(&ZoneData::new(name, zone).to_string());
    }

    pub fn declare_speed(&mut self, speed: &SpeedData) {
        self.push_line(&speed.to_string());
    }

    /// Declares a work object and makes it the active one.
    pub fn declare_work_object(&mut self, wobj: &WorkObjectData) {
        self.push_line(&wobj.to_string());
        self.active_wobj = Some(wobj.name.clone());
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_linear_move(
        &mut self,
        pos: &[f64],
        orient: &[f64],
        conf: &[i32],
        ext_axes: &[f64],
        speed: &str,
        zone: &str,
        tool: &str,
    ) -> Result<(), RapidError> {
        let literal = build_target_literal(pos, orient, conf, ext_axes)?;
        self.push_move(MoveType::MoveL, &literal, speed, zone, tool);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_joint_move(
        &mut self,
        pos: &[f64],
        orient: &[f64],
        conf: &[i32],
        ext_axes: &[f64],
        speed: &str,
        zone: &str,
        tool: &str,
    ) -> Result<(), RapidError> {
        let literal = build_target_literal(pos, orient, conf, ext_axes)?;
        self.push_move(MoveType::MoveJ, &literal, speed, zone, tool);
        Ok(())
    }

    /// `MoveAbsJ` to six joint angles given in degrees.
    pub fn add_absolute_joint_move(
        &mut self,
        joints: &[f64],
        ext_axes: &[f64],
        speed: &str,
        zone: &str,
        tool: &str,
    ) -> Result<(), RapidError> {
        let joints: [f64; 6] = fixed("joint positions", joints)?;
        let ext_axes: [f64; 6] = fixed("external axes", ext_axes)?;
        self.push_move(MoveType::MoveAbsJ, &joint_literal(&joints, &ext_axes), speed, zone, tool);
        Ok(())
    }

    fn push_move(&mut self, move_type: MoveType, literal: &str, speed: &str, zone: &str, tool: &str) {
        let mut statement = format!("{} {}, {}, {}, {}", move_type, literal, speed, zone, tool);
        if let Some(wobj) = &self.active_wobj {
            statement.push_str("\\Wobj:=");
            statement.push_str(wobj);
        }
        statement.push(';');
        self.push_line(&statement);
    }

    pub fn add_wait(&mut self, seconds: f64) {
        self.push_line(&format!("WaitTime {};", num(seconds)));
    }

    pub fn add_wait_digital_input(&mut self, input: &str, value: i32) {
        self.push_line(&format!("WaitDI {}, {};", input, value));
    }

    pub fn set_digital_output(&mut self, name: &str, value: i32) {
        self.push_line(&format!("SetDO {}, {};", name, value));
    }

    pub fn set_analog_output(&mut self, name: &str, value: f64) {
        self.push_line(&format!("SetAO {}, {};", name, num(value)));
    }

    pub fn add_comment(&mut self, text: &str) {
        self.push_line(&format!("! {}", text));
    }

    /// `TPWrite`, with the optional argument chosen by the value's kind.
    /// A string value is appended to the message after a space.
    pub fn add_print_statement(&mut self, message: &str, value: impl Into<PrintValue>) {
        let statement = match value.into() {
            PrintValue::Absent => format!("TPWrite {};", quoted(message)),
            PrintValue::Bool(b) => format!("TPWrite {}\\Bool:={};", quoted(message), rapid_bool(b)),
            PrintValue::Int(i) => format!("TPWrite {}\\Num:={};", quoted(message), i),
            PrintValue::Float(x) => format!("TPWrite {}\\Dnum:={};", quoted(message), num(x)),
            PrintValue::Str(s) => format!("TPWrite {};", quoted(&format!("{} {}", message, s))),
        };
        self.push_line(&statement);
    }

    /// Writes the program verbatim to `path`, replacing any existing file.
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<(), RapidError> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|e| RapidError::from_io(path, e))?;
        file.write_all(self.program.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| RapidError::Io(format!("{}: {}", path.display(), e)))?;
        log_info!(path = %path.display(), bytes = self.program.len(), "persisted RAPID module");
        Ok(())
    }
}

impl fmt::Display for RapidProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)
    }
}

/// Dynamic values coming from JSON. Arrays and objects have no `TPWrite`
/// form and are rejected.
impl TryFrom<serde_json::Value> for PrintValue {
    type Error = RapidError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(PrintValue::Absent),
            Value::Bool(b) => Ok(PrintValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(PrintValue::Int(i))
                } else if let Some(x) = n.as_f64() {
                    Ok(PrintValue::Float(x))
                } else {
                    Err(RapidError::UnsupportedType(format!("number {} out of range", n)))
                }
            }
            Value::String(s) => Ok(PrintValue::Str(s)),
            Value::Array(_) => Err(RapidError::UnsupportedType("array".to_string())),
            Value::Object(_) => Err(RapidError::UnsupportedType("object".to_string())),
        }
    }
}
