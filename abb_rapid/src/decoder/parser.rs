use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::records::{RawToolData, RawWorkObjectData, ZoneValue};
use super::{parse_line, ParsedLine};
use crate::{DecoderConfig, MoveType, ParseMode, RapidError, RobotTarget};

/// A move line that was dropped because it did not match the move grammar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Everything recovered from one source text.
///
/// Tables are keyed by declaration name; a later declaration replaces an
/// earlier one with the same name. Targets keep source order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ParsedProgram {
    pub targets: Vec<RobotTarget>,
    pub speed_data: BTreeMap<String, Vec<f64>>,
    pub zone_data: BTreeMap<String, Vec<ZoneValue>>,
    pub tool_data: BTreeMap<String, RawToolData>,
    pub wobj_data: BTreeMap<String, RawWorkObjectData>,
    #[serde(default)]
    pub warnings: Vec<ParseWarning>,
}

impl ParsedProgram {
    pub fn to_json(&self) -> Result<String, RapidError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RapidError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Single-pass RAPID reader.
///
/// Every `parse_*` call starts from empty tables and consumes its whole
/// input before returning.
///
/// ```rust
/// use abb_rapid::RapidParser;
///
/// let source = "\
/// MODULE MainModule
/// VAR zonedata zone:=z10;
/// MoveL [[1,2,3],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], speed, zone, tool;
/// ENDMODULE
/// ";
/// let mut parser = RapidParser::new();
/// parser.parse_str(source).unwrap();
/// assert_eq!(parser.targets().len(), 1);
/// assert_eq!(parser.zone_data()["zone"][0].as_number(), Some(10.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RapidParser {
    config: DecoderConfig,
    program: ParsedProgram,
}

impl RapidParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Result<Self, RapidError> {
        config.validate()?;
        Ok(Self {
            config,
            program: ParsedProgram::default(),
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Reads the file at `path`. Fails with `NotFound` when it does not
    /// exist and `Io` for any other open or read failure.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RapidError> {
        let path = path.as_ref();
        self.program = ParsedProgram::default();
        let file = File::open(path).map_err(|e| RapidError::from_io(path, e))?;
        self.parse_reader(BufReader::new(file)).map_err(|err| match err {
            RapidError::Io(msg) => RapidError::Io(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        log_info!(
            path = %path.display(),
            targets = self.program.targets.len(),
            "parsed RAPID file"
        );
        Ok(())
    }

    pub fn parse_str(&mut self, source: &str) -> Result<(), RapidError> {
        self.parse_reader(source.as_bytes())
    }

    pub fn parse_reader<R: BufRead>(&mut self, mut reader: R) -> Result<(), RapidError> {
        self.program = ParsedProgram::default();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| RapidError::Io(e.to_string()))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            // controller files may carry Latin-1 comments
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            self.accept_line(line_no, line)?;
        }
        log_debug!(
            targets = self.program.targets.len(),
            speeds = self.program.speed_data.len(),
            zones = self.program.zone_data.len(),
            tools = self.program.tool_data.len(),
            wobjs = self.program.wobj_data.len(),
            warnings = self.program.warnings.len(),
            "scan complete"
        );
        Ok(())
    }

    fn accept_line(&mut self, line_no: usize, line: &str) -> Result<(), RapidError> {
        if line.trim().is_empty() {
            return Ok(());
        }
        if line.len() > self.config.max_line_len {
            if self.config.mode == ParseMode::Strict && starts_with_move(line) {
                return Err(RapidError::Parse {
                    line: line_no,
                    message: format!(
                        "move instruction exceeds {} bytes",
                        self.config.max_line_len
                    ),
                });
            }
            log_debug!(line_no, len = line.len(), "skipping over-long line");
            return Ok(());
        }
        match parse_line(line) {
            ParsedLine::Speed(decl) => {
                log_debug!(line_no, name = %decl.name, "speeddata");
                self.program.speed_data.insert(decl.name, decl.value);
            }
            ParsedLine::Zone(decl) => {
                log_debug!(line_no, name = %decl.name, "zonedata");
                self.program.zone_data.insert(decl.name, decl.value);
            }
            ParsedLine::Tool(decl) => {
                log_debug!(line_no, name = %decl.name, "tooldata");
                self.program.tool_data.insert(decl.name, decl.value);
            }
            ParsedLine::WorkObject(decl) => {
                log_debug!(line_no, name = %decl.name, "wobjdata");
                self.program.wobj_data.insert(decl.name, decl.value);
            }
            ParsedLine::Move(target) => {
                log_debug!(line_no, move_type = %target.move_type, "move instruction");
                self.program.targets.push(target);
            }
            ParsedLine::MalformedMove => {
                let text = line.trim().to_string();
                if self.config.mode == ParseMode::Strict {
                    return Err(RapidError::Parse {
                        line: line_no,
                        message: format!("malformed move instruction `{}`", text),
                    });
                }
                log_warn!(line_no, text = %text, "dropping malformed move instruction");
                if self.config.collect_warnings {
                    self.program.warnings.push(ParseWarning { line: line_no, text });
                }
            }
            ParsedLine::Unrecognized => {}
        }
        Ok(())
    }

    pub fn targets(&self) -> &[RobotTarget] {
        &self.program.targets
    }

    pub fn speed_data(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.program.speed_data
    }

    pub fn zone_data(&self) -> &BTreeMap<String, Vec<ZoneValue>> {
        &self.program.zone_data
    }

    pub fn tool_data(&self) -> &BTreeMap<String, RawToolData> {
        &self.program.tool_data
    }

    pub fn wobj_data(&self) -> &BTreeMap<String, RawWorkObjectData> {
        &self.program.wobj_data
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.program.warnings
    }

    pub fn program(&self) -> &ParsedProgram {
        &self.program
    }

    pub fn into_program(self) -> ParsedProgram {
        self.program
    }
}

fn starts_with_move(line: &str) -> bool {
    let word = line
        .trim_start()
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .next()
        .unwrap_or("");
    word.parse::<MoveType>().is_ok()
}
