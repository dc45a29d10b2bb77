use serde::{Deserialize, Serialize};

use crate::RapidError;

/// How the decoder treats a line that starts with a move keyword but does
/// not have the expected bracket structure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop the line and keep scanning.
    #[default]
    Tolerant,
    /// Abort the parse with `RapidError::Parse`.
    Strict,
}

/// ```rust
/// use abb_rapid::{DecoderConfig, ParseMode, RapidParser};
///
/// let config = DecoderConfig::from_json(r#"{ "mode": "Strict" }"#).unwrap();
/// assert_eq!(config.mode, ParseMode::Strict);
///
/// let mut parser = RapidParser::with_config(config).unwrap();
/// assert!(parser.parse_str("MoveL [[1,2,3]], v100, z10, tool0;").is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DecoderConfig {
    pub mode: ParseMode,
    /// Record dropped move lines as warnings (tolerant mode only).
    pub collect_warnings: bool,
    /// Lines longer than this many bytes are treated as unrecognized.
    pub max_line_len: usize,
}

impl DecoderConfig {
    pub fn new(mode: ParseMode, collect_warnings: bool, max_line_len: usize) -> Self {
        Self {
            mode,
            collect_warnings,
            max_line_len,
        }
    }

    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RapidError> {
        if self.max_line_len == 0 {
            return Err(RapidError::InvalidArgument(
                "Maximum line length must be greater than 0.".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RapidError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Tolerant,
            collect_warnings: true,
            max_line_len: 4096,
        }
    }
}
