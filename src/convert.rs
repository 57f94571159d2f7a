//! Broadlink-to-UFO-R11 conversion façade, plus the SmartIR JSON tree walk.
//!
//! Equivalent to `IRConverter` in
//! `original_source/app/services/converter.py`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::Result;
use crate::level::CompressionLevel;

/// Ties a [`crate::decode`]/[`crate::encode`] pair together behind one
/// compression level, the way `IRConverter` wraps `BroadlinkDecoder` and
/// `TuyaEncoder`.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    level: CompressionLevel,
}

impl Converter {
    pub fn new(level: CompressionLevel) -> Self {
        Converter { level }
    }

    pub fn compression_level(&self) -> CompressionLevel {
        self.level
    }

    /// Decode a Broadlink Base64 code and re-encode it as UFO-R11 Base64.
    pub fn convert(&self, broadlink_code: &str) -> Result<String> {
        debug!("converting Broadlink code to UFO-R11");
        let timings = decode(broadlink_code)?;
        Ok(encode(&timings, self.level)?)
    }

    /// [`Self::convert`], wrapped in the MQTT publish payload shape
    /// `{"ir_code_to_send": "<code>"}`.
    pub fn convert_to_mqtt_payload(&self, broadlink_code: &str) -> Result<String> {
        let ir_code = self.convert(broadlink_code)?;
        let payload = serde_json::json!({ "ir_code_to_send": ir_code });
        Ok(payload.to_string())
    }

    /// Walk a SmartIR device definition's `commands` tree, converting every
    /// leaf string command and leaving lists (`operationModes`, `fanModes`,
    /// ...) and other primitives untouched.
    pub fn process_smartir_data(&self, data: &Value, wrap_with_ir_code: bool) -> Result<Value> {
        let mut result = match data {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };

        let commands = data.get("commands").cloned().unwrap_or(Value::Object(Map::new()));
        let processed = self.process_commands(&commands, "", wrap_with_ir_code)?;

        result.insert("commands".to_owned(), processed);
        result.insert("supportedController".to_owned(), Value::String("MQTT".to_owned()));
        result.insert("commandsEncoding".to_owned(), Value::String("Raw".to_owned()));
        Ok(Value::Object(result))
    }

    fn process_commands(&self, commands: &Value, path: &str, wrap_with_ir_code: bool) -> Result<Value> {
        let map = match commands.as_object() {
            Some(map) => map,
            None => return Ok(Value::Object(Map::new())),
        };

        let mut processed = Map::with_capacity(map.len());
        for (key, value) in map {
            let current_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}/{key}")
            };

            let mapped = match value {
                Value::String(code) => {
                    debug!(path = %current_path, "processing command");
                    let ir_code = self.convert(code)?;
                    if wrap_with_ir_code {
                        Value::String(format!(r#"{{"ir_code_to_send": "{ir_code}"}}"#))
                    } else {
                        Value::String(ir_code)
                    }
                }
                Value::Array(_) => {
                    debug!(path = %current_path, "preserving list");
                    value.clone()
                }
                Value::Object(_) => {
                    debug!(path = %current_path, "processing group");
                    self.process_commands(value, &current_path, wrap_with_ir_code)?
                }
                other => other.clone(),
            };
            processed.insert(key.clone(), mapped);
        }
        Ok(Value::Object(processed))
    }
}

/// Request body for a single-command conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub command: String,
    #[serde(default)]
    pub compression_level: CompressionLevel,
}

/// Response body for a single-command conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub ir_code: String,
    pub mqtt_payload: String,
    pub original_length: usize,
    pub result_length: usize,
}

impl ConvertResponse {
    pub fn build(converter: &Converter, broadlink_code: &str) -> Result<Self> {
        let ir_code = converter.convert(broadlink_code)?;
        let mqtt_payload = converter.convert_to_mqtt_payload(broadlink_code)?;
        Ok(ConvertResponse {
            original_length: broadlink_code.len(),
            result_length: ir_code.len(),
            ir_code,
            mqtt_payload,
        })
    }
}

/// Request body for a SmartIR device definition conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConvertRequest {
    pub content: Value,
    #[serde(default)]
    pub compression_level: CompressionLevel,
    #[serde(default = "default_true")]
    pub wrap_with_ir_code: bool,
}

fn default_true() -> bool {
    true
}

/// Response body for a SmartIR device definition conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConvertResponse {
    pub content: Value,
    pub commands_processed: usize,
}

/// Recursively count the string leaves under a SmartIR `commands` tree.
pub fn count_commands(commands: &Value) -> usize {
    match commands {
        Value::String(_) => 1,
        Value::Object(map) => map.values().map(count_commands).sum(),
        _ => 0,
    }
}
