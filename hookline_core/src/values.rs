use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::HooklineError;
use crate::HooklineResult;

/// Split a `name=value` assignment. The name is trimmed and must not be empty;
/// the value is kept as written and may itself contain `=`.
pub fn parse_assignment(raw: &str) -> HooklineResult<(String, String)> {
	let Some((name, value)) = raw.split_once('=') else {
		return Err(HooklineError::InvalidAssignment(raw.to_string()));
	};
	let name = name.trim();
	if name.is_empty() {
		return Err(HooklineError::InvalidAssignment(raw.to_string()));
	}

	Ok((name.to_string(), value.to_string()))
}

/// Read variable values from a JSON object. Strings are used as is, numbers
/// and booleans are stringified and `null` entries are skipped.
pub fn load_values(path: &Path) -> HooklineResult<HashMap<String, String>> {
	let display = path.display().to_string();
	let values_error = |reason: String| {
		HooklineError::ValuesFile {
			path: display.clone(),
			reason,
		}
	};

	let content = std::fs::read_to_string(path).map_err(|e| values_error(e.to_string()))?;
	let object: serde_json::Map<String, Value> =
		serde_json::from_str(&content).map_err(|e| values_error(e.to_string()))?;

	let mut values = HashMap::with_capacity(object.len());
	for (name, value) in object {
		let value = match value {
			Value::Null => continue,
			Value::String(text) => text,
			Value::Bool(_) | Value::Number(_) => value.to_string(),
			Value::Array(_) | Value::Object(_) => {
				return Err(values_error(format!("`{name}` must be a string")));
			}
		};
		values.insert(name, value);
	}

	let path = &display;
	tracing::debug!(path = %path, values = values.len(), "loaded values file");
	Ok(values)
}
