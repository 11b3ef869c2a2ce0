//! Second phase of normalization: coerce a dynamic JSON value into a
//! [`VisualizationRecord`], naming the first offending field on failure.

use serde_json::{Map, Value};

use super::types::{
    AnimationStep, ChangeRecord, ComponentType, InteractiveElement, InteractiveElementType,
    VisualComponent, VisualizationRecord, VisualizationType, DEFAULT_STEP_DURATION,
    MAX_STEP_DURATION, MIN_STEP_DURATION,
};
use crate::error::{VisualizationError, VisualizationResult};

pub fn validate_record(value: &Value) -> VisualizationResult<VisualizationRecord> {
    let root = ObjectView::of(value, String::new())?;

    let success = root.optional_bool("success")?.unwrap_or(true);
    let topic = root.required_str("topic")?;
    let title = root.required_str("title")?;
    let description = root.required_str("description")?;
    let visualization_type = {
        let raw = root.required_str("visualization_type")?;
        VisualizationType::from_name(&raw).ok_or_else(|| {
            VisualizationError::schema(
                "visualization_type",
                format!(
                    "'{}' is not one of {}",
                    raw,
                    VisualizationType::ALL.map(|t| t.as_str()).join("|")
                ),
            )
        })?
    };

    let components = root
        .optional_array("components")?
        .iter()
        .enumerate()
        .map(|(i, v)| validate_component(v, format!("components[{}]", i)))
        .collect::<VisualizationResult<Vec<_>>>()?;

    let steps = root
        .optional_array("steps")?
        .iter()
        .enumerate()
        .map(|(i, v)| validate_step(v, format!("steps[{}]", i)))
        .collect::<VisualizationResult<Vec<_>>>()?;

    let interactive_elements = root
        .optional_array("interactive_elements")?
        .iter()
        .enumerate()
        .map(|(i, v)| validate_interactive(v, format!("interactive_elements[{}]", i)))
        .collect::<VisualizationResult<Vec<_>>>()?;

    Ok(VisualizationRecord {
        success,
        topic,
        title,
        description,
        visualization_type,
        components,
        steps,
        interactive_elements,
        metadata: root.optional_object("metadata")?,
    })
}

fn validate_component(value: &Value, path: String) -> VisualizationResult<VisualComponent> {
    let obj = ObjectView::of(value, path)?;
    Ok(VisualComponent {
        id: obj.required_str("id")?,
        component_type: ComponentType::from(obj.required_str("type")?),
        properties: obj.optional_object("properties")?,
        content: obj.optional_str("content")?,
        connections: obj.string_list("connections")?,
    })
}

fn validate_step(value: &Value, path: String) -> VisualizationResult<AnimationStep> {
    let obj = ObjectView::of(value, path)?;

    let step_number = {
        let field = obj.field_path("step_number");
        let raw = obj
            .present("step_number")
            .ok_or_else(|| VisualizationError::schema(&field, "field required"))?;
        non_negative_integer(raw).ok_or_else(|| {
            VisualizationError::schema(
                &field,
                format!("expected a non-negative integer, found {}", raw),
            )
        })?
    };

    let duration = match obj.present("duration") {
        None => DEFAULT_STEP_DURATION,
        Some(raw) => {
            let field = obj.field_path("duration");
            let secs = raw.as_f64().ok_or_else(|| {
                VisualizationError::schema(
                    &field,
                    format!("expected a number, found {}", json_type(raw)),
                )
            })?;
            if !(MIN_STEP_DURATION..=MAX_STEP_DURATION).contains(&secs) {
                return Err(VisualizationError::schema(
                    &field,
                    format!(
                        "{} is outside [{}, {}]",
                        secs, MIN_STEP_DURATION, MAX_STEP_DURATION
                    ),
                ));
            }
            secs
        }
    };

    let changes = obj
        .optional_array("changes")?
        .iter()
        .enumerate()
        .map(|(i, v)| validate_change(v, format!("{}[{}]", obj.field_path("changes"), i)))
        .collect::<VisualizationResult<Vec<_>>>()?;

    Ok(AnimationStep {
        step_number,
        description: obj.required_str("description")?,
        duration,
        changes,
        highlight: obj.string_list("highlight")?,
    })
}

fn validate_change(value: &Value, path: String) -> VisualizationResult<ChangeRecord> {
    let obj = ObjectView::of(value, path)?;
    let extra = obj
        .map
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "component_id" | "property" | "from" | "to"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(ChangeRecord {
        component_id: obj.present("component_id").cloned(),
        property: obj.present("property").cloned(),
        from: obj.map.get("from").cloned().unwrap_or(Value::Null),
        to: obj.map.get("to").cloned().unwrap_or(Value::Null),
        extra,
    })
}

fn validate_interactive(value: &Value, path: String) -> VisualizationResult<InteractiveElement> {
    let obj = ObjectView::of(value, path)?;
    let element_type = {
        let raw = obj.required_str("type")?;
        InteractiveElementType::from_name(&raw).ok_or_else(|| {
            VisualizationError::schema(
                obj.field_path("type"),
                format!(
                    "'{}' is not one of {}",
                    raw,
                    InteractiveElementType::ALL.map(|t| t.as_str()).join("|")
                ),
            )
        })?
    };
    Ok(InteractiveElement {
        id: obj.required_str("id")?,
        element_type,
        label: obj.required_str("label")?,
        action: obj.required_str("action")?,
        properties: obj.optional_object("properties")?,
    })
}

/// Accepts integral JSON numbers (including `2.0`) that are >= 0.
fn non_negative_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        return Some(f as u64);
    }
    None
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON object together with its path from the document root.
struct ObjectView<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> ObjectView<'a> {
    fn of(value: &'a Value, path: String) -> VisualizationResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => {
                let field = if path.is_empty() { "$".to_string() } else { path };
                Err(VisualizationError::schema(
                    field,
                    format!("expected an object, found {}", json_type(other)),
                ))
            }
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Null counts as absent.
    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn mistyped(&self, key: &str, expected: &str, found: &Value) -> VisualizationError {
        VisualizationError::schema(
            self.field_path(key),
            format!("expected {}, found {}", expected, json_type(found)),
        )
    }

    fn required_str(&self, key: &str) -> VisualizationResult<String> {
        match self.map.get(key) {
            None => Err(VisualizationError::schema(self.field_path(key), "field required")),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.mistyped(key, "a string", other)),
        }
    }

    fn optional_str(&self, key: &str) -> VisualizationResult<Option<String>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.mistyped(key, "a string", other)),
        }
    }

    fn optional_bool(&self, key: &str) -> VisualizationResult<Option<bool>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.mistyped(key, "a boolean", other)),
        }
    }

    fn optional_array(&self, key: &str) -> VisualizationResult<&'a [Value]> {
        match self.present(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(self.mistyped(key, "an array", other)),
        }
    }

    fn optional_object(&self, key: &str) -> VisualizationResult<Map<String, Value>> {
        match self.present(key) {
            None => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(other) => Err(self.mistyped(key, "an object", other)),
        }
    }

    fn string_list(&self, key: &str) -> VisualizationResult<Vec<String>> {
        self.optional_array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(VisualizationError::schema(
                    format!("{}[{}]", self.field_path(key), i),
                    format!("expected a string, found {}", json_type(other)),
                )),
            })
            .collect()
    }
}
