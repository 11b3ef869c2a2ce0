use crate::error::VisualizationError;
use crate::visualization::schema::validate_record;
use crate::visualization::types::ComponentType;
use serde_json::{json, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Value {
        json!({
            "topic": "Merge Sort",
            "title": "Merge Sort",
            "description": "Divide and conquer.",
            "visualization_type": "animation"
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut v = base();
        v[key] = value;
        v
    }

    fn violation_field(value: &Value) -> String {
        match validate_record(value).unwrap_err() {
            VisualizationError::SchemaViolation { field, .. } => field,
            other => panic!("expected SchemaViolation, got {:?}", other),
        }
    }

    #[test]
    fn accepts_every_visualization_type() {
        for t in ["tree", "graph", "flowchart", "animation", "comparison", "timeline", "process"] {
            let record = validate_record(&with("visualization_type", json!(t))).unwrap();
            assert_eq!(record.visualization_type.as_str(), t);
        }
    }

    #[test]
    fn visualization_type_is_case_sensitive() {
        assert_eq!(violation_field(&with("visualization_type", json!("Tree"))), "visualization_type");
    }

    #[test]
    fn root_must_be_an_object() {
        assert_eq!(violation_field(&json!([1, 2, 3])), "$");
    }

    #[test]
    fn mistyped_required_field_is_named() {
        assert_eq!(violation_field(&with("title", json!(42))), "title");
        assert_eq!(violation_field(&with("description", Value::Null)), "description");
    }

    #[test]
    fn success_flag_is_kept_when_present() {
        let record = validate_record(&with("success", json!(false))).unwrap();
        assert!(!record.success);
        assert_eq!(violation_field(&with("success", json!("yes"))), "success");
    }

    #[test]
    fn null_optional_collections_default_to_empty() {
        let mut v = base();
        v["components"] = Value::Null;
        v["metadata"] = Value::Null;
        let record = validate_record(&v).unwrap();
        assert!(record.components.is_empty());
        assert!(record.metadata.is_empty());
    }

    #[test]
    fn wrong_collection_type_is_rejected() {
        assert_eq!(violation_field(&with("components", json!({}))), "components");
        assert_eq!(violation_field(&with("metadata", json!([]))), "metadata");
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let record = validate_record(&with("confidence", json!(0.9))).unwrap();
        assert_eq!(record.title, "Merge Sort");
    }

    #[test]
    fn component_requires_id_and_type() {
        let v = with("components", json!([{"id": "a", "type": "node"}, {"type": "node"}]));
        assert_eq!(violation_field(&v), "components[1].id");

        let v = with("components", json!([{"id": "a"}]));
        assert_eq!(violation_field(&v), "components[0].type");
    }

    #[test]
    fn unknown_component_type_is_preserved() {
        let v = with("components", json!([{"id": "a", "type": "circle"}]));
        let record = validate_record(&v).unwrap();
        assert_eq!(record.components[0].component_type, ComponentType::Other("circle".to_string()));
        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["components"][0]["type"], "circle");
    }

    #[test]
    fn connections_must_be_strings() {
        let v = with("components", json!([{"id": "a", "type": "node", "connections": ["b", 3]}]));
        assert_eq!(violation_field(&v), "components[0].connections[1]");
    }

    #[test]
    fn dangling_references_are_not_rejected() {
        let v = with(
            "components",
            json!([{"id": "a", "type": "node", "connections": ["missing"]}]),
        );
        let mut v = v;
        v["steps"] = json!([{"step_number": 0, "description": "x", "highlight": ["ghost"]}]);
        assert!(validate_record(&v).is_ok());
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        for ok in [0.1, 10.0, 2.5] {
            let v = with("steps", json!([{"step_number": 0, "description": "x", "duration": ok}]));
            assert_eq!(validate_record(&v).unwrap().steps[0].duration, ok);
        }
        for bad in [0.05, 10.01, -1.0] {
            let v = with("steps", json!([{"step_number": 0, "description": "x", "duration": bad}]));
            assert_eq!(violation_field(&v), "steps[0].duration");
        }
        let v = with("steps", json!([{"step_number": 0, "description": "x", "duration": "fast"}]));
        assert_eq!(violation_field(&v), "steps[0].duration");
    }

    #[test]
    fn step_number_must_be_non_negative_integer() {
        let ok = with("steps", json!([{"step_number": 3.0, "description": "x"}]));
        assert_eq!(validate_record(&ok).unwrap().steps[0].step_number, 3);

        for bad in [json!(-1), json!(1.5), json!("1")] {
            let v = with("steps", json!([{"step_number": bad, "description": "x"}]));
            assert_eq!(violation_field(&v), "steps[0].step_number");
        }
        let v = with("steps", json!([{"description": "x"}]));
        assert_eq!(violation_field(&v), "steps[0].step_number");
    }

    #[test]
    fn step_count_is_not_enforced() {
        let steps: Vec<Value> = (0..20)
            .map(|i| json!({"step_number": i, "description": "s"}))
            .collect();
        let record = validate_record(&with("steps", Value::Array(steps))).unwrap();
        assert_eq!(record.steps.len(), 20);
    }

    #[test]
    fn change_records_keep_extra_keys() {
        let v = with(
            "steps",
            json!([{
                "step_number": 0,
                "description": "x",
                "changes": [{"component_id": "a", "property": "color", "from": 1, "to": [2], "easing": "linear"}]
            }]),
        );
        let record = validate_record(&v).unwrap();
        let change = &record.steps[0].changes[0];
        assert_eq!(change.property, Some(json!("color")));
        assert_eq!(change.from, json!(1));
        assert_eq!(change.to, json!([2]));
        assert_eq!(change.extra["easing"], "linear");

        let bad = with(
            "steps",
            json!([{"step_number": 0, "description": "x", "changes": ["not an object"]}]),
        );
        assert_eq!(violation_field(&bad), "steps[0].changes[0]");
    }

    #[test]
    fn change_keys_accept_any_json_value() {
        let v = with(
            "steps",
            json!([{
                "step_number": 0,
                "description": "x",
                "changes": [
                    {"component_id": 3, "property": ["x", "y"], "from": 0, "to": 1},
                    {"component_id": null, "to": 1}
                ]
            }]),
        );
        let record = validate_record(&v).unwrap();
        let changes = &record.steps[0].changes;
        assert_eq!(changes[0].component_id, Some(json!(3)));
        assert_eq!(changes[0].property, Some(json!(["x", "y"])));
        assert!(changes[1].component_id.is_none());
        assert!(changes[1].property.is_none());

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["steps"][0]["changes"][0]["component_id"], 3);
        assert!(out["steps"][0]["changes"][1].get("component_id").is_none());
    }

    #[test]
    fn interactive_element_type_is_closed() {
        let v = with(
            "interactive_elements",
            json!([{"id": "b", "type": "dropdown", "label": "L", "action": "play"}]),
        );
        assert_eq!(violation_field(&v), "interactive_elements[0].type");
    }

    #[test]
    fn interactive_element_requires_label_and_action() {
        let v = with("interactive_elements", json!([{"id": "b", "type": "toggle", "label": "L"}]));
        assert_eq!(violation_field(&v), "interactive_elements[0].action");
    }
}
