use serde::Serialize;
use serde_json::{json, Value};

/// Reduces a `schemars` root schema to the OpenAPI subset Gemini's `responseSchema` accepts.
pub fn clean_schema<T: Serialize>(root: T) -> serde_json::Result<Value> {
    let mut root_val = serde_json::to_value(root)?;

    process_schema_node(&mut root_val, 0);

    if let Value::Object(ref mut map) = root_val {
        map.remove("definitions");
        map.remove("$defs");
    }

    Ok(root_val)
}

fn process_schema_node(node: &mut Value, depth: usize) {
    if depth > 20 {
        *node = json!({ "type": "object", "nullable": true });
        return;
    }

    let Value::Object(map) = node else {
        return;
    };

    map.remove("additionalProperties");
    map.remove("$schema");
    map.remove("$id");
    map.remove("title");
    map.remove("default");
    map.remove("examples");

    // Gemini wants a single type; Option<T> becomes `nullable`
    if let Some(Value::Array(types)) = map.get("type") {
        if types.len() == 2 && types.contains(&json!("null")) {
            if let Some(real_type) = types.iter().find(|t| *t != &json!("null")).cloned() {
                map.insert("type".to_string(), real_type);
                map.insert("nullable".to_string(), json!(true));
            }
        } else if let Some(first) = types.first().cloned() {
            map.insert("type".to_string(), first);
        }
    }

    if let Some(Value::Object(props)) = map.get_mut("properties") {
        for val in props.values_mut() {
            process_schema_node(val, depth + 1);
        }
    }

    if let Some(val) = map.get_mut("items") {
        process_schema_node(val, depth + 1);
    }
}
