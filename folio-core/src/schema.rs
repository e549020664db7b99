use serde_json::{json, Value};

/// JSON Schema every portfolio data file must satisfy
pub fn portfolio_schema() -> Value {
    let tags = json!({
        "type": "array",
        "items": {"type": "string"}
    });
    let date = json!({"type": "string", "format": "date"});

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Portfolio",
        "type": "object",
        "required": ["profile"],
        "properties": {
            "profile": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": {"type": "string"},
                    "headline": {"type": "string"},
                    "about": {"type": "string"},
                    "birth_date": date,
                    "location": {"type": "string"},
                    "contacts": {
                        "type": "object",
                        "additionalProperties": {"type": "string"}
                    }
                }
            },
            "courses": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "institution", "tags"],
                    "properties": {
                        "name": {"type": "string"},
                        "institution": {"type": "string"},
                        "tags": tags,
                        "conclusion": date,
                        "workload_hours": {"type": "integer", "minimum": 0},
                        "certificate_url": {"type": "string"}
                    }
                }
            },
            "books": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["title", "publish_name", "tags"],
                    "properties": {
                        "title": {"type": "string"},
                        "author": {"type": "string"},
                        "publish_name": {"type": "string"},
                        "tags": tags,
                        "image": {"type": "string"},
                        "url": {"type": "string"},
                        "read_on": date
                    }
                }
            }
        }
    })
}
