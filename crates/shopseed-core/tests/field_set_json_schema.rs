use schemars::schema_for;
use shopseed_core::{CategoryFields, ProductFields, ReviewFields};

fn required(schema: &serde_json::Value) -> Vec<String> {
    schema["required"]
        .as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn product_reference_fields_are_optional_in_schema() {
    let schema = serde_json::to_value(schema_for!(ProductFields)).expect("serialize schema");
    let required = required(&schema);

    for field in ["name", "description", "status", "type", "featured", "sku", "regular_price"] {
        assert!(required.contains(&field.to_string()), "{field} should be required");
    }
    for field in ["images", "categories", "tags", "brands"] {
        assert!(!required.contains(&field.to_string()), "{field} should be optional");
    }
}

#[test]
fn category_image_is_optional_in_schema() {
    let schema = serde_json::to_value(schema_for!(CategoryFields)).expect("serialize schema");
    let required = required(&schema);
    assert!(required.contains(&"name".to_string()));
    assert!(!required.contains(&"image".to_string()));
}

#[test]
fn review_fields_are_all_required() {
    let schema = serde_json::to_value(schema_for!(ReviewFields)).expect("serialize schema");
    let mut required = required(&schema);
    required.sort();
    assert_eq!(
        required,
        vec![
            "product_id",
            "rating",
            "review",
            "reviewer",
            "reviewer_email",
            "verified"
        ]
    );
}
