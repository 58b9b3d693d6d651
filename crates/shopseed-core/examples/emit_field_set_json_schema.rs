use schemars::schema_for;
use shopseed_core::EntityFields;

fn main() {
    let schema = schema_for!(EntityFields);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
