use crate::descriptor::ClassDescriptor;
use anyhow::Result;

/// JSON Schema of the class descriptor format.
pub fn descriptor_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ClassDescriptor))
        .unwrap_or(serde_json::Value::Null)
}

pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&descriptor_schema())?);
    Ok(())
}
