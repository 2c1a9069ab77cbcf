//! File schema validation demonstration
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use fileschema::documentation::{generate_docs, Documented};
use fileschema::{file_schema, get_meta, FileVariant, SchemaValidator, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fileschema Validation Demo ===\n");

    for variant in FileVariant::ALL {
        let schema = file_schema(variant);
        println!("--- {} (kind: {}) ---", variant, get_meta(&schema, "kind").unwrap_or(&serde_json::Value::Null));

        let candidates = [
            Value::from("aGVsbG8="),
            Value::from("~~~~"),
            Value::from(b"\x89PNG".to_vec()),
            Value::from(123),
        ];

        for candidate in candidates {
            match schema.validate(&candidate) {
                Ok(()) => println!("✅ {} accepted", candidate),
                Err(error) => println!("❌ {} rejected: {}", candidate, error.issues[0].message),
            }
        }
        println!();
    }

    let avatar = file_schema(FileVariant::Binary).describe("Profile picture");
    let logo = file_schema(FileVariant::Base64)
        .describe("Company logo")
        .example("PHN2Zy8+");
    let fields: [(&str, &dyn Documented); 2] = [("avatar", &avatar), ("logo", &logo)];
    println!("{}", generate_docs("Upload Request", &fields)?);

    Ok(())
}
