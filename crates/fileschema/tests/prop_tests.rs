//! Property-based tests for file schemas
//!
//! These tests verify that every variant behaves consistently across a wide
//! range of generated inputs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use fileschema::{file_schema, FileVariant, IssueCode, SchemaValidator, Value};
use proptest::prelude::*;

/// Strategy for values that are neither strings nor buffers
fn non_file_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        proptest::collection::vec(any::<i64>().prop_map(Value::from), 0..5).prop_map(Value::Array),
    ]
}

proptest! {
    #[test]
    fn string_variant_is_identity(s in ".*") {
        let schema = file_schema(FileVariant::String);
        prop_assert_eq!(schema.safe_parse(Value::from(s.clone())), Ok(Value::from(s)));
    }

    #[test]
    fn buffer_variant_is_identity(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let schema = file_schema(FileVariant::Buffer);
        prop_assert_eq!(schema.safe_parse(Value::from(bytes.clone())), Ok(Value::from(bytes)));
    }

    #[test]
    fn buffer_variant_rejects_strings(s in ".*") {
        let error = file_schema(FileVariant::Buffer).validate(&Value::from(s)).unwrap_err();
        prop_assert_eq!(error.issues.len(), 1);
        prop_assert_eq!(error.issues[0].code, IssueCode::Custom);
        prop_assert_eq!(error.issues[0].message.as_str(), "Expected Buffer");
        prop_assert!(error.issues[0].is_fatal());
    }

    #[test]
    fn binary_variant_accepts_strings_and_buffers(
        s in ".*",
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let schema = file_schema(FileVariant::Binary);
        prop_assert!(schema.validate(&Value::from(s)).is_ok());
        prop_assert!(schema.validate(&Value::from(bytes)).is_ok());
    }

    #[test]
    fn non_file_values_fail_every_variant(value in non_file_value_strategy()) {
        for variant in FileVariant::ALL {
            let error = file_schema(variant).validate(&value).unwrap_err();
            prop_assert_eq!(error.issues.len(), 1);
            prop_assert!(error.issues[0].path.is_empty());
        }
    }

    #[test]
    fn encoded_bytes_are_valid_base64(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = STANDARD.encode(&bytes);
        let schema = file_schema(FileVariant::Base64);
        prop_assert_eq!(schema.safe_parse(Value::from(encoded.clone())), Ok(Value::from(encoded)));
    }

    #[test]
    fn strings_with_foreign_characters_are_not_base64(
        prefix in "[A-Za-z0-9+/]{0,8}",
        bad in "[~!@#$%^&*(), _-]",
    ) {
        let candidate = format!("{}{}", prefix, bad);
        let error = file_schema(FileVariant::Base64).validate(&Value::from(candidate)).unwrap_err();
        prop_assert_eq!(error.issues.len(), 1);
        prop_assert_eq!(error.issues[0].code, IssueCode::InvalidString);
        prop_assert_eq!(error.issues[0].validation.as_deref(), Some("regex"));
    }

    #[test]
    fn validation_is_idempotent(s in ".{0,32}") {
        let schema = file_schema(FileVariant::Base64);
        let value = Value::from(s);
        prop_assert_eq!(schema.validate(&value), schema.validate(&value));
    }
}
