// Tests for output formatting
//
// These tests capture writer output through a shared buffer and check the
// human and machine renderings of check reports.

use super::*;
use fileschema::Issue;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (writer, buffer)
}

fn failed_report() -> CheckReport {
    CheckReport {
        file: PathBuf::from("logo.svg"),
        variant: FileVariant::Base64,
        encoding: "utf8".to_string(),
        size: 12,
        valid: false,
        kind: Some("File".to_string()),
        issues: vec![Issue::invalid_string("regex", "Does not match base64 encoding")],
    }
}

#[test]
fn test_check_report_human_failure() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.check_report(&failed_report()).unwrap();

    let text = buffer.contents();
    assert!(text.contains("ERROR: ✗ logo.svg is not valid base64 file content"));
    assert!(text.contains("12 bytes read as utf8"));
    assert!(text.contains("Code: invalid_string"));
    assert!(text.contains("Path: $"));
    assert!(text.contains("Message: Does not match base64 encoding"));
    assert!(text.contains("Validation: regex"));
}

#[test]
fn test_check_report_human_success_quiet() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    let report = CheckReport {
        valid: true,
        issues: Vec::new(),
        ..failed_report()
    };
    output.check_report(&report).unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_check_report_json() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.check_report(&failed_report()).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.contents().trim()).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["variant"], "base64");
    assert_eq!(
        value["issues"],
        serde_json::json!([{
            "code": "invalid_string",
            "message": "Does not match base64 encoding",
            "validation": "regex",
            "path": []
        }])
    );
}

#[test]
fn test_check_report_yaml() {
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output.check_report(&failed_report()).unwrap();
    assert!(buffer.contents().contains("variant: base64"));
}

#[test]
fn test_info_suppressed_for_machine_formats() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.info("Reading file").unwrap();
    output.success("done").unwrap();
    assert_eq!(buffer.contents(), "");

    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.info("Reading file").unwrap();
    assert_eq!(buffer.contents(), "INFO: Reading file\n");
}

#[test]
fn test_data_pretty() {
    let (mut output, buffer) = writer(OutputFormat::JsonPretty, false);
    output.data(&serde_json::json!({"type": "string"})).unwrap();
    assert_eq!(buffer.contents(), "{\n  \"type\": \"string\"\n}\n");
}
