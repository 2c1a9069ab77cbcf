//! Describe command handler

use crate::cli::DescribeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use fileschema::documentation::{depict, DocGenerator, Documented};
use fileschema::{file_schema, FileSchema};
use tracing::debug;

/// Handle the describe command
pub async fn handle_describe(args: DescribeArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = build_schema(&args, config);
    debug!(variant = %schema.variant(), markdown = args.markdown, "Describing schema");

    if args.markdown {
        let fields: [(&str, &dyn Documented); 1] = [(args.field.as_str(), &schema)];
        let doc = DocGenerator::new().generate("File Schema", &fields)?;
        output.write(&doc)
    } else {
        output.data(&depict(&schema))
    }
}

fn build_schema(args: &DescribeArgs, config: &Config) -> FileSchema {
    let mut schema = file_schema(args.variant.unwrap_or(config.default_variant));
    if let Some(ref description) = args.description {
        schema = schema.describe(description.as_str());
    }
    for example in &args.example {
        schema = schema.example(example.as_str());
    }
    schema
}
