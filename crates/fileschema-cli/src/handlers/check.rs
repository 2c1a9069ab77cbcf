//! Check command handler

use super::read::read_candidate;
use crate::cli::{CheckArgs, ReadEncoding};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{CheckReport, OutputWriter};
use fileschema::{file_schema, HasMetadata, SchemaValidator};
use tracing::{debug, info, instrument};

/// Handle the check command
#[instrument(skip(config, output), fields(file = %args.file.display()))]
pub async fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("check_command", &args.file.display().to_string());

    let variant = args.variant.unwrap_or(config.default_variant);
    let encoding = args.read_as.unwrap_or_else(|| ReadEncoding::for_variant(variant));
    info!(variant = %variant, encoding = encoding.as_str(), "Checking file");
    output.info(&format!(
        "Reading {} as {} for a {} schema",
        args.file.display(),
        encoding.as_str(),
        variant
    ))?;

    let candidate = read_candidate(&args.file, encoding, config.max_file_size).await?;
    let size = tokio::fs::metadata(&args.file).await?.len() as usize;

    let schema = file_schema(variant);
    let issues = {
        let _validation_timer = Timer::new("schema_validation");
        schema.collect_issues(&candidate)
    };
    debug!(issues = issues.len(), "Validation finished");

    let report = CheckReport {
        file: args.file.clone(),
        variant,
        encoding: encoding.as_str().to_string(),
        size,
        valid: issues.is_empty(),
        kind: schema.metadata().kind().map(str::to_string),
        issues,
    };
    output.check_report(&report)?;

    if report.valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            count: report.issues.len(),
        })
    }
}
