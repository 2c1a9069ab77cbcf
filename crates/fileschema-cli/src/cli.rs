//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use fileschema::FileVariant;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Fileschema CLI - validate file content against file schemas
///
/// Reads a file the way an application would (text, raw bytes, latin-1
/// binary string or base64) and checks the result against a file schema.
#[derive(Parser, Debug)]
#[command(
    name = "fileschema",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FILESCHEMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a file and validate its content against a file schema
    Check(CheckArgs),

    /// Show the documentation depiction of a file schema
    Describe(DescribeArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Schema variant: string, buffer, binary or base64
    #[arg(short = 't', long)]
    pub variant: Option<FileVariant>,

    /// How to read the file (defaults to the variant's natural reading)
    #[arg(long, value_enum)]
    pub read_as: Option<ReadEncoding>,
}

/// Arguments for the describe command
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Schema variant: string, buffer, binary or base64
    #[arg(short = 't', long)]
    pub variant: Option<FileVariant>,

    /// Description attached to the schema
    #[arg(short, long)]
    pub description: Option<String>,

    /// Example values attached to the schema
    #[arg(short, long)]
    pub example: Vec<String>,

    /// Render a markdown field table instead of the depiction
    #[arg(long)]
    pub markdown: bool,

    /// Field name used in the markdown table
    #[arg(long, default_value = "file")]
    pub field: String,
}

/// How the caller turns file bytes into a candidate value
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReadEncoding {
    /// UTF-8 text string
    Utf8,
    /// Raw byte buffer
    Buffer,
    /// Latin-1 string, one character per byte
    Binary,
    /// Base64-encoded string
    Base64,
}

impl ReadEncoding {
    /// The reading that naturally produces values for a variant
    pub fn for_variant(variant: FileVariant) -> Self {
        match variant {
            FileVariant::String => ReadEncoding::Utf8,
            FileVariant::Buffer => ReadEncoding::Buffer,
            FileVariant::Binary => ReadEncoding::Binary,
            FileVariant::Base64 => ReadEncoding::Base64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadEncoding::Utf8 => "utf8",
            ReadEncoding::Buffer => "buffer",
            ReadEncoding::Binary => "binary",
            ReadEncoding::Base64 => "base64",
        }
    }
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_arguments() {
        let cli = Cli::parse_from(["fileschema", "check", "logo.svg", "-t", "base64", "--read-as", "utf8"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.file, PathBuf::from("logo.svg"));
                assert_eq!(args.variant, Some(FileVariant::Base64));
                assert_eq!(args.read_as, Some(ReadEncoding::Utf8));
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result = Cli::try_parse_from(["fileschema", "check", "logo.svg", "--variant", "stream"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["fileschema", "-vv", "describe"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["fileschema", "--quiet", "describe"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_encoding_for_variant() {
        assert_eq!(ReadEncoding::for_variant(FileVariant::String), ReadEncoding::Utf8);
        assert_eq!(ReadEncoding::for_variant(FileVariant::Buffer), ReadEncoding::Buffer);
        assert_eq!(ReadEncoding::for_variant(FileVariant::Binary), ReadEncoding::Binary);
        assert_eq!(ReadEncoding::for_variant(FileVariant::Base64), ReadEncoding::Base64);
    }
}
