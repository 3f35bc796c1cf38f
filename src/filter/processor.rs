//! File processing API
//!
//! A processing spec such as `blocks-text` or `rules-json` names what to extract from a
//! filter (the stage) and how to print it (the format):
//!
//!     tokens    per-line lexemes
//!     rules     one rule per line, as matched
//!     blocks    the built document
//!
//!     text      filter syntax listings
//!     json      serde_json output

use std::fmt;
use std::fs;
use std::path::Path;

use crate::filter::error::FilterError;
use crate::filter::formats::{json, render_document, render_rules, render_tokens, RenderOptions};
use crate::filter::lexer::{split_lines, tokenize_line};
use crate::filter::{parse, parse_rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Tokens,
    Rules,
    Blocks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingStage {
    fn as_str(self) -> &'static str {
        match self {
            ProcessingStage::Tokens => "tokens",
            ProcessingStage::Rules => "rules",
            ProcessingStage::Blocks => "blocks",
        }
    }
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl ProcessingSpec {
    /// Parse a spec string like `rules-json`
    pub fn from_string(spec: &str) -> Result<Self, FilterError> {
        let (stage, format) = spec
            .split_once('-')
            .ok_or_else(|| FilterError::InvalidFormat(spec.to_string()))?;

        let stage = match stage {
            "tokens" => ProcessingStage::Tokens,
            "rules" => ProcessingStage::Rules,
            "blocks" => ProcessingStage::Blocks,
            _ => return Err(FilterError::InvalidFormat(format!("unknown stage `{}`", stage))),
        };
        let format = match format {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => return Err(FilterError::InvalidFormat(format!("unknown format `{}`", format))),
        };
        Ok(Self { stage, format })
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        let stages = [
            ProcessingStage::Tokens,
            ProcessingStage::Rules,
            ProcessingStage::Blocks,
        ];
        stages
            .into_iter()
            .flat_map(|stage| {
                [OutputFormat::Text, OutputFormat::Json]
                    .into_iter()
                    .map(move |format| ProcessingSpec { stage, format })
            })
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.as_str(), self.format.as_str())
    }
}

/// All spec strings accepted by [ProcessingSpec::from_string]
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Process filter text held in memory.
pub fn process_text(
    text: &str,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String, FilterError> {
    log::debug!("processing {} bytes as {}", text.len(), spec);
    match (spec.stage, spec.format) {
        (ProcessingStage::Tokens, format) => {
            let lines: Vec<_> = split_lines(text).map(tokenize_line).collect();
            match format {
                OutputFormat::Text => Ok(lines.iter().map(|line| render_tokens(line)).collect()),
                OutputFormat::Json => json::to_json(&lines),
            }
        }
        (ProcessingStage::Rules, OutputFormat::Text) => {
            Ok(render_rules(&parse_rules(text), options))
        }
        (ProcessingStage::Rules, OutputFormat::Json) => json::to_json(&parse_rules(text)),
        (ProcessingStage::Blocks, OutputFormat::Text) => {
            Ok(render_document(&parse(text)?, options))
        }
        (ProcessingStage::Blocks, OutputFormat::Json) => json::to_json(&parse(text)?),
    }
}

/// Read and process a filter file.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String, FilterError> {
    let text = fs::read_to_string(path.as_ref())?;
    process_text(&text, spec, options)
}
