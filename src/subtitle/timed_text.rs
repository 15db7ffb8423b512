//! Timed-text reader: `start --> end` header lines followed by caption text,
//! blocks separated by a blank line.

use super::time::text_to_seconds;
use super::{CaptionBlock, InternalFormat};
use crate::error::{Result, SccError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

static BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<start>.*) --> (?P<end>.*)\n(?P<text>(?s:.*))").expect("Invalid regex")
});

const EXCERPT_LEN: usize = 40;

/// Result of a lenient parse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    pub blocks: InternalFormat,
    /// Non-blank candidate blocks that had no time range header.
    pub skipped: usize,
}

/// Parse timed text, silently dropping blocks without a time range header.
pub fn parse(content: &str) -> Result<InternalFormat> {
    parse_with_report(content).map(|report| report.blocks)
}

/// Same as [`parse`], also counting the dropped blocks.
pub fn parse_with_report(content: &str) -> Result<ParseReport> {
    let mut report = ParseReport::default();

    for (index, candidate) in candidate_blocks(&normalize(content)).enumerate() {
        match parse_block(candidate)? {
            Some(block) => report.blocks.push(block),
            None if candidate.trim().is_empty() => {}
            None => {
                debug!(
                    "Skipping block #{} without time range: {}",
                    index + 1,
                    excerpt(candidate)
                );
                report.skipped += 1;
            }
        }
    }

    debug!(
        "Parsed {} caption blocks ({} skipped)",
        report.blocks.len(),
        report.skipped
    );

    Ok(report)
}

/// Parse timed text, failing on the first block without a time range header.
pub fn parse_strict(content: &str) -> Result<InternalFormat> {
    let mut blocks = Vec::new();

    for (index, candidate) in candidate_blocks(&normalize(content)).enumerate() {
        if candidate.trim().is_empty() {
            continue;
        }
        match parse_block(candidate)? {
            Some(block) => blocks.push(block),
            None => {
                return Err(SccError::MalformedBlock {
                    index: index + 1,
                    excerpt: excerpt(candidate),
                })
            }
        }
    }

    Ok(blocks)
}

fn normalize(content: &str) -> String {
    content.replace("\r\n", "\n")
}

fn candidate_blocks(content: &str) -> impl Iterator<Item = &str> {
    content.trim().split("\n\n")
}

fn parse_block(candidate: &str) -> Result<Option<CaptionBlock>> {
    let Some(caps) = BLOCK_PATTERN.captures(candidate) else {
        return Ok(None);
    };

    let start = text_to_seconds(&caps["start"])?;
    let end = text_to_seconds(&caps["end"])?;
    let lines = caps["text"].split('\n').map(String::from).collect();

    Ok(Some(CaptionBlock::new(start, end, lines)))
}

fn excerpt(candidate: &str) -> String {
    let first_line = candidate.trim().lines().next().unwrap_or_default();
    first_line.chars().take(EXCERPT_LEN).collect()
}
