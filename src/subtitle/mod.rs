pub mod charset;
pub mod encoder;
pub mod scc;
pub mod time;
pub mod timed_text;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One displayed caption event. Times are seconds since midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionBlock {
    pub start: f64,
    pub end: f64,
    pub lines: Vec<String>,
}

impl CaptionBlock {
    pub fn new(start: f64, end: f64, lines: Vec<String>) -> Self {
        Self { start, end, lines }
    }
}

/// Ordered caption blocks shared by every format codec. Order is display
/// order; overlapping ranges are kept as-is.
pub type InternalFormat = Vec<CaptionBlock>;

/// The two entry points a format codec exposes to the surrounding library.
pub trait SubtitleConverter {
    fn file_content_to_internal_format(&self, content: &str) -> Result<InternalFormat>;
    fn internal_format_to_file_content(&self, internal: &[CaptionBlock]) -> String;
    fn extension(&self) -> &'static str;
}
