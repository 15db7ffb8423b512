// Scenarist SCC output.
use super::encoder::encode_line;
use super::time::seconds_to_text;
use super::{timed_text, CaptionBlock, InternalFormat, SubtitleConverter};
use crate::error::Result;
use tracing::debug;

pub const SCC_HEADER: &str = "Scenarist_SCC V1.0";

// Control code pairs, doubled for channel redundancy.
const RESUME_CAPTION_LOADING: &str = "94ae 94ae";
const POP_ON: &str = "9420 9420";
const ERASE_DISPLAYED_MEMORY: &str = "942c 942c";
const PADDING: &str = "8080 8080";
const END_OF_CAPTION: &str = "942f 942f";

const LINE_END: &str = "\r\n\n";

/// Render caption blocks as an SCC file.
///
/// Each block becomes a pop-on caption loaded at its start time and erased
/// at its end time. Block lines are joined with CRLF before encoding.
pub fn emit(internal: &[CaptionBlock]) -> String {
    let mut content = format!("{}{}", SCC_HEADER, LINE_END);

    for block in internal {
        let text = block.lines.join("\r\n");

        content.push_str(&format!(
            "{}\t{} {} {} {} {} {}{}",
            seconds_to_text(block.start),
            RESUME_CAPTION_LOADING,
            POP_ON,
            encode_line(&text),
            ERASE_DISPLAYED_MEMORY,
            PADDING,
            END_OF_CAPTION,
            LINE_END
        ));
        content.push_str(&format!(
            "{}\t{}{}",
            seconds_to_text(block.end),
            ERASE_DISPLAYED_MEMORY,
            LINE_END
        ));
    }

    debug!("Emitted {} caption blocks as SCC", internal.len());

    content.trim().to_string()
}

/// SCC codec entry points. Reads timed text, writes SCC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SccConverter {
    /// Reject blocks without a time range instead of dropping them.
    pub strict: bool,
}

impl SccConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl SubtitleConverter for SccConverter {
    fn file_content_to_internal_format(&self, content: &str) -> Result<InternalFormat> {
        if self.strict {
            timed_text::parse_strict(content)
        } else {
            timed_text::parse(content)
        }
    }

    fn internal_format_to_file_content(&self, internal: &[CaptionBlock]) -> String {
        emit(internal)
    }

    fn extension(&self) -> &'static str {
        "scc"
    }
}
