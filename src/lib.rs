pub mod config;
pub mod error;
pub mod subtitle;

pub use config::Config;
pub use error::{Result, SccError};
pub use subtitle::{
    scc::SccConverter, timed_text::ParseReport, CaptionBlock, InternalFormat, SubtitleConverter,
};
