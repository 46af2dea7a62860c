//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Entry body reading (`input`)
//! - Date phrase, tag list, and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{read_entry_body, read_optional_body};
pub use parsing::{
    interpret_date_phrase, parse_output_format, parse_tag_list, require_date_span, DateSpan,
    OutputFormat,
};
