pub mod formatter;

pub use formatter::{
    format_confirmation, format_error, format_fallback_notice, format_platform_lines,
    format_unsupported, should_use_colors,
};
