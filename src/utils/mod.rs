pub mod format_utils;

pub use format_utils::{format_count, format_elapsed, format_fixed};
