mod context;
mod count;

pub use context::{color_choice_to_mode, directory_extensions, exclude_patterns, load_config};
pub use count::{exit_code_for, run_count};
