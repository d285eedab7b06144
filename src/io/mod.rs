pub mod options_file;

pub use options_file::{default_options_path, load_options, save_options};
