pub mod cli;
pub mod input;
pub mod output;

pub use cli::{print_error_with_source, print_source};
pub use input::read_source;
pub use output::Printer;
