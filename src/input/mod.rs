mod reader;

pub use reader::{END_MARKER, InputReader};
