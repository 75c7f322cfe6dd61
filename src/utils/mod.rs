pub mod encoding;
pub mod fs;
