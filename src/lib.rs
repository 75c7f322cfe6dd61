pub mod models;
pub mod utils;
pub mod writer;

pub use models::write_request::{Contents, Encoding, UnknownEncodingError, WriteMode, WriteOptions};
pub use utils::encoding::codec::EncodeError;
pub use writer::engine::{
    WriteError, write_file, write_file_sync, write_file_sync_with, write_file_with,
};
