pub mod format;
pub mod header;
pub mod reader;
pub mod writer;

pub use format::WavFormat;
pub use header::{HEADER_SIZE, WavHeader};
pub use reader::WavReader;
pub use writer::WavFileWriter;
