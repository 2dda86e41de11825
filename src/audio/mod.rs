pub mod recorder;
pub mod source;

pub use recorder::{DEFAULT_CHUNK_SAMPLES, MAX_CHUNK_SAMPLES, record};
pub use source::{PcmSource, SampleSource};
