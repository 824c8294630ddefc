//! Sinks for the effect of a `Run` call.

mod memory;
mod writer;

pub use memory::MemoryOutput;
pub use writer::WriterOutput;
