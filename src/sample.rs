//! Struct `Sample` represents a batch of rows.

// Provides the field type.
pub(crate) mod value;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use value::Value;
