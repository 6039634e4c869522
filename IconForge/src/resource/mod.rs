//! Android resource document generation

mod writer;

pub use writer::ResourceDocument;
