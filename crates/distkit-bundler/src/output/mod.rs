//! Output paths and file writing.

pub mod layout;
pub mod writer;

pub use layout::DistLayout;
pub use writer::WrittenFile;
