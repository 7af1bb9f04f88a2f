mod directory;

pub use directory::{DirectoryError, UserDirectory};
