pub mod hook;
pub mod scan;
pub mod summary;
