pub mod file_open;
pub mod header;
pub mod index;
pub mod session;
