pub mod compression;
pub mod text;
