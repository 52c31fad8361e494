pub mod articles;
pub mod authors;
