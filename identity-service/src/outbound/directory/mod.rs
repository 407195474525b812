pub mod memory;

pub use memory::InMemoryUserDirectory;
