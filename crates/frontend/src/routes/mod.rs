pub mod page;
pub mod routes;

pub use page::PageKey;
