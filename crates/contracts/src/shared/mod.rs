pub mod filter;
pub mod options;
