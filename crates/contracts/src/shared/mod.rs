pub mod filter;
pub mod store;
