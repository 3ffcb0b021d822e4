pub mod error;
pub mod moeda;
pub mod pagination;
