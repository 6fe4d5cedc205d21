pub mod keys;
pub mod pagination;
pub mod state;
