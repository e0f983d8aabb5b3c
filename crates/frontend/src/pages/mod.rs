pub mod category;
pub mod not_found;
pub mod search;
