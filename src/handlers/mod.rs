pub mod catalog;
pub mod not_found;

pub use catalog::list_products;
pub use not_found::page_not_found;
