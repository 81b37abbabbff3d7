//! Page components

mod error;
mod home;
mod product_detail;
mod products;
mod root;

pub use error::error_page;
pub use home::home_page;
pub use product_detail::product_detail_page;
pub use products::{products_page, Product, PRODUCTS};
pub use root::root_layout;
