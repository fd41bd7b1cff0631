//! Command implementations for shop-cli

pub mod check;
pub mod options;
pub mod products;
pub mod show;

pub use check::run_check;
pub use options::run_options;
pub use products::run_products;
pub use show::run_show;
