pub mod catalog;
pub mod check;
pub mod init;

pub use catalog::{format_catalog, run_catalog};
pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
