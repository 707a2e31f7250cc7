pub mod backup;
pub mod checksum;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod refresh;
pub mod store;
pub mod url_model;
