pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod server;
pub mod session;
pub mod suggest;
pub mod timeline;

#[cfg(test)]
mod test_utils;
