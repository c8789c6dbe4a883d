pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod state;

#[cfg(test)]
mod test_support;
