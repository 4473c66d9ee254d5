pub mod browser;
pub mod test_server;
