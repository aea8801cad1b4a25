//! Helpers for end-to-end tests: a server process on a free port and a
//! headless browser.

pub mod browser;
pub mod test_server;
