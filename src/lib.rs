pub mod client;
pub mod config;
pub mod output;
pub mod record;
pub mod server;
pub mod store;
pub mod terminal;
pub mod view;
pub mod widget;
