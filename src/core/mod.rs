pub mod chat_stream;
pub mod client;
pub mod config;
pub mod constants;
pub mod message;
pub mod prompt;
pub mod session;
pub mod transcript;
