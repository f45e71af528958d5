//! HTTP Handlers

mod book;
mod ping;
mod review;

pub use book::*;
pub use ping::*;
pub use review::*;
