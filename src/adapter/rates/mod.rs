mod fixed;
mod http;

pub use fixed::*;
pub use http::*;
