mod command;
mod engine;
mod event;
mod journal;
mod processor;
mod rates;

pub use engine::*;
pub use journal::*;
pub use processor::*;
pub use rates::*;
