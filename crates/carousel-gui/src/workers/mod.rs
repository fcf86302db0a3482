mod dispatch;
mod fetch;
mod generation;
mod io;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_log};
pub(crate) use fetch::SlideFetcher;
pub use generation::LoadGeneration;
