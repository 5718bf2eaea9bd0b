//! Core application primitives (runtime, scheduler, HTTP surface)

pub mod bootstrap;
pub mod http;
pub mod runtime;
pub mod scheduler;

pub use bootstrap::*;
pub use http::*;
pub use runtime::*;
pub use scheduler::*;
