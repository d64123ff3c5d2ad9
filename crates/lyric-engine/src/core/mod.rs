pub mod engine;
pub mod history;
pub mod names;
pub mod session;
