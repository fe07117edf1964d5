pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod naming;
pub mod pipeline;
pub mod select;
