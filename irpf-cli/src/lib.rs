pub mod app;
pub mod export;
pub mod logging;
pub mod report;
pub mod utils;
