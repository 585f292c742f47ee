pub mod ballistic;
pub mod report;
pub mod runner;
pub mod scenes;
