pub mod draft_runner;
pub mod params;
pub mod screens;
