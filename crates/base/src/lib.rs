pub mod entities;
pub mod helpers;
pub mod requests;
pub mod settings;
