pub mod adaptors;
pub mod client;
pub mod forms;
pub mod views;
