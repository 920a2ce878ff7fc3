pub mod output_mode;
pub mod platform;
