pub mod commands;
pub mod email;
