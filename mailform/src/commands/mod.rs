pub mod email;
pub mod serve;
