pub mod contact;
pub mod email_address;
mod macros;
