pub mod amounts;
pub mod digest;
pub mod time;
pub mod validation;
