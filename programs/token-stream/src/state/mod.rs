pub mod stream_params;
pub mod stream_registry;

pub use stream_params::*;
pub use stream_registry::*;
