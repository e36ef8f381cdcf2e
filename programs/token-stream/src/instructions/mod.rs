pub mod create_token_stream;
pub mod emit_token_holdings;
pub mod initialize_registry;

pub use create_token_stream::*;
pub use emit_token_holdings::*;
pub use initialize_registry::*;
