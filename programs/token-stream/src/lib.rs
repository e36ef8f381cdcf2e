use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod streamflow;
pub mod utils;

use instructions::*;
use state::StreamUserInputs;

declare_id!("GPqB5Y6ewhwmeZtmCfVyw6A74nLV4eEqg2AQH4zFczy6");

#[program]
pub mod token_stream {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn emit_token_holdings(ctx: Context<EmitTokenHoldings>) -> Result<()> {
        instructions::emit_token_holdings(ctx)
    }

    pub fn create_token_stream(
        ctx: Context<CreateTokenStream>,
        inputs: StreamUserInputs,
    ) -> Result<()> {
        instructions::create_token_stream(ctx, inputs)
    }
}
