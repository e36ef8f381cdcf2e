use anchor_lang::prelude::*;

use crate::constants::{MAX_STREAM_RECORDS, REGISTRY_SEED};
use crate::state::StreamRegistry;

pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.bump = ctx.bumps.registry;
    registry.total_created = 0;
    registry.records = Vec::with_capacity(MAX_STREAM_RECORDS);

    emit!(RegistryInitialized {
        owner: registry.owner,
        registry: registry.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = owner,
        space = StreamRegistry::space(MAX_STREAM_RECORDS),
        seeds = [REGISTRY_SEED, owner.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, StreamRegistry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub owner: Pubkey,
    pub registry: Pubkey,
}
