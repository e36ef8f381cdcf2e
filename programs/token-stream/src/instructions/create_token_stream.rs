use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{streamflow, REGISTRY_SEED};
use crate::error::StreamFormError;
use crate::state::{CreateParams, StreamRecord, StreamRegistry, StreamUserInputs};
use crate::streamflow::{StreamClient, StreamflowCpi};
use crate::utils::digest::params_digest;
use crate::utils::time;
use crate::utils::validation::validate_stream_inputs;

pub fn create_token_stream(
    ctx: Context<CreateTokenStream>,
    inputs: StreamUserInputs,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let sender = ctx.accounts.sender.key();
    let token_balance = ctx.accounts.sender_tokens.amount;

    let a = &ctx.accounts;
    let mut client = StreamflowCpi {
        sender: a.sender.to_account_info(),
        sender_tokens: a.sender_tokens.to_account_info(),
        recipient: a.recipient.to_account_info(),
        metadata: a.metadata.to_account_info(),
        escrow_tokens: a.escrow_tokens.to_account_info(),
        recipient_tokens: a.recipient_tokens.to_account_info(),
        streamflow_treasury: a.streamflow_treasury.to_account_info(),
        streamflow_treasury_tokens: a.streamflow_treasury_tokens.to_account_info(),
        withdrawor: a.withdrawor.to_account_info(),
        partner: a.partner.to_account_info(),
        partner_tokens: a.partner_tokens.to_account_info(),
        mint: a.mint.to_account_info(),
        fee_oracle: a.fee_oracle.to_account_info(),
        rent: a.rent.to_account_info(),
        timelock_program: a.timelock_program.to_account_info(),
        token_program: a.token_program.to_account_info(),
        associated_token_program: a.associated_token_program.to_account_info(),
        system_program: a.system_program.to_account_info(),
    };

    let registry = &mut ctx.accounts.registry;
    let submitted = submit_stream(&mut client, registry, sender, token_balance, &inputs, now)?;

    emit!(StreamCreated {
        sender,
        stream: submitted.record.stream,
        mint: submitted.params.mint,
        recipient: submitted.params.recipient,
        name: submitted.params.name,
        start: submitted.params.start,
        cliff: submitted.params.cliff,
        period: submitted.params.period,
        total_created: registry.total_created,
    });

    Ok(())
}

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedStream {
    pub params: CreateParams,
    pub record: StreamRecord,
}

/// Validate the form, derive start/cliff, package the record, call the client
/// once and list the returned stream. `token_balance` is the sender's balance of
/// the selected mint and is only checked once the form is valid. Nothing is
/// recorded unless the client call succeeds.
pub fn submit_stream<C: StreamClient>(
    client: &mut C,
    registry: &mut StreamRegistry,
    sender: Pubkey,
    token_balance: u64,
    inputs: &StreamUserInputs,
    now_ts: i64,
) -> Result<SubmittedStream> {
    require_keys_eq!(registry.owner, sender, StreamFormError::UnauthorizedOwner);

    let valid = match validate_stream_inputs(inputs) {
        Ok(valid) => valid,
        Err(errors) => {
            errors.log();
            return err!(StreamFormError::ValidationFailed);
        }
    };
    require!(token_balance > 0, StreamFormError::NoTokenBalance);

    let times = time::stream_times(now_ts)?;
    let params = CreateParams::new(sender, valid, times)?;

    let stream = client.create(&params).map_err(|e| {
        msg!("stream creation failed: {}", e);
        e
    })?;

    let record = StreamRecord {
        stream,
        mint: params.mint,
        created_at: now_ts,
        params_digest: params_digest(&params),
    };
    registry.record(record)?;

    Ok(SubmittedStream { params, record })
}

#[derive(Accounts)]
pub struct CreateTokenStream<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, sender.key().as_ref()],
        bump = registry.bump,
        constraint = registry.owner == sender.key() @ StreamFormError::UnauthorizedOwner,
    )]
    pub registry: Box<Account<'info, StreamRegistry>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = sender_tokens.owner == sender.key() @ StreamFormError::InvalidTokenAccount,
        constraint = sender_tokens.mint == mint.key() @ StreamFormError::InvalidTokenMint,
    )]
    pub sender_tokens: Box<Account<'info, TokenAccount>>,

    /// CHECK: matched against the recipient input by the stream client
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    /// Fresh keypair; Streamflow initializes it as the stream account.
    #[account(mut)]
    pub metadata: Signer<'info>,

    /// CHECK: Streamflow escrow PDA, initialized by Streamflow
    #[account(
        mut,
        seeds = [streamflow::ESCROW_SEED, metadata.key().as_ref()],
        bump,
        seeds::program = streamflow::PROGRAM_ID,
    )]
    pub escrow_tokens: UncheckedAccount<'info>,

    /// CHECK: recipient ATA, created by Streamflow if needed
    #[account(mut)]
    pub recipient_tokens: UncheckedAccount<'info>,

    /// CHECK: fixed Streamflow treasury
    #[account(mut, address = streamflow::TREASURY)]
    pub streamflow_treasury: UncheckedAccount<'info>,

    /// CHECK: treasury ATA, created by Streamflow if needed
    #[account(mut)]
    pub streamflow_treasury_tokens: UncheckedAccount<'info>,

    /// CHECK: fixed Streamflow withdrawor
    #[account(mut, address = streamflow::WITHDRAWOR)]
    pub withdrawor: UncheckedAccount<'info>,

    /// CHECK: partner wallet, validated by Streamflow
    #[account(mut)]
    pub partner: UncheckedAccount<'info>,

    /// CHECK: partner ATA, created by Streamflow if needed
    #[account(mut)]
    pub partner_tokens: UncheckedAccount<'info>,

    /// CHECK: fixed Streamflow fee oracle
    #[account(address = streamflow::FEE_ORACLE)]
    pub fee_oracle: UncheckedAccount<'info>,

    pub rent: Sysvar<'info, Rent>,

    /// CHECK: Streamflow timelock program
    #[account(address = streamflow::PROGRAM_ID)]
    pub timelock_program: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct StreamCreated {
    pub sender: Pubkey,
    pub stream: Pubkey,
    pub mint: Pubkey,
    pub recipient: String,
    pub name: String,
    pub start: u64,
    pub cliff: u64,
    pub period: u64,
    pub total_created: u64,
}
