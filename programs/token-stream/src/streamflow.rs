//! Client for the Streamflow timelock program.
//!
//! Only the `create` instruction is used. Its arguments and account order follow
//! Streamflow's published interface; this program never reads stream state back.

use std::str::FromStr;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

use crate::constants::{streamflow, MAX_STREAM_NAME_LEN};
use crate::error::StreamFormError;
use crate::state::CreateParams;

/// Creates a stream from a parameter record and returns its identifier.
pub trait StreamClient {
    fn create(&mut self, params: &CreateParams) -> Result<Pubkey>;
}

/// Borsh arguments of Streamflow `create`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateArgs {
    pub start_time: u64,
    pub net_amount_deposited: u64,
    pub period: u64,
    pub amount_per_period: u64,
    pub cliff: u64,
    pub cliff_amount: u64,
    pub cancelable_by_sender: bool,
    pub cancelable_by_recipient: bool,
    pub automatic_withdrawal: bool,
    pub transferable_by_sender: bool,
    pub transferable_by_recipient: bool,
    pub can_topup: bool,
    pub stream_name: [u8; MAX_STREAM_NAME_LEN],
    pub withdraw_frequency: u64,
    pub pausable: Option<bool>,
    pub can_update_rate: Option<bool>,
}

impl From<&CreateParams> for CreateArgs {
    fn from(p: &CreateParams) -> Self {
        Self {
            start_time: p.start,
            net_amount_deposited: p.deposited_amount,
            period: p.period,
            amount_per_period: p.amount_per_period,
            cliff: p.cliff,
            cliff_amount: p.cliff_amount,
            cancelable_by_sender: p.cancelable_by_sender,
            cancelable_by_recipient: p.cancelable_by_recipient,
            automatic_withdrawal: false,
            transferable_by_sender: p.transferable_by_sender,
            transferable_by_recipient: p.transferable_by_recipient,
            can_topup: p.can_topup,
            stream_name: encode_stream_name(&p.name),
            withdraw_frequency: 0,
            pausable: None,
            can_update_rate: None,
        }
    }
}

/// Zero-padded UTF-8; anything past 64 bytes is dropped.
pub fn encode_stream_name(name: &str) -> [u8; MAX_STREAM_NAME_LEN] {
    let mut out = [0u8; MAX_STREAM_NAME_LEN];
    let bytes = name.as_bytes();
    let len = bytes.len().min(MAX_STREAM_NAME_LEN);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

/// Escrow token account PDA Streamflow derives for a stream.
fn escrow_tokens_address(metadata: &Pubkey) -> Pubkey {
    let (escrow, _) = Pubkey::find_program_address(
        &[streamflow::ESCROW_SEED, metadata.as_ref()],
        &streamflow::PROGRAM_ID,
    );
    escrow
}

/// Account keys of a `create` call, in instruction order.
#[derive(Clone, Debug)]
pub struct CreateKeys {
    pub sender: Pubkey,
    pub sender_tokens: Pubkey,
    pub recipient: Pubkey,
    pub metadata: Pubkey,
    pub escrow_tokens: Pubkey,
    pub recipient_tokens: Pubkey,
    pub streamflow_treasury: Pubkey,
    pub streamflow_treasury_tokens: Pubkey,
    pub withdrawor: Pubkey,
    pub partner: Pubkey,
    pub partner_tokens: Pubkey,
    pub mint: Pubkey,
    pub fee_oracle: Pubkey,
    pub rent: Pubkey,
    pub timelock_program: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}

pub fn create_instruction(keys: &CreateKeys, args: &CreateArgs) -> Result<Instruction> {
    let mut data = streamflow::CREATE_DISCRIMINATOR.to_vec();
    args.serialize(&mut data)
        .map_err(|_| StreamFormError::StreamArgsEncoding)?;

    let accounts = vec![
        AccountMeta::new(keys.sender, true),
        AccountMeta::new(keys.sender_tokens, false),
        AccountMeta::new(keys.recipient, false),
        AccountMeta::new(keys.metadata, true),
        AccountMeta::new(keys.escrow_tokens, false),
        AccountMeta::new(keys.recipient_tokens, false),
        AccountMeta::new(keys.streamflow_treasury, false),
        AccountMeta::new(keys.streamflow_treasury_tokens, false),
        AccountMeta::new(keys.withdrawor, false),
        AccountMeta::new(keys.partner, false),
        AccountMeta::new(keys.partner_tokens, false),
        AccountMeta::new_readonly(keys.mint, false),
        AccountMeta::new_readonly(keys.fee_oracle, false),
        AccountMeta::new_readonly(keys.rent, false),
        AccountMeta::new_readonly(keys.timelock_program, false),
        AccountMeta::new_readonly(keys.token_program, false),
        AccountMeta::new_readonly(keys.associated_token_program, false),
        AccountMeta::new_readonly(keys.system_program, false),
    ];

    Ok(Instruction {
        program_id: streamflow::PROGRAM_ID,
        accounts,
        data,
    })
}

/// `StreamClient` that invokes Streamflow through CPI. The transaction signer
/// and the fresh metadata keypair sign the outer transaction.
pub struct StreamflowCpi<'info> {
    pub sender: AccountInfo<'info>,
    pub sender_tokens: AccountInfo<'info>,
    pub recipient: AccountInfo<'info>,
    pub metadata: AccountInfo<'info>,
    pub escrow_tokens: AccountInfo<'info>,
    pub recipient_tokens: AccountInfo<'info>,
    pub streamflow_treasury: AccountInfo<'info>,
    pub streamflow_treasury_tokens: AccountInfo<'info>,
    pub withdrawor: AccountInfo<'info>,
    pub partner: AccountInfo<'info>,
    pub partner_tokens: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub fee_oracle: AccountInfo<'info>,
    pub rent: AccountInfo<'info>,
    pub timelock_program: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> StreamflowCpi<'info> {
    fn keys(&self) -> CreateKeys {
        CreateKeys {
            sender: self.sender.key(),
            sender_tokens: self.sender_tokens.key(),
            recipient: self.recipient.key(),
            metadata: self.metadata.key(),
            escrow_tokens: self.escrow_tokens.key(),
            recipient_tokens: self.recipient_tokens.key(),
            streamflow_treasury: self.streamflow_treasury.key(),
            streamflow_treasury_tokens: self.streamflow_treasury_tokens.key(),
            withdrawor: self.withdrawor.key(),
            partner: self.partner.key(),
            partner_tokens: self.partner_tokens.key(),
            mint: self.mint.key(),
            fee_oracle: self.fee_oracle.key(),
            rent: self.rent.key(),
            timelock_program: self.timelock_program.key(),
            token_program: self.token_program.key(),
            associated_token_program: self.associated_token_program.key(),
            system_program: self.system_program.key(),
        }
    }

    fn account_infos(&self) -> [AccountInfo<'info>; 18] {
        [
            self.sender.clone(),
            self.sender_tokens.clone(),
            self.recipient.clone(),
            self.metadata.clone(),
            self.escrow_tokens.clone(),
            self.recipient_tokens.clone(),
            self.streamflow_treasury.clone(),
            self.streamflow_treasury_tokens.clone(),
            self.withdrawor.clone(),
            self.partner.clone(),
            self.partner_tokens.clone(),
            self.mint.clone(),
            self.fee_oracle.clone(),
            self.rent.clone(),
            self.timelock_program.clone(),
            self.token_program.clone(),
            self.associated_token_program.clone(),
            self.system_program.clone(),
        ]
    }
}

impl<'info> StreamClient for StreamflowCpi<'info> {
    fn create(&mut self, params: &CreateParams) -> Result<Pubkey> {
        let recipient = Pubkey::from_str(&params.recipient)
            .map_err(|_| StreamFormError::InvalidRecipient)?;
        require_keys_eq!(recipient, self.recipient.key(), StreamFormError::InvalidRecipient);
        require_keys_eq!(params.mint, self.mint.key(), StreamFormError::InvalidTokenMint);
        require_keys_eq!(params.sender, self.sender.key(), StreamFormError::UnauthorizedOwner);
        require_keys_eq!(
            self.escrow_tokens.key(),
            escrow_tokens_address(self.metadata.key),
            StreamFormError::InvalidEscrowAccount
        );

        let ix = create_instruction(&self.keys(), &CreateArgs::from(params))?;
        invoke(&ix, &self.account_infos())?;

        Ok(self.metadata.key())
    }
}
