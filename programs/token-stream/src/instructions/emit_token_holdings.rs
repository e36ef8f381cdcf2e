use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::StreamFormError;

/// Emit the mints the signer holds a non-zero balance of.
/// remaining_accounts: the signer's SPL token accounts.
pub fn emit_token_holdings(ctx: Context<EmitTokenHoldings>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    let mut balances = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        require_keys_eq!(*info.owner, anchor_spl::token::ID, StreamFormError::InvalidTokenAccount);
        let data = info.try_borrow_data()?;
        let account = TokenAccount::try_deserialize(&mut &data[..])?;
        require_keys_eq!(account.owner, owner, StreamFormError::InvalidTokenAccount);
        balances.push((account.mint, account.amount));
    }

    let mints = held_mints(&balances);
    msg!("{} of {} token accounts hold a balance", mints.len(), balances.len());

    emit!(TokenHoldings { owner, mints });

    Ok(())
}

/// Mints with a non-zero amount, first-seen order, no duplicates.
pub fn held_mints(balances: &[(Pubkey, u64)]) -> Vec<Pubkey> {
    let mut mints: Vec<Pubkey> = Vec::new();
    for (mint, amount) in balances {
        if *amount > 0 && !mints.contains(mint) {
            mints.push(*mint);
        }
    }
    mints
}

#[derive(Accounts)]
pub struct EmitTokenHoldings<'info> {
    pub owner: Signer<'info>,
}

#[event]
pub struct TokenHoldings {
    pub owner: Pubkey,
    pub mints: Vec<Pubkey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_empty_accounts_and_duplicates() {
        let usdc = Pubkey::new_unique();
        let bonk = Pubkey::new_unique();
        let dust = Pubkey::new_unique();

        let mints = held_mints(&[(usdc, 5), (dust, 0), (bonk, 1), (usdc, 9)]);
        assert_eq!(mints, vec![usdc, bonk]);
    }

    #[test]
    fn no_accounts_no_holdings() {
        assert!(held_mints(&[]).is_empty());
    }
}
