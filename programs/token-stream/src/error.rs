use anchor_lang::prelude::*;

/// Custom error codes for the token stream program.
#[error_code]
pub enum StreamFormError {
    #[msg("Stream inputs failed validation")]
    ValidationFailed,

    #[msg("Selected mint does not match the mint account")]
    InvalidTokenMint,

    #[msg("Token account is not owned by the signer")]
    InvalidTokenAccount,

    #[msg("Signer holds no balance of the selected mint")]
    NoTokenBalance,

    #[msg("Recipient is not a valid address or does not match the recipient account")]
    InvalidRecipient,

    #[msg("Escrow token account is not the Streamflow escrow for this stream")]
    InvalidEscrowAccount,

    #[msg("Failed to encode stream creation arguments")]
    StreamArgsEncoding,

    #[msg("Registry owner does not match the signer")]
    UnauthorizedOwner,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,
}
