use anchor_lang::prelude::*;

use crate::errors::TribunalError;

/// Move lamports between accounts already owned by this program. Wallet
/// deposits go through a system-program CPI instead; this path is for
/// pool/escrow ledger movements and payouts.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let new_from = from
        .lamports()
        .checked_sub(amount)
        .ok_or(TribunalError::InsufficientEscrow)?;
    let new_to = to
        .lamports()
        .checked_add(amount)
        .ok_or(TribunalError::MathOverflow)?;
    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;
    Ok(())
}
