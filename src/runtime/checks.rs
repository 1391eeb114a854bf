use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

use crate::{
    constants::GAME_ACCOUNT_SEED,
    derivation::{derive_account_address, derive_authority_address},
    errors::ReferralError,
};

pub(super) fn require_signer(account: &AccountView) -> ProgramResult {
    if account.is_signer() { Ok(()) } else { Err(ProgramError::MissingRequiredSignature) }
}

pub(super) fn require_writable(account: &AccountView) -> ProgramResult {
    if account.is_writable() { Ok(()) } else { Err(ProgramError::Immutable) }
}

pub(super) fn require_owned_by(account: &AccountView, owner: &Address) -> ProgramResult {
    if account.owned_by(owner) { Ok(()) } else { Err(ProgramError::IncorrectProgramId) }
}

pub(super) fn require_token_program(account: &AccountView) -> ProgramResult {
    if account.address() == &pinocchio_token::ID {
        Ok(())
    } else {
        Err(ProgramError::IncorrectProgramId)
    }
}

pub(super) fn require_token_account(account: &AccountView, token_program: &AccountView) -> ProgramResult {
    require_owned_by(account, token_program.address())
        .map_err(|_| ReferralError::InvalidTokenAccount.into())
}

/// Program-owned game or player record, writable when the instruction mutates it.
pub(super) fn require_state_account(
    account: &AccountView,
    program_id: &Address,
    writable: bool,
) -> ProgramResult {
    require_owned_by(account, program_id)?;
    if writable {
        require_writable(account)?;
    }
    Ok(())
}

/// Checks that `account` is the pool authority for `program_id` and returns its bump.
pub(super) fn require_authority(account: &AccountView, program_id: &Address) -> Result<u8, ProgramError> {
    let (expected_address, bump) = derive_authority_address(program_id);
    if account.address() != &expected_address {
        return Err(ReferralError::InvalidAuthority.into());
    }
    Ok(bump)
}

/// The game record must sit at the admin's `GAME_ACCOUNT_SEED` address.
pub(super) fn require_game_address(
    game_account: &AccountView,
    admin: &AccountView,
    program_id: &Address,
) -> ProgramResult {
    let expected = derive_account_address(admin.address(), GAME_ACCOUNT_SEED, program_id)
        .map_err(|_| ProgramError::from(ReferralError::GameAccountMismatch))?;
    if game_account.address() != &expected {
        return Err(ReferralError::GameAccountMismatch.into());
    }
    Ok(())
}
