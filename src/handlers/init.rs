use pinocchio::error::ProgramError;

use crate::{
    errors::{map_layout_err, ReferralError},
    layouts::{GameAccountView, TokenAccountCoreView, PUBKEY_LEN},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOutcome {
    /// The pool is still owned by the admin and must be handed to the authority address.
    pub reassign_pool_owner: bool,
}

pub fn process(
    admin_pubkey: [u8; PUBKEY_LEN],
    reward_pool_pubkey: [u8; PUBKEY_LEN],
    authority_pubkey: [u8; PUBKEY_LEN],
    game_account_data: &mut [u8],
    reward_pool_data: &[u8],
) -> Result<InitOutcome, ProgramError> {
    let is_initialized = GameAccountView::read_is_initialized_from_account_data(game_account_data)
        .map_err(map_layout_err)?;
    if is_initialized {
        return Err(ReferralError::AlreadyInitialized.into());
    }

    let pool = TokenAccountCoreView::read_from_account_data(reward_pool_data)
        .map_err(|_| ProgramError::from(ReferralError::InvalidTokenAccount))?;
    let reassign_pool_owner = if pool.owner == admin_pubkey {
        true
    } else if pool.owner == authority_pubkey {
        false
    } else {
        return Err(ReferralError::InvalidRewardPool.into());
    };

    GameAccountView {
        is_initialized: true,
        admin: admin_pubkey,
        reward_pool_account: reward_pool_pubkey,
    }
    .write_to_account_data(game_account_data)
    .map_err(map_layout_err)?;

    Ok(InitOutcome { reassign_pool_owner })
}
