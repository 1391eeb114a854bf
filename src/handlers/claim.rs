use pinocchio::error::ProgramError;

use crate::{
    errors::{map_layout_err, ReferralError},
    layouts::{PlayerAccountView, TokenAccountCoreView, TokenAccountWithAmountView, PUBKEY_LEN},
};

use super::{read_initialized_game, read_player};

/// Zeroes the player's accrued reward and returns the amount the runtime must
/// move from the pool to the player's token account.
#[allow(clippy::too_many_arguments)]
pub fn process(
    signer_pubkey: [u8; PUBKEY_LEN],
    game_account_pubkey: [u8; PUBKEY_LEN],
    reward_pool_pubkey: [u8; PUBKEY_LEN],
    authority_pubkey: [u8; PUBKEY_LEN],
    game_account_data: &[u8],
    player_account_data: &mut [u8],
    reward_pool_data: &[u8],
    player_token_account_data: &[u8],
) -> Result<u64, ProgramError> {
    let game = read_initialized_game(game_account_data)?;

    let player = read_player(player_account_data)?;
    if !player.is_initialized {
        return Err(ReferralError::NotInitialized.into());
    }
    if player.game_account != game_account_pubkey {
        return Err(ReferralError::GameAccountMismatch.into());
    }
    if player.owner != signer_pubkey {
        return Err(ReferralError::Unauthorized.into());
    }
    let amount = player.reward_to_claim;
    if amount == 0 {
        return Err(ReferralError::UnclaimableAmount.into());
    }

    if game.reward_pool_account != reward_pool_pubkey {
        return Err(ReferralError::InvalidRewardPool.into());
    }
    let pool = TokenAccountWithAmountView::read_from_account_data(reward_pool_data)
        .map_err(|_| ProgramError::from(ReferralError::InvalidTokenAccount))?;
    if pool.owner != authority_pubkey {
        return Err(ReferralError::InvalidAuthority.into());
    }

    let destination = TokenAccountCoreView::read_from_account_data(player_token_account_data)
        .map_err(|_| ProgramError::from(ReferralError::InvalidTokenAccount))?;
    if destination.mint != pool.mint {
        return Err(ReferralError::InvalidTokenAccount.into());
    }

    if pool.amount < amount {
        return Err(ReferralError::InsufficientRewardPool.into());
    }

    PlayerAccountView::write_reward_to_account_data(player_account_data, 0)
        .map_err(map_layout_err)?;
    Ok(amount)
}
