use pinocchio::error::ProgramError;

use crate::{
    errors::{map_layout_err, ReferralError},
    layouts::{PlayerAccountView, PUBKEY_LEN},
};

use super::{read_initialized_game, read_player};

pub struct UplineRewardAccount<'a> {
    pub address: [u8; PUBKEY_LEN],
    pub data: &'a mut [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTotals {
    pub player_reward: u64,
    pub upline_reward: Option<u64>,
}

/// Credits `reward_amount` to the player and, when supplied, the same amount to
/// its direct upline. Propagation stops after one hop.
pub fn process(
    admin_pubkey: [u8; PUBKEY_LEN],
    game_account_pubkey: [u8; PUBKEY_LEN],
    game_account_data: &[u8],
    player_account_data: &mut [u8],
    upline_account: Option<UplineRewardAccount<'_>>,
    reward_amount: u64,
) -> Result<RewardTotals, ProgramError> {
    if reward_amount == 0 {
        return Err(ReferralError::InvalidRewardAmount.into());
    }

    let game = read_initialized_game(game_account_data)?;
    if game.admin != admin_pubkey {
        return Err(ReferralError::Unauthorized.into());
    }

    let player = read_player(player_account_data)?;
    if !player.is_initialized {
        return Err(ReferralError::NotInitialized.into());
    }
    if player.game_account != game_account_pubkey {
        return Err(ReferralError::GameAccountMismatch.into());
    }
    let player_reward = player
        .reward_to_claim
        .checked_add(reward_amount)
        .ok_or::<ProgramError>(ReferralError::RewardAmountOverflow.into())?;

    let upline_reward = match &upline_account {
        Some(account) => {
            if player.upline != Some(account.address) {
                return Err(ReferralError::InvalidUpline.into());
            }
            let upline = read_player(account.data)?;
            if !upline.is_initialized {
                return Err(ReferralError::InvalidUpline.into());
            }
            if upline.game_account != game_account_pubkey {
                return Err(ReferralError::GameAccountMismatch.into());
            }
            Some(
                upline
                    .reward_to_claim
                    .checked_add(reward_amount)
                    .ok_or::<ProgramError>(ReferralError::RewardAmountOverflow.into())?,
            )
        }
        None => None,
    };

    PlayerAccountView::write_reward_to_account_data(player_account_data, player_reward)
        .map_err(map_layout_err)?;
    if let (Some(account), Some(reward)) = (upline_account, upline_reward) {
        PlayerAccountView::write_reward_to_account_data(account.data, reward)
            .map_err(map_layout_err)?;
    }

    Ok(RewardTotals {
        player_reward,
        upline_reward,
    })
}
