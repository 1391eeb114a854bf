use pinocchio::error::ProgramError;

use crate::{
    errors::{map_layout_err, ReferralError},
    layouts::{PlayerAccountView, PUBKEY_LEN},
};

use super::{read_initialized_game, read_player};

/// Referrer record supplied alongside a registration.
#[derive(Debug, Clone, Copy)]
pub struct UplineAccount<'a> {
    pub address: [u8; PUBKEY_LEN],
    pub data: &'a [u8],
}

pub fn process(
    player_pubkey: [u8; PUBKEY_LEN],
    player_account_pubkey: [u8; PUBKEY_LEN],
    game_account_pubkey: [u8; PUBKEY_LEN],
    game_account_data: &[u8],
    player_account_data: &mut [u8],
    upline_account: Option<UplineAccount<'_>>,
    upline: Option<[u8; PUBKEY_LEN]>,
) -> Result<(), ProgramError> {
    read_initialized_game(game_account_data)?;

    let player = read_player(player_account_data)?;
    if player.is_initialized {
        return Err(ReferralError::AlreadyInitialized.into());
    }

    match (upline, upline_account) {
        (None, None) => {}
        (Some(upline), _) if upline == player_account_pubkey => {
            return Err(ReferralError::SelfReferencingUpline.into());
        }
        (Some(upline), Some(account)) => {
            if account.address != upline {
                return Err(ReferralError::InvalidUpline.into());
            }
            let referrer = read_player(account.data)
                .map_err(|_| ProgramError::from(ReferralError::InvalidUpline))?;
            if !referrer.is_initialized || referrer.game_account != game_account_pubkey {
                return Err(ReferralError::InvalidUpline.into());
            }
        }
        (Some(_), None) | (None, Some(_)) => return Err(ReferralError::InvalidUpline.into()),
    }

    PlayerAccountView {
        is_initialized: true,
        owner: player_pubkey,
        reward_to_claim: 0,
        game_account: game_account_pubkey,
        upline,
    }
    .write_to_account_data(player_account_data)
    .map_err(map_layout_err)
}
