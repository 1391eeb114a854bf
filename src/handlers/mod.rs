//! Pure state transitions over account bytes.
//!
//! Every handler decodes and validates all of its inputs before it writes to
//! any output slice, so an `Err` never leaves a partially updated record.

pub mod add_reward;
pub mod claim;
pub mod init;
pub mod register;

use pinocchio::error::ProgramError;

use crate::{
    errors::{map_layout_err, ReferralError},
    layouts::{GameAccountView, PlayerAccountView},
};

pub(crate) fn read_initialized_game(data: &[u8]) -> Result<GameAccountView, ProgramError> {
    let game = GameAccountView::read_from_account_data(data).map_err(map_layout_err)?;
    if !game.is_initialized {
        return Err(ReferralError::NotInitialized.into());
    }
    Ok(game)
}

pub(crate) fn read_player(data: &[u8]) -> Result<PlayerAccountView, ProgramError> {
    PlayerAccountView::read_from_account_data(data).map_err(map_layout_err)
}
