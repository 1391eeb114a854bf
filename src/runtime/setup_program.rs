extern crate alloc;

use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};
use pinocchio_log::log;

#[cfg(not(test))]
use pinocchio_token::instructions::{AuthorityType, SetAuthority};

use crate::{
    derivation::derive_authority_address,
    handlers::{
        init,
        register::{self, UplineAccount},
    },
    layouts::PUBKEY_LEN,
};

#[cfg(test)]
use crate::{errors::map_layout_err, layouts::TokenAccountWithAmountView};

use super::checks::{
    require_game_address, require_signer, require_state_account, require_token_account,
    require_token_program, require_writable,
};

pub(super) fn process_init(program_id: &Address, accounts: &[AccountView]) -> ProgramResult {
    let (admin, game_account, reward_pool, token_program) = match accounts {
        [admin, game_account, reward_pool, token_program] => {
            (admin, game_account, reward_pool, token_program)
        }
        _ => return Err(ProgramError::NotEnoughAccountKeys),
    };

    require_signer(admin)?;
    require_state_account(game_account, program_id, true)?;
    require_game_address(game_account, admin, program_id)?;
    require_writable(reward_pool)?;
    require_token_program(token_program)?;
    require_token_account(reward_pool, token_program)?;

    let (authority, _) = derive_authority_address(program_id);

    let (outcome, game_shadow) = {
        let game_data = game_account.try_borrow()?;
        let mut game_shadow = game_data.to_vec();
        let pool_data = reward_pool.try_borrow()?;

        let outcome = init::process(
            admin.address().to_bytes(),
            reward_pool.address().to_bytes(),
            authority.to_bytes(),
            &mut game_shadow,
            &pool_data,
        )?;
        (outcome, game_shadow)
    };

    if outcome.reassign_pool_owner {
        hand_pool_to_authority(reward_pool, admin, &authority)?;
    }

    {
        let mut game_data = game_account.try_borrow_mut()?;
        game_data.copy_from_slice(&game_shadow);
    }

    log!("Init: game ready, pool reassigned {}", outcome.reassign_pool_owner as u64);
    Ok(())
}

pub(super) fn process_register(
    program_id: &Address,
    accounts: &[AccountView],
    upline: Option<[u8; PUBKEY_LEN]>,
) -> ProgramResult {
    let (player, player_account, game_account, upline_account) = match accounts {
        [player, player_account, game_account] => (player, player_account, game_account, None),
        [player, player_account, game_account, upline_account] => {
            (player, player_account, game_account, Some(upline_account))
        }
        _ => return Err(ProgramError::NotEnoughAccountKeys),
    };

    require_signer(player)?;
    require_state_account(player_account, program_id, true)?;
    require_state_account(game_account, program_id, false)?;
    if let Some(upline_account) = upline_account {
        require_state_account(upline_account, program_id, false)?;
    }

    let player_shadow = {
        let game_data = game_account.try_borrow()?;
        let player_data = player_account.try_borrow()?;
        let mut player_shadow = player_data.to_vec();
        drop(player_data);
        let upline_data = match upline_account {
            Some(account) => Some(account.try_borrow()?),
            None => None,
        };

        register::process(
            player.address().to_bytes(),
            player_account.address().to_bytes(),
            game_account.address().to_bytes(),
            &game_data,
            &mut player_shadow,
            upline_account.zip(upline_data.as_deref()).map(|(account, data)| UplineAccount {
                address: account.address().to_bytes(),
                data,
            }),
            upline,
        )?;
        player_shadow
    };

    {
        let mut player_data = player_account.try_borrow_mut()?;
        player_data.copy_from_slice(&player_shadow);
    }

    log!("Register: upline present {}", upline.is_some() as u64);
    Ok(())
}

#[cfg(not(test))]
fn hand_pool_to_authority(
    reward_pool: &AccountView,
    admin: &AccountView,
    authority: &Address,
) -> ProgramResult {
    SetAuthority {
        account: reward_pool,
        authority: admin,
        authority_type: AuthorityType::AccountOwner,
        new_authority: Some(authority),
    }
    .invoke()
}

#[cfg(test)]
fn hand_pool_to_authority(
    reward_pool: &AccountView,
    _admin: &AccountView,
    authority: &Address,
) -> ProgramResult {
    let mut data = reward_pool.try_borrow_mut()?;
    TokenAccountWithAmountView::write_owner_to_account_data(&mut data, &authority.to_bytes())
        .map_err(map_layout_err)
}
