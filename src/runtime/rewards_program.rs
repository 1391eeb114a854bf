extern crate alloc;

use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};
use pinocchio_log::log;

#[cfg(not(test))]
use pinocchio::cpi::{Seed, Signer};
#[cfg(not(test))]
use pinocchio_token::instructions::Transfer as TokenTransfer;

use crate::derivation::authority_signer_seeds;
use crate::handlers::{
    add_reward::{self, UplineRewardAccount},
    claim,
};

#[cfg(test)]
use crate::{errors::ReferralError, layouts::TokenAccountWithAmountView};

use super::checks::{
    require_authority, require_signer, require_state_account, require_token_account,
    require_token_program, require_writable,
};

pub(super) fn process_add_reward(
    program_id: &Address,
    accounts: &[AccountView],
    reward_amount: u64,
) -> ProgramResult {
    let (admin, game_account, player_account, upline_account) = match accounts {
        [admin, game_account, player_account] => (admin, game_account, player_account, None),
        [admin, game_account, player_account, upline_account] => {
            (admin, game_account, player_account, Some(upline_account))
        }
        _ => return Err(ProgramError::NotEnoughAccountKeys),
    };

    require_signer(admin)?;
    require_state_account(game_account, program_id, true)?;
    require_state_account(player_account, program_id, true)?;
    if let Some(upline_account) = upline_account {
        require_state_account(upline_account, program_id, true)?;
    }

    let (totals, player_shadow, upline_shadow) = {
        let game_data = game_account.try_borrow()?;
        let mut player_shadow = player_account.try_borrow()?.to_vec();
        let mut upline_shadow = match upline_account {
            Some(account) => Some(account.try_borrow()?.to_vec()),
            None => None,
        };

        let upline = match (upline_account, upline_shadow.as_deref_mut()) {
            (Some(account), Some(data)) => Some(UplineRewardAccount {
                address: account.address().to_bytes(),
                data,
            }),
            _ => None,
        };
        let totals = add_reward::process(
            admin.address().to_bytes(),
            game_account.address().to_bytes(),
            &game_data,
            &mut player_shadow,
            upline,
            reward_amount,
        )?;
        (totals, player_shadow, upline_shadow)
    };

    {
        let mut player_data = player_account.try_borrow_mut()?;
        player_data.copy_from_slice(&player_shadow);
    }
    if let (Some(account), Some(shadow)) = (upline_account, upline_shadow) {
        let mut upline_data = account.try_borrow_mut()?;
        upline_data.copy_from_slice(&shadow);
    }

    log!(
        "AddReward: amount {}, player total {}",
        reward_amount,
        totals.player_reward
    );
    if let Some(upline_total) = totals.upline_reward {
        log!("AddReward: upline total {}", upline_total);
    }
    Ok(())
}

pub(super) fn process_claim(program_id: &Address, accounts: &[AccountView]) -> ProgramResult {
    let (player, game_account, player_account, reward_pool, authority, player_token_account, token_program) =
        match accounts {
            [player, game_account, player_account, reward_pool, authority, player_token_account, token_program] => {
                (player, game_account, player_account, reward_pool, authority, player_token_account, token_program)
            }
            _ => return Err(ProgramError::NotEnoughAccountKeys),
        };

    require_signer(player)?;
    require_state_account(game_account, program_id, true)?;
    require_state_account(player_account, program_id, true)?;
    require_writable(reward_pool)?;
    require_writable(player_token_account)?;
    require_token_program(token_program)?;
    require_token_account(reward_pool, token_program)?;
    require_token_account(player_token_account, token_program)?;
    let authority_bump = require_authority(authority, program_id)?;

    let (amount, player_shadow) = {
        let game_data = game_account.try_borrow()?;
        let mut player_shadow = player_account.try_borrow()?.to_vec();
        let pool_data = reward_pool.try_borrow()?;
        let player_token_data = player_token_account.try_borrow()?;

        let amount = claim::process(
            player.address().to_bytes(),
            game_account.address().to_bytes(),
            reward_pool.address().to_bytes(),
            authority.address().to_bytes(),
            &game_data,
            &mut player_shadow,
            &pool_data,
            &player_token_data,
        )?;
        (amount, player_shadow)
    };

    transfer_reward(reward_pool, player_token_account, authority, authority_bump, amount)?;

    {
        let mut player_data = player_account.try_borrow_mut()?;
        player_data.copy_from_slice(&player_shadow);
    }

    log!("Claim: paid {}", amount);
    Ok(())
}

#[cfg(not(test))]
fn transfer_reward(
    reward_pool: &AccountView,
    player_token_account: &AccountView,
    authority: &AccountView,
    authority_bump: u8,
    amount: u64,
) -> ProgramResult {
    let bump = [authority_bump];
    let [seed, bump_seed] = authority_signer_seeds(&bump);
    let signer_seeds: [Seed<'_>; 2] = [Seed::from(seed), Seed::from(bump_seed)];
    let signer = Signer::from(&signer_seeds);

    TokenTransfer {
        from: reward_pool,
        to: player_token_account,
        authority,
        amount,
    }
    .invoke_signed(&[signer])
}

#[cfg(test)]
fn transfer_reward(
    reward_pool: &AccountView,
    player_token_account: &AccountView,
    authority: &AccountView,
    authority_bump: u8,
    amount: u64,
) -> ProgramResult {
    // Signer seeds must re-derive the authority.
    let bump = [authority_bump];
    let signed_as = Address::create_program_address(
        &authority_signer_seeds(&bump),
        &crate::runtime::test_support::PROGRAM_ID,
    );
    if signed_as.ok().as_ref() != Some(authority.address()) {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let pool_amount = {
        let data = reward_pool.try_borrow()?;
        TokenAccountWithAmountView::read_from_account_data(&data)
            .map_err(|_| ProgramError::InvalidAccountData)?
            .amount
    };
    let player_amount = {
        let data = player_token_account.try_borrow()?;
        TokenAccountWithAmountView::read_from_account_data(&data)
            .map_err(|_| ProgramError::InvalidAccountData)?
            .amount
    };

    let next_pool_amount = pool_amount
        .checked_sub(amount)
        .ok_or::<ProgramError>(ReferralError::InsufficientRewardPool.into())?;
    let next_player_amount = player_amount
        .checked_add(amount)
        .ok_or::<ProgramError>(ReferralError::RewardAmountOverflow.into())?;

    {
        let mut data = reward_pool.try_borrow_mut()?;
        TokenAccountWithAmountView::write_amount_to_account_data(&mut data, next_pool_amount)
            .map_err(|_| ProgramError::InvalidAccountData)?;
    }
    {
        let mut data = player_token_account.try_borrow_mut()?;
        TokenAccountWithAmountView::write_amount_to_account_data(&mut data, next_player_amount)
            .map_err(|_| ProgramError::InvalidAccountData)?;
    }

    Ok(())
}
