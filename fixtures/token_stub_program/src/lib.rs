//! Token program stand-in for Mollusk runs of the referral game.
//!
//! Works on a 72-byte token account prefix:
//!   [0..32]  mint
//!   [32..64] owner
//!   [64..72] amount (u64 LE)
//!
//! Supports Transfer (3) and SetAuthority (6) with the account-owner authority
//! type. Other instructions are rejected.
#![no_std]

use pinocchio::error::ProgramError;
use pinocchio::{entrypoint, AccountView, Address, ProgramResult};

entrypoint!(process_instruction, 4);

const OWNER_OFFSET: usize = 32;
const AMOUNT_OFFSET: usize = 64;
const ACCOUNT_LEN: usize = 72;

const IX_TRANSFER: u8 = 3;
const IX_SET_AUTHORITY: u8 = 6;
const AUTHORITY_TYPE_ACCOUNT_OWNER: u8 = 2;

const ERR_INSUFFICIENT_FUNDS: u32 = 1;
const ERR_OWNER_MISMATCH: u32 = 4;
const ERR_OVERFLOW: u32 = 14;

pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    match instruction_data.split_first() {
        Some((&IX_TRANSFER, rest)) => process_transfer(accounts, rest),
        Some((&IX_SET_AUTHORITY, rest)) => process_set_authority(accounts, rest),
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

fn process_transfer(accounts: &[AccountView], rest: &[u8]) -> ProgramResult {
    let [from, to, authority, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    let amount_bytes: [u8; 8] = rest
        .get(..8)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ProgramError::InvalidInstructionData)?;
    let amount = u64::from_le_bytes(amount_bytes);

    require_owner_signed(from, authority)?;

    let from_amount = read_amount(from)?;
    let to_amount = read_amount(to)?;
    let next_from = from_amount
        .checked_sub(amount)
        .ok_or(ProgramError::Custom(ERR_INSUFFICIENT_FUNDS))?;
    let next_to = to_amount
        .checked_add(amount)
        .ok_or(ProgramError::Custom(ERR_OVERFLOW))?;

    write_amount(from, next_from)?;
    write_amount(to, next_to)
}

fn process_set_authority(accounts: &[AccountView], rest: &[u8]) -> ProgramResult {
    let [account, authority, ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    // [authority_type, option flag, new authority (32)]
    if rest.len() < 2 + 32 || rest[0] != AUTHORITY_TYPE_ACCOUNT_OWNER || rest[1] != 1 {
        return Err(ProgramError::InvalidInstructionData);
    }

    require_owner_signed(account, authority)?;

    let mut data = account.try_borrow_mut()?;
    data[OWNER_OFFSET..OWNER_OFFSET + 32].copy_from_slice(&rest[2..34]);
    Ok(())
}

fn require_owner_signed(account: &AccountView, authority: &AccountView) -> ProgramResult {
    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    let data = account.try_borrow()?;
    if data.len() < ACCOUNT_LEN {
        return Err(ProgramError::InvalidAccountData);
    }
    if data[OWNER_OFFSET..OWNER_OFFSET + 32] != authority.address().to_bytes() {
        return Err(ProgramError::Custom(ERR_OWNER_MISMATCH));
    }
    Ok(())
}

fn read_amount(account: &AccountView) -> Result<u64, ProgramError> {
    let data = account.try_borrow()?;
    let bytes: [u8; 8] = data
        .get(AMOUNT_OFFSET..ACCOUNT_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ProgramError::InvalidAccountData)?;
    Ok(u64::from_le_bytes(bytes))
}

fn write_amount(account: &AccountView, amount: u64) -> ProgramResult {
    let mut data = account.try_borrow_mut()?;
    data[AMOUNT_OFFSET..ACCOUNT_LEN].copy_from_slice(&amount.to_le_bytes());
    Ok(())
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}
