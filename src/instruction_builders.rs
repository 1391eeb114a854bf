//! Client-side assembly of game instructions: payload bytes plus the ordered
//! account references the program expects.

use pinocchio::Address;

use crate::{
    derivation::derive_authority_address,
    instruction_layouts::{GameInstruction, PackedInstruction},
};

pub const MAX_ACCOUNTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRef {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountRef {
    pub const fn signer(address: Address) -> Self {
        Self {
            address,
            is_signer: true,
            is_writable: false,
        }
    }

    pub const fn writable(address: Address) -> Self {
        Self {
            address,
            is_signer: false,
            is_writable: true,
        }
    }

    pub const fn readonly(address: Address) -> Self {
        Self {
            address,
            is_signer: false,
            is_writable: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRefs {
    refs: [AccountRef; MAX_ACCOUNTS],
    len: usize,
}

impl AccountRefs {
    fn new() -> Self {
        Self {
            refs: [AccountRef::readonly(Address::new_from_array([0u8; 32])); MAX_ACCOUNTS],
            len: 0,
        }
    }

    // Every builder pushes at most MAX_ACCOUNTS entries.
    fn push(&mut self, account: AccountRef) {
        self.refs[self.len] = account;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[AccountRef] {
        &self.refs[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSpec {
    pub program_id: Address,
    pub accounts: AccountRefs,
    pub data: PackedInstruction,
}

impl InstructionSpec {
    fn new(program_id: &Address, instruction: GameInstruction) -> Self {
        Self {
            program_id: *program_id,
            accounts: AccountRefs::new(),
            data: instruction.pack(),
        }
    }

    fn with(mut self, account: AccountRef) -> Self {
        self.accounts.push(account);
        self
    }
}

/// `game_account` must be the admin's `create_with_seed` address for
/// `GAME_ACCOUNT_SEED` under `program_id`.
pub fn init(
    program_id: &Address,
    admin: &Address,
    game_account: &Address,
    reward_pool_account: &Address,
) -> InstructionSpec {
    InstructionSpec::new(program_id, GameInstruction::Init)
        .with(AccountRef::signer(*admin))
        .with(AccountRef::writable(*game_account))
        .with(AccountRef::writable(*reward_pool_account))
        .with(AccountRef::readonly(pinocchio_token::ID))
}

/// `upline` is the referrer's player account, not its wallet.
pub fn register(
    program_id: &Address,
    player: &Address,
    player_account: &Address,
    game_account: &Address,
    upline: Option<&Address>,
) -> InstructionSpec {
    let instruction = GameInstruction::Register {
        upline: upline.map(|address| address.to_bytes()),
    };
    let ix = InstructionSpec::new(program_id, instruction)
        .with(AccountRef::signer(*player))
        .with(AccountRef::writable(*player_account))
        .with(AccountRef::readonly(*game_account));
    match upline {
        Some(upline) => ix.with(AccountRef::readonly(*upline)),
        None => ix,
    }
}

/// Credits `reward_amount` to the player and, when `upline` is given, the same
/// amount to that upline. The program rejects a zero amount with
/// `ReferralError::InvalidRewardAmount`; the builder does not pre-check it.
pub fn add_reward(
    program_id: &Address,
    admin: &Address,
    game_account: &Address,
    player_account: &Address,
    upline: Option<&Address>,
    reward_amount: u64,
) -> InstructionSpec {
    let ix = InstructionSpec::new(program_id, GameInstruction::AddReward { reward_amount })
        .with(AccountRef::signer(*admin))
        .with(AccountRef::writable(*game_account))
        .with(AccountRef::writable(*player_account));
    match upline {
        Some(upline) => ix.with(AccountRef::writable(*upline)),
        None => ix,
    }
}

pub fn claim(
    program_id: &Address,
    player: &Address,
    game_account: &Address,
    player_account: &Address,
    reward_pool_account: &Address,
    player_token_account: &Address,
) -> InstructionSpec {
    let (authority, _) = derive_authority_address(program_id);
    InstructionSpec::new(program_id, GameInstruction::Claim)
        .with(AccountRef::signer(*player))
        .with(AccountRef::writable(*game_account))
        .with(AccountRef::writable(*player_account))
        .with(AccountRef::writable(*reward_pool_account))
        .with(AccountRef::readonly(authority))
        .with(AccountRef::writable(*player_token_account))
        .with(AccountRef::readonly(pinocchio_token::ID))
}
