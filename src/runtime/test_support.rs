use core::mem::size_of;

use pinocchio::{
    account::{RuntimeAccount, NOT_BORROWED},
    AccountView, Address, ProgramResult,
};

use crate::{
    constants::{GAME_ACCOUNT_SEED, PLAYER_ACCOUNT_SEED, REWARD_POOL_SEED},
    derivation::{derive_account_address, derive_authority_address},
    instruction_layouts::GameInstruction,
    layouts::{
        PlayerAccountView, TokenAccountWithAmountView, GAME_ACCOUNT_LEN, PLAYER_ACCOUNT_LEN,
        TOKEN_ACCOUNT_WITH_AMOUNT_LEN,
    },
};

use super::program::process_instruction;

pub const PROGRAM_ID: Address = Address::new_from_array([7u8; 32]);
pub const SYSTEM_PROGRAM: Address = Address::new_from_array([0u8; 32]);

pub struct TestAccount {
    backing: Vec<u64>,
}

impl TestAccount {
    pub fn new(address: Address, owner: Address, is_signer: bool, is_writable: bool, data: &[u8]) -> Self {
        let bytes = size_of::<RuntimeAccount>() + data.len();
        let words = bytes.div_ceil(size_of::<u64>());
        let mut backing = vec![0u64; words.max(1)];
        let raw = backing.as_mut_ptr() as *mut RuntimeAccount;

        unsafe {
            (*raw).borrow_state = NOT_BORROWED;
            (*raw).is_signer = u8::from(is_signer);
            (*raw).is_writable = u8::from(is_writable);
            (*raw).executable = 0;
            (*raw).resize_delta = 0;
            (*raw).address = address;
            (*raw).owner = owner;
            (*raw).lamports = 1_000_000;
            (*raw).data_len = data.len() as u64;

            let data_ptr = (raw as *mut u8).add(size_of::<RuntimeAccount>());
            core::ptr::copy_nonoverlapping(data.as_ptr(), data_ptr, data.len());
        }

        Self { backing }
    }

    pub fn wallet(address: Address) -> Self {
        Self::new(address, SYSTEM_PROGRAM, true, true, &[])
    }

    pub fn view(&mut self) -> AccountView {
        unsafe { AccountView::new_unchecked(self.backing.as_mut_ptr() as *mut RuntimeAccount) }
    }

    pub fn address(&self) -> Address {
        unsafe { (*(self.backing.as_ptr() as *const RuntimeAccount)).address }
    }

    pub fn set_signer(&mut self, is_signer: bool) {
        unsafe { (*(self.backing.as_mut_ptr() as *mut RuntimeAccount)).is_signer = u8::from(is_signer) };
    }

    pub fn data(&self) -> &[u8] {
        let raw = self.backing.as_ptr() as *const RuntimeAccount;
        unsafe {
            core::slice::from_raw_parts(
                (raw as *const u8).add(size_of::<RuntimeAccount>()),
                (*raw).data_len as usize,
            )
        }
    }
}

pub fn token_account(mint: Address, owner: Address, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; TOKEN_ACCOUNT_WITH_AMOUNT_LEN];
    data[..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    TokenAccountWithAmountView::write_amount_to_account_data(&mut data, amount).unwrap();
    data
}

pub fn token_amount(account: &TestAccount) -> u64 {
    TokenAccountWithAmountView::read_from_account_data(account.data()).unwrap().amount
}

pub struct Player {
    pub wallet: TestAccount,
    pub account: TestAccount,
    pub token: TestAccount,
}

impl Player {
    pub fn record(&self) -> PlayerAccountView {
        PlayerAccountView::read_from_account_data(self.account.data()).unwrap()
    }

    pub fn reward(&self) -> u64 {
        self.record().reward_to_claim
    }
}

/// One deployment: admin wallet, game record, reward pool and the accounts every
/// instruction shares.
pub struct Harness {
    pub admin: TestAccount,
    pub game: TestAccount,
    pub pool: TestAccount,
    pub authority: TestAccount,
    pub token_program: TestAccount,
    pub mint: Address,
}

impl Harness {
    pub fn new(pool_balance: u64) -> Self {
        let admin = Address::new_from_array([1u8; 32]);
        let mint = Address::new_from_array([5u8; 32]);
        let game = derive_account_address(&admin, GAME_ACCOUNT_SEED, &PROGRAM_ID).unwrap();
        let pool = derive_account_address(&admin, REWARD_POOL_SEED, &pinocchio_token::ID).unwrap();
        let (authority, _) = derive_authority_address(&PROGRAM_ID);

        Self {
            admin: TestAccount::wallet(admin),
            game: TestAccount::new(game, PROGRAM_ID, false, true, &[0u8; GAME_ACCOUNT_LEN]),
            pool: TestAccount::new(
                pool,
                pinocchio_token::ID,
                false,
                true,
                &token_account(mint, admin, pool_balance),
            ),
            authority: TestAccount::new(authority, SYSTEM_PROGRAM, false, false, &[]),
            token_program: TestAccount::new(pinocchio_token::ID, SYSTEM_PROGRAM, false, false, &[]),
            mint,
        }
    }

    /// A harness whose game is already initialized.
    pub fn initialized(pool_balance: u64) -> Self {
        let mut harness = Self::new(pool_balance);
        harness.init().unwrap();
        harness
    }

    pub fn player(&self, byte: u8) -> Player {
        let wallet = Address::new_from_array([byte; 32]);
        let account = derive_account_address(&wallet, PLAYER_ACCOUNT_SEED, &PROGRAM_ID).unwrap();
        let token = Address::new_from_array([byte.wrapping_add(100); 32]);
        Player {
            wallet: TestAccount::wallet(wallet),
            account: TestAccount::new(account, PROGRAM_ID, false, true, &[0u8; PLAYER_ACCOUNT_LEN]),
            token: TestAccount::new(
                token,
                pinocchio_token::ID,
                false,
                true,
                &token_account(self.mint, wallet, 0),
            ),
        }
    }

    pub fn pool_balance(&self) -> u64 {
        token_amount(&self.pool)
    }

    pub fn init(&mut self) -> ProgramResult {
        let accounts = [
            self.admin.view(),
            self.game.view(),
            self.pool.view(),
            self.token_program.view(),
        ];
        process_instruction(&PROGRAM_ID, &accounts, GameInstruction::Init.pack().as_slice())
    }

    pub fn register(&mut self, player: &mut Player, upline: Option<&mut Player>) -> ProgramResult {
        let ix = GameInstruction::Register {
            upline: upline.as_ref().map(|upline| upline.account.address().to_bytes()),
        }
        .pack();
        match upline {
            Some(upline) => {
                let accounts = [
                    player.wallet.view(),
                    player.account.view(),
                    self.game.view(),
                    upline.account.view(),
                ];
                process_instruction(&PROGRAM_ID, &accounts, ix.as_slice())
            }
            None => {
                let accounts = [player.wallet.view(), player.account.view(), self.game.view()];
                process_instruction(&PROGRAM_ID, &accounts, ix.as_slice())
            }
        }
    }

    pub fn add_reward(
        &mut self,
        player: &mut Player,
        upline: Option<&mut Player>,
        reward_amount: u64,
    ) -> ProgramResult {
        let ix = GameInstruction::AddReward { reward_amount }.pack();
        match upline {
            Some(upline) => {
                let accounts = [
                    self.admin.view(),
                    self.game.view(),
                    player.account.view(),
                    upline.account.view(),
                ];
                process_instruction(&PROGRAM_ID, &accounts, ix.as_slice())
            }
            None => {
                let accounts = [self.admin.view(), self.game.view(), player.account.view()];
                process_instruction(&PROGRAM_ID, &accounts, ix.as_slice())
            }
        }
    }

    pub fn claim(&mut self, player: &mut Player) -> ProgramResult {
        let accounts = [
            player.wallet.view(),
            self.game.view(),
            player.account.view(),
            self.pool.view(),
            self.authority.view(),
            player.token.view(),
            self.token_program.view(),
        ];
        process_instruction(&PROGRAM_ID, &accounts, GameInstruction::Claim.pack().as_slice())
    }
}
