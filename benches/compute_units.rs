/// Mollusk compute-unit bench for the four game instructions.
///
/// Output: `target/benches/compute_units.md`
use mollusk_svm::program::create_program_account_loader_v3;
use mollusk_svm::Mollusk;
use mollusk_svm_bencher::MolluskComputeUnitBencher;
use pinocchio::Address;
use solana_account::Account;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use referral_game::{
    constants::GAME_ACCOUNT_SEED,
    derivation::{derive_account_address, derive_authority_address},
    instruction_builders::{self, InstructionSpec},
    layouts::{
        GameAccountView, PlayerAccountView, TokenAccountWithAmountView, GAME_ACCOUNT_LEN,
        PLAYER_ACCOUNT_LEN, TOKEN_ACCOUNT_WITH_AMOUNT_LEN,
    },
};

fn main() {
    let program_id = Pubkey::new_unique();
    let program_address = address(&program_id);
    let token_program = Pubkey::new_from_array(pinocchio_token::ID.to_bytes());
    let (authority, _) = derive_authority_address(&program_address);
    let authority = pubkey(&authority);

    let admin = Pubkey::new_unique();
    let game = pubkey(
        &derive_account_address(&address(&admin), GAME_ACCOUNT_SEED, &program_address)
            .expect("game address"),
    );
    let pool = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let referrer_account = Pubkey::new_unique();
    let player_wallet = Pubkey::new_unique();
    let player_account = Pubkey::new_unique();
    let player_token = Pubkey::new_unique();

    let mut mollusk = Mollusk::new(&program_id, "referral_game");
    mollusk.add_program(&token_program, "token_stub_program");

    // ─── init ───────────────────────────────────────────────────────────
    let init_ix = to_instruction(&instruction_builders::init(
        &program_address,
        &address(&admin),
        &address(&game),
        &address(&pool),
    ));
    let init_accounts = vec![
        (admin, signer_account()),
        (game, Account::new(1_000_000_000, GAME_ACCOUNT_LEN, &program_id)),
        (pool, token_account(&token_program, mint, admin, 1_000_000)),
        (token_program, create_program_account_loader_v3(&token_program)),
    ];

    // ─── register (with upline) ─────────────────────────────────────────
    let register_ix = to_instruction(&instruction_builders::register(
        &program_address,
        &address(&player_wallet),
        &address(&player_account),
        &address(&game),
        Some(&address(&referrer_account)),
    ));
    let register_accounts = vec![
        (player_wallet, signer_account()),
        (player_account, Account::new(1_000_000_000, PLAYER_ACCOUNT_LEN, &program_id)),
        (game, game_account(&program_id, admin, pool)),
        (referrer_account, player_record(&program_id, Pubkey::new_unique(), game, 0, None)),
    ];

    // ─── add_reward (with upline) ───────────────────────────────────────
    let add_reward_ix = to_instruction(&instruction_builders::add_reward(
        &program_address,
        &address(&admin),
        &address(&game),
        &address(&player_account),
        Some(&address(&referrer_account)),
        50,
    ));
    let add_reward_accounts = vec![
        (admin, signer_account()),
        (game, game_account(&program_id, admin, pool)),
        (
            player_account,
            player_record(&program_id, player_wallet, game, 0, Some(referrer_account)),
        ),
        (referrer_account, player_record(&program_id, Pubkey::new_unique(), game, 0, None)),
    ];

    // ─── claim ──────────────────────────────────────────────────────────
    let claim_ix = to_instruction(&instruction_builders::claim(
        &program_address,
        &address(&player_wallet),
        &address(&game),
        &address(&player_account),
        &address(&pool),
        &address(&player_token),
    ));
    let claim_accounts = vec![
        (player_wallet, signer_account()),
        (game, game_account(&program_id, admin, pool)),
        (player_account, player_record(&program_id, player_wallet, game, 100, None)),
        (pool, token_account(&token_program, mint, authority, 1_000_000)),
        (authority, Account::new(0, 0, &Pubkey::default())),
        (player_token, token_account(&token_program, mint, player_wallet, 0)),
        (token_program, create_program_account_loader_v3(&token_program)),
    ];

    MolluskComputeUnitBencher::new(mollusk)
        .bench(("init", &init_ix, &init_accounts))
        .bench(("register", &register_ix, &register_accounts))
        .bench(("add_reward", &add_reward_ix, &add_reward_accounts))
        .bench(("claim", &claim_ix, &claim_accounts))
        .must_pass(true)
        .out_dir("../target/benches")
        .execute();
}

fn to_instruction(ix: &InstructionSpec) -> Instruction {
    Instruction {
        program_id: pubkey(&ix.program_id),
        accounts: ix
            .accounts
            .as_slice()
            .iter()
            .map(|account| {
                if account.is_writable {
                    AccountMeta::new(pubkey(&account.address), account.is_signer)
                } else {
                    AccountMeta::new_readonly(pubkey(&account.address), account.is_signer)
                }
            })
            .collect(),
        data: ix.data.as_slice().to_vec(),
    }
}

fn pubkey(address: &Address) -> Pubkey {
    Pubkey::new_from_array(address.to_bytes())
}

fn address(pubkey: &Pubkey) -> Address {
    Address::new_from_array(pubkey.to_bytes())
}

fn signer_account() -> Account {
    Account::new(1_000_000_000, 0, &Pubkey::default())
}

fn game_account(program_id: &Pubkey, admin: Pubkey, pool: Pubkey) -> Account {
    let mut account = Account::new(1_000_000_000, GAME_ACCOUNT_LEN, program_id);
    GameAccountView {
        is_initialized: true,
        admin: admin.to_bytes(),
        reward_pool_account: pool.to_bytes(),
    }
    .write_to_account_data(&mut account.data)
    .unwrap();
    account
}

fn player_record(
    program_id: &Pubkey,
    owner: Pubkey,
    game: Pubkey,
    reward_to_claim: u64,
    upline: Option<Pubkey>,
) -> Account {
    let mut account = Account::new(1_000_000_000, PLAYER_ACCOUNT_LEN, program_id);
    PlayerAccountView {
        is_initialized: true,
        owner: owner.to_bytes(),
        reward_to_claim,
        game_account: game.to_bytes(),
        upline: upline.map(|upline| upline.to_bytes()),
    }
    .write_to_account_data(&mut account.data)
    .unwrap();
    account
}

fn token_account(token_program: &Pubkey, mint: Pubkey, owner: Pubkey, amount: u64) -> Account {
    let mut account = Account::new(1_000_000_000, TOKEN_ACCOUNT_WITH_AMOUNT_LEN, token_program);
    account.data[..32].copy_from_slice(&mint.to_bytes());
    account.data[32..64].copy_from_slice(&owner.to_bytes());
    TokenAccountWithAmountView::write_amount_to_account_data(&mut account.data, amount).unwrap();
    account
}
