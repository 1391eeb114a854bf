/// Seed of the program-derived address that owns the reward pool.
pub const AUTHORITY_SEED: &[u8] = b"game_seed";

/// Default `create_with_seed` seeds used by clients for the accounts they allocate.
pub const GAME_ACCOUNT_SEED: &str = "game_account";
pub const REWARD_POOL_SEED: &str = "reward_pool";
pub const PLAYER_ACCOUNT_SEED: &str = "player";
pub const PLAYER_TOKEN_ACCOUNT_SEED: &str = "player_token";

pub const MAX_SEED_LEN: usize = 32;
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";
