//! Deterministic addresses shared by the program and its callers.
//!
//! Accounts allocated by clients live at `create_with_seed` addresses so they
//! can be recomputed from the creator's key and a seed string. The reward pool
//! is owned by a program-derived address, which is off-curve and therefore has
//! no private key; the program signs for it with [`authority_signer_seeds`].

use pinocchio::Address;
use sha2::{Digest, Sha256};

use crate::constants::{AUTHORITY_SEED, MAX_SEED_LEN, PDA_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationError {
    MaxSeedLengthExceeded,
    IllegalOwner,
}

/// `sha256(base || seed || program_id)`, the ledger's `create_with_seed` scheme.
pub fn derive_account_address(
    base_key: &Address,
    seed: &str,
    program_id: &Address,
) -> Result<Address, DerivationError> {
    if seed.len() > MAX_SEED_LEN {
        return Err(DerivationError::MaxSeedLengthExceeded);
    }
    let owner = program_id.to_bytes();
    if owner[owner.len() - PDA_MARKER.len()..] == PDA_MARKER[..] {
        return Err(DerivationError::IllegalOwner);
    }

    let mut hasher = Sha256::new();
    hasher.update(base_key.to_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(owner);
    let digest = hasher.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Ok(Address::new_from_array(out))
}

pub fn derive_authority_address(program_id: &Address) -> (Address, u8) {
    derive_authority_address_with_seed(AUTHORITY_SEED, program_id)
}

pub fn derive_authority_address_with_seed(seed: &[u8], program_id: &Address) -> (Address, u8) {
    Address::find_program_address(&[seed], program_id)
}

pub fn authority_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [AUTHORITY_SEED, bump]
}
