#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Account data is not exactly the fixed width of the record.
    LengthMismatch,
    SliceTooShort,
    InvalidBool,
    /// An absent optional field whose slot is not all zeroes.
    InvalidOptionSlot,
}

pub const PUBKEY_LEN: usize = 32;
pub const GAME_ACCOUNT_LEN: usize = 1 + PUBKEY_LEN + PUBKEY_LEN;
pub const PLAYER_ACCOUNT_LEN: usize = 1 + PUBKEY_LEN + 8 + PUBKEY_LEN + 1 + PUBKEY_LEN;
pub const TOKEN_ACCOUNT_CORE_LEN: usize = 64;
pub const TOKEN_ACCOUNT_WITH_AMOUNT_LEN: usize = 72;

const GAME_IS_INITIALIZED_OFFSET: usize = 0;

const PLAYER_IS_INITIALIZED_OFFSET: usize = 0;
const PLAYER_OWNER_OFFSET: usize = PLAYER_IS_INITIALIZED_OFFSET + 1;
const PLAYER_REWARD_OFFSET: usize = PLAYER_OWNER_OFFSET + PUBKEY_LEN;
const PLAYER_GAME_ACCOUNT_OFFSET: usize = PLAYER_REWARD_OFFSET + 8;
const PLAYER_HAS_UPLINE_OFFSET: usize = PLAYER_GAME_ACCOUNT_OFFSET + PUBKEY_LEN;

const TOKEN_AMOUNT_OFFSET: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameAccountView {
    pub is_initialized: bool,
    pub admin: [u8; PUBKEY_LEN],
    pub reward_pool_account: [u8; PUBKEY_LEN],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAccountView {
    pub is_initialized: bool,
    pub owner: [u8; PUBKEY_LEN],
    pub reward_to_claim: u64,
    pub game_account: [u8; PUBKEY_LEN],
    pub upline: Option<[u8; PUBKEY_LEN]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountCoreView {
    pub mint: [u8; PUBKEY_LEN],
    pub owner: [u8; PUBKEY_LEN],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountWithAmountView {
    pub mint: [u8; PUBKEY_LEN],
    pub owner: [u8; PUBKEY_LEN],
    pub amount: u64,
}

impl GameAccountView {
    pub const UNINITIALIZED: Self = Self {
        is_initialized: false,
        admin: [0u8; PUBKEY_LEN],
        reward_pool_account: [0u8; PUBKEY_LEN],
    };

    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() != GAME_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }

        let mut offset = 0usize;
        let is_initialized = read_bool(data, &mut offset)?;
        let admin = read_pubkey(data, &mut offset)?;
        let reward_pool_account = read_pubkey(data, &mut offset)?;

        Ok(Self {
            is_initialized,
            admin,
            reward_pool_account,
        })
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() != GAME_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }

        let mut offset = 0usize;
        write_u8(data, &mut offset, self.is_initialized as u8);
        write_bytes(data, &mut offset, &self.admin);
        write_bytes(data, &mut offset, &self.reward_pool_account);
        Ok(())
    }

    pub fn read_is_initialized_from_account_data(data: &[u8]) -> Result<bool, LayoutError> {
        if data.len() != GAME_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }
        let mut offset = GAME_IS_INITIALIZED_OFFSET;
        read_bool(data, &mut offset)
    }

    pub fn to_bytes(&self) -> [u8; GAME_ACCOUNT_LEN] {
        let mut data = [0u8; GAME_ACCOUNT_LEN];
        let mut offset = 0usize;
        write_u8(&mut data, &mut offset, self.is_initialized as u8);
        write_bytes(&mut data, &mut offset, &self.admin);
        write_bytes(&mut data, &mut offset, &self.reward_pool_account);
        data
    }
}

impl PlayerAccountView {
    pub const UNINITIALIZED: Self = Self {
        is_initialized: false,
        owner: [0u8; PUBKEY_LEN],
        reward_to_claim: 0,
        game_account: [0u8; PUBKEY_LEN],
        upline: None,
    };

    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() != PLAYER_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }

        let mut offset = 0usize;
        let is_initialized = read_bool(data, &mut offset)?;
        let owner = read_pubkey(data, &mut offset)?;
        let reward_to_claim = read_u64(data, &mut offset)?;
        let game_account = read_pubkey(data, &mut offset)?;
        let upline = read_optional_pubkey(data, &mut offset)?;

        Ok(Self {
            is_initialized,
            owner,
            reward_to_claim,
            game_account,
            upline,
        })
    }

    pub fn write_to_account_data(&self, data: &mut [u8]) -> Result<(), LayoutError> {
        if data.len() != PLAYER_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }
        self.write_body(data);
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; PLAYER_ACCOUNT_LEN] {
        let mut data = [0u8; PLAYER_ACCOUNT_LEN];
        self.write_body(&mut data);
        data
    }

    fn write_body(&self, data: &mut [u8]) {
        let mut offset = 0usize;
        write_u8(data, &mut offset, self.is_initialized as u8);
        write_bytes(data, &mut offset, &self.owner);
        write_u64(data, &mut offset, self.reward_to_claim);
        write_bytes(data, &mut offset, &self.game_account);
        write_optional_pubkey(data, &mut offset, self.upline.as_ref());
    }

    pub fn has_upline(&self) -> bool {
        self.upline.is_some()
    }

    pub fn read_reward_from_account_data(data: &[u8]) -> Result<u64, LayoutError> {
        if data.len() != PLAYER_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }
        read_u64_at(data, PLAYER_REWARD_OFFSET)
    }

    pub fn write_reward_to_account_data(data: &mut [u8], reward: u64) -> Result<(), LayoutError> {
        if data.len() != PLAYER_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }
        write_u64_at(data, PLAYER_REWARD_OFFSET, reward)
    }

    pub fn read_upline_from_account_data(
        data: &[u8],
    ) -> Result<Option<[u8; PUBKEY_LEN]>, LayoutError> {
        if data.len() != PLAYER_ACCOUNT_LEN {
            return Err(LayoutError::LengthMismatch);
        }
        let mut offset = PLAYER_HAS_UPLINE_OFFSET;
        read_optional_pubkey(data, &mut offset)
    }
}

impl TokenAccountCoreView {
    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < TOKEN_ACCOUNT_CORE_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        let mut offset = 0usize;
        let mint = read_pubkey(data, &mut offset)?;
        let owner = read_pubkey(data, &mut offset)?;
        Ok(Self { mint, owner })
    }
}

impl TokenAccountWithAmountView {
    pub fn read_from_account_data(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < TOKEN_ACCOUNT_WITH_AMOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        let mut offset = 0usize;
        let mint = read_pubkey(data, &mut offset)?;
        let owner = read_pubkey(data, &mut offset)?;
        let amount = read_u64(data, &mut offset)?;
        Ok(Self {
            mint,
            owner,
            amount,
        })
    }

    pub fn write_amount_to_account_data(data: &mut [u8], amount: u64) -> Result<(), LayoutError> {
        if data.len() < TOKEN_ACCOUNT_WITH_AMOUNT_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        write_u64_at(data, TOKEN_AMOUNT_OFFSET, amount)
    }

    pub fn write_owner_to_account_data(
        data: &mut [u8],
        owner: &[u8; PUBKEY_LEN],
    ) -> Result<(), LayoutError> {
        if data.len() < TOKEN_ACCOUNT_CORE_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        write_bytes_at(data, PUBKEY_LEN, owner)
    }
}

fn read_pubkey(data: &[u8], offset: &mut usize) -> Result<[u8; PUBKEY_LEN], LayoutError> {
    let end = *offset + PUBKEY_LEN;
    let slice = data.get(*offset..end).ok_or(LayoutError::SliceTooShort)?;
    let mut out = [0u8; PUBKEY_LEN];
    out.copy_from_slice(slice);
    *offset = end;
    Ok(out)
}

fn read_optional_pubkey(
    data: &[u8],
    offset: &mut usize,
) -> Result<Option<[u8; PUBKEY_LEN]>, LayoutError> {
    let present = read_bool(data, offset)?;
    let slot = read_pubkey(data, offset)?;
    if present {
        Ok(Some(slot))
    } else if slot == [0u8; PUBKEY_LEN] {
        Ok(None)
    } else {
        Err(LayoutError::InvalidOptionSlot)
    }
}

fn read_u8(data: &[u8], offset: &mut usize) -> Result<u8, LayoutError> {
    let value = *data.get(*offset).ok_or(LayoutError::SliceTooShort)?;
    *offset += 1;
    Ok(value)
}

fn read_bool(data: &[u8], offset: &mut usize) -> Result<bool, LayoutError> {
    match read_u8(data, offset)? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(LayoutError::InvalidBool),
    }
}

fn read_u64(data: &[u8], offset: &mut usize) -> Result<u64, LayoutError> {
    let value = read_u64_at(data, *offset)?;
    *offset += 8;
    Ok(value)
}

fn read_u64_at(data: &[u8], offset: usize) -> Result<u64, LayoutError> {
    let bytes = data
        .get(offset..offset + 8)
        .ok_or(LayoutError::SliceTooShort)?;
    let mut out = [0u8; 8];
    out.copy_from_slice(bytes);
    Ok(u64::from_le_bytes(out))
}

fn write_bytes<const N: usize>(data: &mut [u8], offset: &mut usize, value: &[u8; N]) {
    data[*offset..*offset + N].copy_from_slice(value);
    *offset += N;
}

fn write_bytes_at(data: &mut [u8], offset: usize, value: &[u8]) -> Result<(), LayoutError> {
    if data.len() < offset + value.len() {
        return Err(LayoutError::SliceTooShort);
    }
    data[offset..offset + value.len()].copy_from_slice(value);
    Ok(())
}

fn write_optional_pubkey(data: &mut [u8], offset: &mut usize, value: Option<&[u8; PUBKEY_LEN]>) {
    match value {
        Some(pubkey) => {
            write_u8(data, offset, 1);
            write_bytes(data, offset, pubkey);
        }
        None => {
            write_u8(data, offset, 0);
            write_bytes(data, offset, &[0u8; PUBKEY_LEN]);
        }
    }
}

fn write_u8(data: &mut [u8], offset: &mut usize, value: u8) {
    data[*offset] = value;
    *offset += 1;
}

fn write_u64(data: &mut [u8], offset: &mut usize, value: u64) {
    data[*offset..*offset + 8].copy_from_slice(&value.to_le_bytes());
    *offset += 8;
}

fn write_u64_at(data: &mut [u8], offset: usize, value: u64) -> Result<(), LayoutError> {
    write_bytes_at(data, offset, &value.to_le_bytes())
}
