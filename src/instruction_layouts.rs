use crate::layouts::PUBKEY_LEN;

pub const TAG_INIT: u8 = 0;
pub const TAG_REGISTER: u8 = 1;
pub const TAG_ADD_REWARD: u8 = 2;
pub const TAG_CLAIM: u8 = 3;

pub const INIT_IX_LEN: usize = 1;
pub const REGISTER_IX_LEN: usize = 1 + 1 + PUBKEY_LEN;
pub const ADD_REWARD_IX_LEN: usize = 1 + 8;
pub const CLAIM_IX_LEN: usize = 1;
pub const MAX_IX_LEN: usize = REGISTER_IX_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionLayoutError {
    Empty,
    WrongTag,
    LengthMismatch,
    InvalidOptionTag,
    InvalidOptionSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInstruction {
    /// 0 - [signer]   admin
    /// 1 - [writable] game account
    /// 2 - [writable] reward pool token account
    /// 3 - []         token program
    Init,
    /// 0 - [signer]   player wallet
    /// 1 - [writable] player account
    /// 2 - []         game account
    /// 3 - []         upline player account, present iff `upline` is set
    Register { upline: Option<[u8; PUBKEY_LEN]> },
    /// 0 - [signer]   admin
    /// 1 - [writable] game account
    /// 2 - [writable] player account
    /// 3 - [writable] upline player account (optional)
    AddReward { reward_amount: u64 },
    /// 0 - [signer]   player wallet
    /// 1 - [writable] game account
    /// 2 - [writable] player account
    /// 3 - [writable] reward pool token account
    /// 4 - []         authority address
    /// 5 - [writable] player token account
    /// 6 - []         token program
    Claim,
}

impl GameInstruction {
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Init => TAG_INIT,
            Self::Register { .. } => TAG_REGISTER,
            Self::AddReward { .. } => TAG_ADD_REWARD,
            Self::Claim => TAG_CLAIM,
        }
    }

    pub const fn packed_len(&self) -> usize {
        match self {
            Self::Init => INIT_IX_LEN,
            Self::Register { .. } => REGISTER_IX_LEN,
            Self::AddReward { .. } => ADD_REWARD_IX_LEN,
            Self::Claim => CLAIM_IX_LEN,
        }
    }

    pub fn unpack(ix_data: &[u8]) -> Result<Self, InstructionLayoutError> {
        let (&tag, rest) = ix_data
            .split_first()
            .ok_or(InstructionLayoutError::Empty)?;

        let instruction = match tag {
            TAG_INIT => Self::Init,
            TAG_REGISTER => Self::Register {
                upline: parse_optional_pubkey(rest)?,
            },
            TAG_ADD_REWARD => Self::AddReward {
                reward_amount: parse_u64(rest)?,
            },
            TAG_CLAIM => Self::Claim,
            _ => return Err(InstructionLayoutError::WrongTag),
        };

        if ix_data.len() != instruction.packed_len() {
            return Err(InstructionLayoutError::LengthMismatch);
        }
        Ok(instruction)
    }

    /// Writes the instruction into `out` and returns the number of bytes used.
    pub fn pack_into(&self, out: &mut [u8]) -> Result<usize, InstructionLayoutError> {
        let len = self.packed_len();
        if out.len() < len {
            return Err(InstructionLayoutError::LengthMismatch);
        }
        self.write(&mut out[..len]);
        Ok(len)
    }

    pub fn pack(&self) -> PackedInstruction {
        let mut bytes = [0u8; MAX_IX_LEN];
        let len = self.packed_len();
        self.write(&mut bytes[..len]);
        PackedInstruction { bytes, len }
    }

    // `out` is exactly `packed_len()` bytes.
    fn write(&self, out: &mut [u8]) {
        out[0] = self.tag();
        match self {
            Self::Init | Self::Claim => {}
            Self::Register { upline } => match upline {
                Some(upline) => {
                    out[1] = 1;
                    out[2..].copy_from_slice(upline);
                }
                None => {
                    out[1] = 0;
                    out[2..].fill(0);
                }
            },
            Self::AddReward { reward_amount } => {
                out[1..].copy_from_slice(&reward_amount.to_le_bytes());
            }
        }
    }
}

/// Fixed-capacity instruction data, so packing needs no allocator on-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedInstruction {
    bytes: [u8; MAX_IX_LEN],
    len: usize,
}

impl PackedInstruction {
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for PackedInstruction {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

fn parse_optional_pubkey(
    rest: &[u8],
) -> Result<Option<[u8; PUBKEY_LEN]>, InstructionLayoutError> {
    if rest.len() != 1 + PUBKEY_LEN {
        return Err(InstructionLayoutError::LengthMismatch);
    }
    let mut slot = [0u8; PUBKEY_LEN];
    slot.copy_from_slice(&rest[1..]);
    match rest[0] {
        0 if slot == [0u8; PUBKEY_LEN] => Ok(None),
        0 => Err(InstructionLayoutError::InvalidOptionSlot),
        1 => Ok(Some(slot)),
        _ => Err(InstructionLayoutError::InvalidOptionTag),
    }
}

fn parse_u64(rest: &[u8]) -> Result<u64, InstructionLayoutError> {
    let bytes: [u8; 8] = rest
        .try_into()
        .map_err(|_| InstructionLayoutError::LengthMismatch)?;
    Ok(u64::from_le_bytes(bytes))
}
