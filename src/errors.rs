use pinocchio::error::ProgramError;

use crate::{instruction_layouts::InstructionLayoutError, layouts::LayoutError};

/// Coarse failure classes callers can branch on without matching every code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Schema,
    State,
    Authorization,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ReferralError {
    InvalidInstruction = 6000,
    InvalidAccountLayout = 6001,
    AlreadyInitialized = 6002,
    NotInitialized = 6003,
    UnclaimableAmount = 6004,
    InvalidUpline = 6005,
    SelfReferencingUpline = 6006,
    InvalidRewardAmount = 6007,
    RewardAmountOverflow = 6008,
    GameAccountMismatch = 6009,
    Unauthorized = 6010,
    InsufficientRewardPool = 6011,
    InvalidAccountSize = 6012,
    InvalidRewardPool = 6013,
    InvalidTokenAccount = 6014,
    InvalidAuthority = 6015,
}

impl ReferralError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidInstruction | Self::InvalidAccountLayout => ErrorKind::Schema,
            Self::AlreadyInitialized
            | Self::NotInitialized
            | Self::UnclaimableAmount
            | Self::InvalidUpline
            | Self::SelfReferencingUpline
            | Self::InvalidRewardAmount
            | Self::RewardAmountOverflow
            | Self::GameAccountMismatch => ErrorKind::State,
            Self::Unauthorized => ErrorKind::Authorization,
            Self::InsufficientRewardPool
            | Self::InvalidAccountSize
            | Self::InvalidRewardPool
            | Self::InvalidTokenAccount
            | Self::InvalidAuthority => ErrorKind::Resource,
        }
    }

    /// Inverse of the `ProgramError::Custom` mapping, for off-chain callers.
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            6000 => Self::InvalidInstruction,
            6001 => Self::InvalidAccountLayout,
            6002 => Self::AlreadyInitialized,
            6003 => Self::NotInitialized,
            6004 => Self::UnclaimableAmount,
            6005 => Self::InvalidUpline,
            6006 => Self::SelfReferencingUpline,
            6007 => Self::InvalidRewardAmount,
            6008 => Self::RewardAmountOverflow,
            6009 => Self::GameAccountMismatch,
            6010 => Self::Unauthorized,
            6011 => Self::InsufficientRewardPool,
            6012 => Self::InvalidAccountSize,
            6013 => Self::InvalidRewardPool,
            6014 => Self::InvalidTokenAccount,
            6015 => Self::InvalidAuthority,
            _ => return None,
        })
    }
}

impl From<ReferralError> for ProgramError {
    fn from(value: ReferralError) -> Self {
        ProgramError::Custom(value as u32)
    }
}

impl From<LayoutError> for ReferralError {
    fn from(value: LayoutError) -> Self {
        match value {
            LayoutError::LengthMismatch | LayoutError::SliceTooShort => Self::InvalidAccountSize,
            LayoutError::InvalidBool | LayoutError::InvalidOptionSlot => Self::InvalidAccountLayout,
        }
    }
}

impl From<InstructionLayoutError> for ReferralError {
    fn from(_: InstructionLayoutError) -> Self {
        Self::InvalidInstruction
    }
}

pub fn map_layout_err(err: LayoutError) -> ProgramError {
    ReferralError::from(err).into()
}
