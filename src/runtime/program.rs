use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

use crate::{errors::ReferralError, instruction_layouts::GameInstruction};

use super::{rewards_program, setup_program};

#[allow(unexpected_cfgs)]
#[cfg(feature = "bpf-entrypoint")]
mod bpf_entrypoint {
    use pinocchio::entrypoint;

    entrypoint!(super::process_instruction, 8);
}

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = GameInstruction::unpack(instruction_data)
        .map_err(|err| ProgramError::from(ReferralError::from(err)))?;

    match instruction {
        GameInstruction::Init => setup_program::process_init(program_id, accounts),
        GameInstruction::Register { upline } => {
            setup_program::process_register(program_id, accounts, upline)
        }
        GameInstruction::AddReward { reward_amount } => {
            rewards_program::process_add_reward(program_id, accounts, reward_amount)
        }
        GameInstruction::Claim => rewards_program::process_claim(program_id, accounts),
    }
}
