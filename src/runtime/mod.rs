mod checks;
pub mod program;
mod rewards_program;
mod setup_program;

#[cfg(test)]
pub(crate) mod test_support;

pub use program::process_instruction;
