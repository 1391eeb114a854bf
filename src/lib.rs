#![cfg_attr(not(test), no_std)]

pub mod constants;
pub mod derivation;
pub mod errors;
pub mod handlers;
pub mod instruction_builders;
pub mod instruction_layouts;
pub mod layouts;
pub mod runtime;
