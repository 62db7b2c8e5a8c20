//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PORT_ATTEMPTS, DEFAULT_TARGET, RevealerArgs,
};
pub use types::PositiveU16;
