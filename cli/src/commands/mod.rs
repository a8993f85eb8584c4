//! CLI subcommand implementations

pub mod condense;
pub mod deposit;
pub mod export;
pub mod forget;
pub mod history;
pub mod import;
pub mod info;
pub mod validate;
pub mod vaporize;
