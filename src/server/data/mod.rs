//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to
//! keep database structures out of the service layer.

pub mod experience;
pub mod guild_config;

#[cfg(test)]
mod test;
