mod inventory;
mod manager;
mod seed;

pub use inventory::Inventory;
pub use manager::ShoppingPlanner;
pub use seed::{load_seed, sample_seed, Seed};
