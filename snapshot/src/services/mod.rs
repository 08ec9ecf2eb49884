pub mod filter;
pub mod generator;
pub mod guard;
pub mod scaffold;
pub mod utils;
