pub mod inventory;
pub mod preferences;
pub mod quantity;
pub mod recipe;

pub use inventory::*;
pub use preferences::*;
pub use quantity::*;
pub use recipe::*;
