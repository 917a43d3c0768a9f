mod model;

pub use model::PantrySnapshot;
