pub mod item;
pub mod recipe;
