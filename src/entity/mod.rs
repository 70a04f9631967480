pub mod act;
pub mod edible;
pub mod inventory;
pub mod living;
pub mod object;
pub mod weapon;

pub use object::Object;
