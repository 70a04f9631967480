// interaction ranges
/// maximum distance between an eater and the thing it eats
pub const EAT_REACH: i32 = 1;

// cookables
pub const MUSHROOM_NAME: &str = "mushroom";
pub const MUSHROOM_HP: i32 = 20;
