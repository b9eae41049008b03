pub mod layout;
pub mod shared;
