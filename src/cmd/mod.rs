pub mod encode;
pub mod suggest;
pub mod verify;
