pub mod assets;
pub mod slug;
