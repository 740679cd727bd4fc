pub mod artist;
pub mod id;
