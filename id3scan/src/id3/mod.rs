//! ID3 specific items

pub mod v2;
