//! Utilities for working with ID3v2 data

pub mod synchsafe;
