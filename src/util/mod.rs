//! Utility modules

pub mod text;

pub use text::{char_len, char_slice, char_to_byte, equals_in_range};
