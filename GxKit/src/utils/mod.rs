//! Utility functions

pub mod bits;
pub mod path;
pub mod pixel;

pub use bits::{expand_nibble, high_nibble, low_nibble, pair_word, sign_fill_top_bit};
pub use path::{bank_stem, has_extension};
pub use pixel::{argb_to_rgba, rgba_to_argb};
