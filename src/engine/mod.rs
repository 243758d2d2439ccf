pub mod codec;
pub mod codes;
pub mod frequency;
pub mod tree;
