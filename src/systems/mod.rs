pub mod colors;
pub mod motion;
pub mod selector;
