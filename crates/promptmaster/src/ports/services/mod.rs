//! Service Ports

mod text_gen;

pub use text_gen::*;
