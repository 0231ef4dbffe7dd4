// crates/identigen-cli/src/io/mod.rs

pub mod png;
