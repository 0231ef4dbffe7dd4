// crates/identigen-cli/src/cmd/mod.rs

pub mod generate;
