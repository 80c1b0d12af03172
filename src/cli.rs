use clap::Parser;

/// Prints the `2^(-n)` exact decimal scale table as Rust map entries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
