// crates/identigen-cli/src/main.rs

use clap::Parser;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "identigen-cli")]
#[command(about = "Generate an identicon PNG from a given string", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: cmd::generate::GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cmd::generate::run(cli.args)
}
