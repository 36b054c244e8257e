use clap::Parser;

use ripple::cli::{self, Cli, CliError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::init_tracing();
    let args = Cli::parse();

    match cli::run(args).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(CliError::Failed { lines }) => {
            for line in lines {
                eprintln!("{}", line);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
