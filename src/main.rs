use clap::Parser;
use eyre::Result;

/// Extension trait for exiting on generation errors with pretty formatting
trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for woqlgen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// A fixed, parameterless batch run: read `src/woql_defs/woql_list.json`,
/// write `src/woql_defs/woql.ts` next to it.
#[derive(Parser)]
#[command(name = "woqlgen")]
#[command(version)]
#[command(about = "Generate typed WOQL query constructors from woql_list.json")]
struct Cli {}

impl Cli {
    fn run(&self) -> Result<()> {
        let output = woqlgen::generate().unwrap_or_exit();
        println!("Generated: {}", output.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run()
}
