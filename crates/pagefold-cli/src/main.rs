mod cli;
mod paginate_cmd;
mod shared;
mod verify_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Paginate {
            ref input,
            ref output,
            max_chars,
            max_lines,
            top,
            ref format,
        } => paginate_cmd::run(input, output, max_chars, max_lines, top, format),
        cli::Commands::Verify {
            ref file,
            max_chars,
            max_lines,
            ref format,
        } => verify_cmd::run(file, max_chars, max_lines, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
