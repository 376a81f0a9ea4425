mod codegen;
mod interpreter;
mod io;
mod nom;
mod ops;
mod parser;
mod scanner;
mod types;
mod vm;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::codegen::Program;
use crate::interpreter::Interpreter;
use crate::scanner::Scanner;

/// Translator for a small structured language into stack machine code.
/// Starts an interactive shell when no command is given.
#[derive(Parser)]
#[command(name = "stackc", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a program and print its listing
    Compile {
        source: PathBuf,

        /// Write the listing here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate a program and execute it, INPUT reads stdin
    Run {
        source: PathBuf,

        /// Print listing and variables before running
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Execute a listing produced by `compile`
    Exec { listing: PathBuf },

    /// Print the tokens of a program with their lines
    Tokens { source: PathBuf },
}

fn execute(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Compile { source, output } => {
            let program = parser::compile(&fs::read_to_string(source)?)?;
            match output {
                Some(path) => fs::write(path, program.to_string())?,
                None => print!("{}", program),
            }
        }
        Command::Run { source, verbose } => {
            let program = parser::compile(&fs::read_to_string(source)?)?;
            if verbose {
                print!("{}", program);
                for (address, name) in program.variables() {
                    println!("{}\t{}", address, name);
                }
            }
            vm::run(&program, &mut std::io::stdin(), &mut std::io::stdout())?;
        }
        Command::Exec { listing } => {
            let program: Program = fs::read_to_string(listing)?.parse()?;
            vm::run(&program, &mut std::io::stdin(), &mut std::io::stdout())?;
        }
        Command::Tokens { source } => {
            for (line, token) in Scanner::tokenize(&fs::read_to_string(source)?) {
                println!("{}\t{:?}", line, token);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => execute(command),
        None => Interpreter::new().run_shell(),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
