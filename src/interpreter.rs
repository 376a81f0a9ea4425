use std::error::Error;
use std::fs;
use std::io::{self, Stdin, Stdout};
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;

use crate::codegen::Program;
use crate::parser::{self, CompileError};
use crate::scanner::Scanner;
use crate::vm;

const HISTORY: &str = "history.txt";

#[derive(Debug)]
pub enum Command {
    ShowCode(String),
    ShowTokens(String),
    ShowVars,
    Load(PathBuf),
    Run(String),
}

impl Command {
    fn parse(line: &str) -> crate::nom::Result<Command> {
        crate::nom::parse("command", parse::input_line, line)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::nom::Error),

    #[error("Compilation error:\n{0}")]
    Compilation(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] vm::Error),

    #[error("Cannot load {}: {source}", .path.display())]
    Load { path: PathBuf, source: io::Error },
}

pub struct Interpreter {
    input: Stdin,
    output: Stdout,
    // program of the last run with its final memory
    last_run: Option<(Program, vm::Memory)>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            input: io::stdin(),
            output: io::stdout(),
            last_run: None,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::ShowCode(source) => {
                let program = parser::compile(&source)?;
                print!("{}", program);
            }
            Command::ShowTokens(source) => {
                for (line, token) in Scanner::tokenize(&source) {
                    println!("{}\t{:?}", line, token);
                }
            }
            Command::ShowVars => match &self.last_run {
                Some((program, memory)) => {
                    for (address, name) in program.variables() {
                        let value = memory.get(&address).copied().unwrap_or(0);
                        println!("{}\t{} = {}", address, name, value);
                    }
                }
                None => println!("Nothing was run yet"),
            },
            Command::Load(path) => {
                let source = fs::read_to_string(&path)
                    .map_err(|source| CommandError::Load { path, source })?;
                self.run(&source)?;
            }
            Command::Run(source) => self.run(&source)?,
        }

        Ok(())
    }

    fn run(&mut self, source: &str) -> Result<(), CommandError> {
        let program = parser::compile(source)?;
        let memory = vm::run(&program, &mut self.input, &mut self.output)?;
        self.last_run = Some((program, memory));
        Ok(())
    }

    pub fn run_shell(&mut self) -> Result<(), Box<dyn Error>> {
        let mut rl = Editor::<()>::new();
        if rl.load_history(HISTORY).is_err() {
            println!("No previous history.");
        }

        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => {
                    rl.add_history_entry(line.as_str());

                    let result = Command::parse(line.as_str())
                        .map_err(CommandError::from)
                        .and_then(|command| self.execute(command));

                    if let Err(e) = result {
                        println!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        rl.save_history(HISTORY)?;

        Ok(())
    }
}

mod parse {
    // Input ::= ShowCode | ShowTokens | ShowVars | Load | Run
    // ShowCode ::= ':code' Program
    // ShowTokens ::= ':tokens' Program
    // ShowVars ::= ':vars'
    // Load ::= ':load' Path
    // Run ::= ':run' Program | Program

    use super::Command;
    use crate::nom::{spaces, Input, Parsed};

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::combinator::{map, rest};
    use nom::sequence::preceded;

    pub fn input_line(input: Input) -> Parsed<Command> {
        alt((
            command(":code", Command::ShowCode),
            command(":tokens", Command::ShowTokens),
            command(":load", |path| Command::Load(path.into())),
            map(preceded(tag(":vars"), spaces), |_| Command::ShowVars),
            command(":run", Command::Run),
            map(rest, |source: Input| Command::Run(source.to_string())),
        ))(input)
    }

    fn command<'a, F>(prefix: &'a str, make: F) -> impl Fn(Input<'a>) -> Parsed<Command>
    where
        F: Fn(String) -> Command,
    {
        map(preceded(tag(prefix), rest), move |text: Input| {
            make(text.trim().to_string())
        })
    }

}
