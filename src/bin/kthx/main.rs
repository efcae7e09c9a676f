//! # Kthx
//!
//! This binary is the command line interpreter for LOLCODE. It reads a source
//! file, lexes it, and runs the program against a console-backed host:
//! `VISIBLE` goes to stdout, `GIMMEH` prompts on stderr and reads a line from
//! stdin, and symbol table updates are reported through the logger.

mod cli;

use cli::*;

use std::{
    error::Error,
    fs,
    io::{self, BufRead, Write},
    process,
};

use kthx::{
    interpreter::{Host, Interpreter},
    lexer::Lexer,
    value::Value,
};
use log::{debug, error};

struct ConsoleHost;

impl Host for ConsoleHost {
    fn write(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn read(&mut self, prompt: &str) -> String {
        eprint!("{prompt} ");
        let mut reply = String::new();
        if io::stdin().lock().read_line(&mut reply).is_err() {
            return String::new();
        }
        while reply.ends_with('\n') || reply.ends_with('\r') {
            reply.pop();
        }
        reply
    }

    fn observe(&mut self, name: &str, value: &Value) {
        debug!("{name} = {value}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::init();

    simple_logger::init_with_level(args.verbosity.into()).unwrap();

    let source = fs::read_to_string(&args.file)?;

    let tokens = match Lexer::new(&source).lex() {
        Err(lex_error) => {
            error!("{lex_error}");
            process::exit(-1);
        }
        Ok(tokens) => tokens,
    };

    if args.dump_tokens {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    let mut host = ConsoleHost;
    if let Err(interpret_error) = Interpreter::new(&tokens, &mut host).run() {
        error!("{interpret_error}");
        process::exit(-1);
    }

    Ok(())
}
