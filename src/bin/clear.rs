//! Command line front end: run, disassemble or interactively evaluate Clear programs.

use std::{fs, io::{self, BufRead, Write}, path::{Path, PathBuf}, process::ExitCode};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, ParseError};
use clear::{Chunk, Error, disassembler, runtime::VM};

/// Exit code for malformed input (parse and compile errors).
const EXIT_DATAERR: u8 = 65;
/// Exit code for runtime faults.
const EXIT_SOFTWARE: u8 = 70;
/// Exit code for I/O errors.
const EXIT_IOERR: u8 = 74;

#[derive(Parser)]
#[command(
    name = "clear",
    version,
    about = "Bytecode compiler and virtual machine for the Clear expression language",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every executed instruction along with the operand stack (same as RUST_LOG=clear::vm=trace)
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and run a source file, printing its result
    Run {
        /// Source file
        file: PathBuf,
    },
    /// Compile a source file and print its bytecode
    Disasm {
        /// Source file
        file: PathBuf,
    },
    /// Evaluate each line of input as a separate program
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.trace) {
        eprintln!("Invalid log filter: {}", err);
        return ExitCode::from(EXIT_SOFTWARE);
    }

    match cli.command {
        Commands::Run { file } => run_file(&file),
        Commands::Disasm { file } => disasm_file(&file),
        Commands::Repl => repl(),
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(trace: bool) -> Result<(), ParseError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(trace)?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Builds the log filter from `RUST_LOG`. Per-instruction VM events are enabled when tracing was requested.
fn log_filter(trace: bool) -> Result<EnvFilter, ParseError> {
    let filter = EnvFilter::from_default_env().add_directive("warn".parse()?);
    Ok(if trace { filter.add_directive("clear::vm=trace".parse()?) } else { filter })
}

fn run_file(file: &Path) -> ExitCode {
    let chunk = match read_source(file).map(|source| clear::build(&source)) {
        Ok(Ok(chunk)) => chunk,
        Ok(Err(err)) => return report(&err, None),
        Err(code) => return code,
    };
    match VM::new().interpret(&chunk) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        },
        Err(err) => report(&err.into(), Some(&chunk)),
    }
}

fn disasm_file(file: &Path) -> ExitCode {
    let chunk = match read_source(file).map(|source| clear::build(&source)) {
        Ok(Ok(chunk)) => chunk,
        Ok(Err(err)) => return report(&err, None),
        Err(code) => return code,
    };
    let name = file.display().to_string();
    match disassembler::write_disassembly(&chunk, &name, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to write disassembly: {}", err);
            ExitCode::from(EXIT_IOERR)
        },
    }
}

fn repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        if let Err(err) = stdout.flush() {
            eprintln!("Failed to write prompt: {}", err);
            return ExitCode::from(EXIT_IOERR);
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            },
            Ok(_) => { },
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                return ExitCode::from(EXIT_IOERR);
            },
        }
        if line.trim().is_empty() {
            continue;
        }
        match clear::build(&line) {
            Ok(chunk) => match VM::new().interpret(&chunk) {
                Ok(value) => println!("{}", value),
                Err(err) => { report(&err.into(), Some(&chunk)); },
            },
            Err(err) => { report(&err, None); },
        }
    }
}

/// Reads the given file, reporting failure as I/O exit code.
fn read_source(file: &Path) -> Result<String, ExitCode> {
    fs::read_to_string(file).map_err(|err| {
        eprintln!("Could not read {}: {}", file.display(), err);
        ExitCode::from(EXIT_IOERR)
    })
}

/// Prints the error and returns the matching exit code.
fn report(error: &Error, chunk: Option<&Chunk>) -> ExitCode {
    match error {
        Error::RuntimeError(err) => {
            match chunk.and_then(|chunk| chunk.line(err.offset())) {
                Some(line) => eprintln!("Runtime error: {} [line {}]", err, line),
                None => eprintln!("Runtime error: {}", err),
            }
            ExitCode::from(EXIT_SOFTWARE)
        },
        Error::ParseError(_) | Error::CompileError(_) => {
            eprintln!("Error: {}", error);
            ExitCode::from(EXIT_DATAERR)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_flag_enables_vm_events() {
        assert!(log_filter(true).unwrap().to_string().contains("clear::vm=trace"));
        assert!(!log_filter(false).unwrap().to_string().contains("clear::vm=trace"));
    }
}
