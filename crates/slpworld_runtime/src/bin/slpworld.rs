//! slpworld CLI entry point.

use slpworld_debug::ObservabilityConfig;
use slpworld_runtime::{InterpretError, Interpreter, InterpreterConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    command: Option<String>,
    input: Option<String>,
    out: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    trace: bool,
    trace_json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(e.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn report(error: &(dyn std::error::Error + 'static)) {
    match error.downcast_ref::<InterpretError>() {
        Some(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e.context() {
                eprintln!("  {context}");
            }
        }
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "-o" | "--out" => {
                i += 1;
                let path = args.get(i).ok_or("--out requires a path")?;
                config.out = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            arg if config.command.is_none() => config.command = Some(arg.to_string()),
            arg if config.input.is_none() => config.input = Some(arg.to_string()),
            arg => return Err(format!("unexpected argument: {arg}").into()),
        }
        i += 1;
    }

    Ok(config)
}

/// Reads `input` as a file if one exists at that path, else uses it verbatim.
fn load_input(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let path = Path::new(input);
    if path.is_file() {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()).into())
    } else {
        Ok(input.to_string())
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("slpworld {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match config.command.as_deref() {
        Some("interpret") => {}
        Some(other) => return Err(format!("unknown command: {other}").into()),
        None => {
            print_help();
            return Err("missing command".into());
        }
    }

    let input = config.input.as_deref().ok_or("interpret requires <INPUT>")?;
    let text = load_input(input)?;

    let observability = if config.trace {
        ObservabilityConfig::debug().with_json_output(config.trace_json)
    } else {
        ObservabilityConfig::default()
    };
    let mut interpreter =
        Interpreter::with_config(InterpreterConfig::new().with_observability(observability));

    let slp = interpreter.interpret(&text)?;

    match &config.out {
        Some(path) => fs::write(path, &slp)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?,
        None => println!("{slp}"),
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mslpworld\x1b[0m - Scene sentences to SLP

\x1b[1mUSAGE:\x1b[0m
    slpworld interpret <INPUT> [OPTIONS]

\x1b[1mARGUMENTS:\x1b[0m
    <INPUT>    A file to read, or the text itself if no such file exists

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -o, --out PATH      Write SLP to PATH instead of stdout

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace             Print pipeline trace records to stderr
    --trace-json        Print pipeline trace records to stderr as JSON

\x1b[1mEXAMPLES:\x1b[0m
    slpworld interpret \"A red ball is on the table.\"
    slpworld interpret scene.txt --out scene.slp
    slpworld interpret --trace \"The cat is under the table.\""
    );
}
