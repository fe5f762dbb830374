//! Keystone CLI entry point.

use keystone_runtime::{LineEditor, NullEditor, OutputFormat, Repl, ShellConfig};
use keystone_store::StoreConfig;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    json: bool,
    max_name_length: Option<usize>,
    verbose: bool,
    quiet: bool,
}

impl CliConfig {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    fn shell_config(&self) -> ShellConfig {
        let mut store = StoreConfig::new();
        if let Some(max) = self.max_name_length {
            store = store.with_max_name_length(max);
        }
        let output = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        ShellConfig::new()
            .with_output(output)
            .with_store(store)
            .with_banner(self.files.is_empty())
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.json = true,
            "-v" | "--verbose" => config.verbose = true,
            "-q" | "--quiet" => config.quiet = true,
            "--max-name-length" => {
                let value = args
                    .next()
                    .ok_or("--max-name-length requires a value")?;
                config.max_name_length = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --max-name-length value: {value}"))?,
                );
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("keystone {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(config.log_level());

    let shell = config.shell_config();

    if config.batch_mode {
        let mut repl = Repl::with_editor(NullEditor, &shell);
        run_files(&mut repl, &config.files)?;
        return Ok(exit_status(&repl));
    }

    let mut repl = Repl::new(&shell)?;
    if !run_files(&mut repl, &config.files)? {
        return Ok(exit_status(&repl));
    }

    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

/// Runs each file in order; returns false once a file asked to quit.
fn run_files<E: LineEditor>(repl: &mut Repl<E>, files: &[PathBuf]) -> keystone_runtime::Result<bool> {
    for file in files {
        if !repl.eval_file(file)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn exit_status<E: LineEditor>(repl: &Repl<E>) -> ExitCode {
    if repl.session().parse_failures() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_help() {
    println!(
        "\x1b[1mKeystone\x1b[0m - In-memory user store shell

\x1b[1mUSAGE:\x1b[0m
    keystone [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the shell

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Run files and exit (no shell)
        --json               Print results as JSON
        --max-name-length N  Longest accepted user name (default 50)
    -v, --verbose            Debug logging on stderr
    -q, --quiet              Errors only on stderr

\x1b[1mEXAMPLES:\x1b[0m
    keystone                         Start the interactive shell
    keystone seed.ks                 Run seed.ks, then start the shell
    keystone -b --json seed.ks       Run seed.ks as JSON and exit

\x1b[1mSHELL COMMANDS:\x1b[0m
    create <name> <email>                      Create a user
    get <id> | list | count                    Read users
    update <id> [name=<name>] [email=<email>]  Change a user
    delete <id>                                Remove a user
    format text|json                           Switch output format
    Ctrl+D                                     Exit

RUST_LOG overrides the log level."
    );
}
