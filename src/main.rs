use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use simshell::{CommandResult, Shell, ShellConfig, ShellOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "simshell")]
#[command(about = "A simulated filesystem shell for terminal demos")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Log in as this uid instead of the configured one
    #[arg(long = "uid")]
    uid: Option<u32>,

    /// TOML file with hostname, login uid and the identity table
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Output results as JSON (stdout, stderr, exitCode), one object per line
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => ShellConfig::default(),
    };

    let mut shell = match Shell::new(ShellOptions {
        config,
        uid: cli.uid,
        ..Default::default()
    }) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(line) = cli.command {
        let result = shell.exec(&line);
        emit(&result, cli.json);
        std::process::exit(result.exit_code);
    }

    // Read lines from stdin; show a prompt only on a terminal
    let interactive = std::io::stdin().is_terminal() && !cli.json;
    let mut last_exit = 0;
    let stdin = std::io::stdin();
    loop {
        if interactive {
            print!("{}", shell.prompt());
            let _ = std::io::stdout().flush();
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: cannot read input: {}", e);
                std::process::exit(1);
            }
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim() == "exit" {
            break;
        }
        let result = shell.exec(line);
        emit(&result, cli.json);
        last_exit = result.exit_code;
    }

    std::process::exit(last_exit);
}

fn emit(result: &CommandResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: {}", e),
        }
        return;
    }
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
}
