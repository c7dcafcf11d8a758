//! Soundshift CLI entry point.

use soundshift_engine::{CursorPolicy, Engine, EngineConfig};
use soundshift_runtime::{Repl, Session};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    words: Vec<String>,
    rules: Vec<String>,
    categories: Vec<String>,
    files: Vec<String>,
    trace: bool,
    symmetric: bool,
    max_steps: Option<usize>,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
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
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("{flag} requires a value"))
        };

        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-t" | "--trace" => config.trace = true,
            "-v" | "--verbose" => config.verbose = true,
            "--symmetric" => config.symmetric = true,
            "-r" | "--rule" => config.rules.push(value("--rule")?),
            "-c" | "--category" => config.categories.push(value("--category")?),
            "-f" | "--file" => config.files.push(value("--file")?),
            "--max-steps" => {
                let steps = value("--max-steps")?;
                config.max_steps = Some(
                    steps
                        .parse()
                        .map_err(|_| format!("invalid --max-steps value: {steps}"))?,
                );
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            word => config.words.push(word.to_string()),
        }
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_session(config: &CliConfig) -> Result<Session, Box<dyn std::error::Error>> {
    let mut engine_config = EngineConfig::default();
    if config.symmetric {
        engine_config = engine_config.with_cursor_policy(CursorPolicy::Symmetric);
    }
    if let Some(max_steps) = config.max_steps {
        engine_config = engine_config.with_max_steps(max_steps);
    }

    let mut session = Session::with_engine(Engine::with_config(engine_config));
    session.set_trace(config.trace);

    // Files first, then inline categories, then inline rules
    for file in &config.files {
        session.load_file(file)?;
    }
    for category in &config.categories {
        if !category.contains('=') || category.contains('>') {
            return Err(format!("invalid --category value: {category} (expected ID=SOUNDS)").into());
        }
        session.eval(category)?;
    }
    for rule in &config.rules {
        session.engine_mut().add_rule(rule)?;
    }

    Ok(session)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("soundshift {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.verbose);
    let session = build_session(&config)?;

    if !config.words.is_empty() {
        for word in &config.words {
            println!("{}", session.transform(word)?);
        }
        return Ok(());
    }

    let mut repl = Repl::new()?.with_session(session);
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSoundshift\x1b[0m - Rule-based sound change engine

\x1b[1mUSAGE:\x1b[0m
    soundshift [OPTIONS] [WORDS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS...]    Words to transform; starts the REPL when absent

\x1b[1mOPTIONS:\x1b[0m
    -r, --rule RULE          Add a rule (repeatable)
    -c, --category ID=SOUNDS Declare a category (repeatable)
    -f, --file PATH          Load a ruleset file (repeatable)
    -t, --trace              Show each rule's effect on each word
        --symmetric          Step past leftward moves like rightward ones
        --max-steps N        Abort a rule after N sweep steps
    -v, --verbose            Log rule registration and changes
    -h, --help               Print help information
    -V, --version            Print version information

\x1b[1mEXAMPLES:\x1b[0m
    soundshift -r 'a>e' cat                  Prints cet
    soundshift -c 'V=a,e,i' -r 't>d/V_V' pata
    soundshift -f latin.sc -t lupum          Trace a derivation
    soundshift -f latin.sc                   Load rules, then start REPL

\x1b[1mREPL COMMANDS:\x1b[0m
    ID = s1, s2, ...     Declare a category
    TARGET>CHANGE/...    Add a rule
    :rules, :categories  List registrations
    :trace on|off        Toggle derivations
    :load PATH           Load a ruleset file
    :help                Show all commands
    Ctrl+D               Exit REPL"
    );
}
