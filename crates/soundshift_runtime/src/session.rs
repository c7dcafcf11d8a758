//! Session state for the REPL and CLI.
//!
//! A [`Session`] wraps an [`Engine`] and interprets single lines of input
//! as [`Command`]s: category declarations, rules, words to transform, or
//! `:`-prefixed session commands.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use soundshift_engine::{DerivationFormatter, Engine, HumanFormatter};
use soundshift_foundation::symbols::{CHANGE, COMMENT, DECLARE};
use soundshift_foundation::{Error, Result};
use soundshift_notation::{Statement, parse_ruleset};
use tracing::debug;

/// Help text for the `:help` command.
pub const HELP: &str = "\
ID = s1, s2, ...     Declare a category
TARGET>CHANGE/...    Add a rule
WORD [WORD...]       Transform words with the current rules
:rules               List rules in application order
:categories          List categories
:clear               Remove all rules and categories
:trace on|off        Show each rule's effect when transforming
:load PATH           Load a ruleset file
:help                Show this help";

// =============================================================================
// Command
// =============================================================================

/// A single line of session input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Declare a category.
    Category {
        /// The category identifier.
        identifier: String,
        /// The member sounds.
        sounds: Vec<String>,
    },
    /// Add a rule.
    Rule(String),
    /// Transform each word.
    Words(Vec<String>),
    /// `:rules`
    Rules,
    /// `:categories`
    Categories,
    /// `:clear`
    Clear,
    /// `:trace on|off`
    Trace(bool),
    /// `:load PATH`
    Load(String),
    /// `:help`
    Help,
}

impl Command {
    /// Parses a line. Blank lines and comments yield `None`.
    ///
    /// # Errors
    /// Returns a syntax error for an unknown or malformed `:` command, or
    /// a category declaration without an identifier.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            return Ok(None);
        }

        if let Some(command) = line.strip_prefix(':') {
            return Self::parse_session_command(command, line).map(Some);
        }

        if !line.contains(CHANGE) && !line.contains(DECLARE) {
            let words = line.split_whitespace().map(String::from).collect();
            return Ok(Some(Self::Words(words)));
        }

        Ok(parse_ruleset(line)?.pop().map(|statement| match statement {
            Statement::Category {
                identifier, sounds, ..
            } => Self::Category { identifier, sounds },
            Statement::Rule { text, .. } => Self::Rule(text),
        }))
    }

    fn parse_session_command(command: &str, line: &str) -> Result<Self> {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match (name, argument) {
            ("rules", "") => Ok(Self::Rules),
            ("categories", "") => Ok(Self::Categories),
            ("clear", "") => Ok(Self::Clear),
            ("help", "") => Ok(Self::Help),
            ("trace", "on") => Ok(Self::Trace(true)),
            ("trace", "off") => Ok(Self::Trace(false)),
            ("trace", _) => Err(Error::syntax("expected :trace on|off", line)),
            ("load", "") => Err(Error::syntax("expected :load PATH", line)),
            ("load", path) => Ok(Self::Load(path.to_string())),
            _ => Err(Error::syntax("unknown command", line)),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// An engine plus interactive state.
#[derive(Debug)]
pub struct Session {
    /// The engine that holds the rules.
    engine: Engine,

    /// Whether word transforms print their derivation.
    trace: bool,

    /// Directory that relative `:load` paths resolve against.
    load_path: PathBuf,
}

impl Session {
    /// Creates a session with an empty default engine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Creates a session around an existing engine.
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            trace: false,
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Returns a reference to the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Returns whether tracing is on.
    #[must_use]
    pub const fn trace(&self) -> bool {
        self.trace
    }

    /// Turns derivation tracing on or off.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    /// Returns the current load path.
    #[must_use]
    pub const fn load_path(&self) -> &PathBuf {
        &self.load_path
    }

    /// Sets the load path.
    pub fn set_load_path(&mut self, path: PathBuf) {
        self.load_path = path;
    }

    /// Resolves a path relative to the load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.load_path.join(path)
        }
    }

    /// Loads a ruleset file into the engine.
    ///
    /// Nothing is registered if any line fails.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or the first compile
    /// error with the file name and line attached.
    pub fn load_file(&mut self, path: &str) -> Result<()> {
        let resolved = self.resolve_path(path);
        let source = fs::read_to_string(&resolved)
            .map_err(|e| Error::io(resolved.display().to_string(), e.to_string()))?;

        self.engine.load_ruleset(&source).map_err(|mut e| {
            let context = e.context.take().unwrap_or_default().with_source(path);
            e.with_context(context)
        })?;

        debug!(path = %resolved.display(), rules = self.engine.rules().len(), "ruleset loaded");
        Ok(())
    }

    /// Transforms one word, with its derivation when tracing is on.
    ///
    /// # Errors
    /// Returns any error raised while applying the rules.
    pub fn transform(&self, word: &str) -> Result<String> {
        if !self.trace {
            return self.engine.apply(word);
        }

        let derivation = self.engine.derive(word)?;
        let formatter = HumanFormatter::new().with_index().with_rule();
        let mut text = formatter.format(&derivation);
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&derivation.output);
        Ok(text)
    }

    /// Evaluates one line of input, returning any text to show.
    ///
    /// # Errors
    /// Returns the error from parsing or executing the command.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>> {
        let Some(command) = Command::parse(line)? else {
            return Ok(None);
        };
        self.execute(command)
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    /// Returns the error from the command.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Category { identifier, sounds } => {
                self.engine.add_category(&identifier, sounds.as_slice())?;
                Ok(None)
            }
            Command::Rule(text) => {
                self.engine.add_rule(&text)?;
                Ok(None)
            }
            Command::Words(words) => {
                let results = words
                    .iter()
                    .map(|word| self.transform(word))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Some(results.join("\n")))
            }
            Command::Rules => Ok(Some(self.list_rules())),
            Command::Categories => Ok(Some(self.list_categories())),
            Command::Clear => {
                self.engine.clear();
                Ok(None)
            }
            Command::Trace(on) => {
                self.trace = on;
                Ok(None)
            }
            Command::Load(path) => {
                self.load_file(&path)?;
                Ok(None)
            }
            Command::Help => Ok(Some(HELP.to_string())),
        }
    }

    fn list_rules(&self) -> String {
        let rules = self.engine.rules();
        if rules.is_empty() {
            return "no rules".to_string();
        }
        let mut text = String::new();
        for (index, rule) in rules.iter().enumerate() {
            let _ = writeln!(text, "[{index}] {rule}");
        }
        text.truncate(text.trim_end().len());
        text
    }

    fn list_categories(&self) -> String {
        let categories = self.engine.categories();
        if categories.is_empty() {
            return "no categories".to_string();
        }
        categories
            .iter()
            .map(|category| format!("{} = {}", category.identifier(), category.sounds().join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
