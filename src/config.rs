use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;

use crate::error::Error;
use crate::model::Kind;

/// Flags the command line accepts in their historical single-dash form (`-leagues PD`).
pub const FLAGS: [&str; 10] = [
    "leagues", "generate", "output", "bootstrap", "file", "usage", "api-key", "api-url", "assets", "timeout",
];

pub const DEFAULT_OUTPUT: &str = "./output/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Plain,
    Bootstrap,
}

impl Theme {
    pub fn from_bootstrap_flag(bootstrap: bool) -> Self {
        if bootstrap {
            Theme::Bootstrap
        } else {
            Theme::Plain
        }
    }

    pub fn stylesheet(&self) -> &'static str {
        match self {
            Theme::Plain => "main.css",
            Theme::Bootstrap => "bootstrap.min.css",
        }
    }
}

/// What the user asked for: which leagues, which pages, where, and in which look.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub leagues: Vec<String>,
    pub kinds: Vec<Kind>,
    pub output: PathBuf,
    pub theme: Theme,
}

impl Selection {
    pub fn new<S: AsRef<str>>(
        leagues: Vec<String>,
        kinds: &[S],
        output: PathBuf,
        theme: Theme,
    ) -> Result<Self, Error> {
        let leagues: Vec<String> = leagues.into_iter().filter(|l| !l.trim().is_empty()).collect();
        if leagues.is_empty() {
            return Err(Error::Selection("no leagues requested".to_string()));
        }

        let mut parsed: Vec<Kind> = Vec::new();
        for kind in kinds.iter().map(AsRef::as_ref).filter(|k| !k.trim().is_empty()) {
            let kind = kind.parse::<Kind>()?;
            if !parsed.contains(&kind) {
                parsed.push(kind);
            }
        }
        if parsed.is_empty() {
            return Err(Error::Selection("nothing to generate".to_string()));
        }

        Ok(Selection { leagues, kinds: parsed, output, theme })
    }
}

/// Everything a run needs besides the network and the disk.
#[derive(Debug, Clone)]
pub struct Config {
    pub selection: Selection,
    pub api_url: String,
    pub api_key: String,
    pub assets_dir: PathBuf,
    pub timeout: Duration,
}

/// Rewrites `-leagues` style flags into the `--leagues` form clap understands.
pub fn normalize_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.strip_prefix('-') {
            Some(name) if FLAGS.contains(&name) => format!("--{name}"),
            _ => arg,
        })
        .collect()
}

/// Reads command line arguments from a JSON object such as
/// `{"-leagues": "PD,PPL", "-generate": ["teams", "players"], "-bootstrap": true}`.
pub fn read_args_file(path: &Path) -> Result<Vec<String>, Error> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    args_from_json(value)
}

fn args_from_json(value: Value) -> Result<Vec<String>, Error> {
    let Value::Object(entries) = value else {
        return Err(Error::Selection("argument file must hold a JSON object".to_string()));
    };

    let mut args = Vec::new();
    for (key, value) in entries {
        let flag = format!("--{}", key.trim_start_matches('-'));
        match value {
            Value::Bool(true) => args.push(flag),
            Value::Bool(false) | Value::Null => {}
            Value::String(s) => args.extend([flag, s]),
            Value::Number(n) => args.extend([flag, n.to_string()]),
            Value::Array(items) => {
                let items = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(Error::Selection(format!("`{key}` lists a non-string value {other}"))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                args.extend([flag, items.join(",")]);
            }
            Value::Object(_) => {
                return Err(Error::Selection(format!("`{key}` cannot take an object value")));
            }
        }
    }
    Ok(args)
}
