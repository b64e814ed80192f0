//! trogon-env - inspect environment variables the way services read them
//!
//! Every subcommand prints its result as JSON on stdout. Failures go to
//! stderr with a non-zero exit code.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trogon_env::{Env, EnvValue, interpret};
use trogon_std::env::{ListEnv, ReadEnv};

/// trogon-env CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pretty-print JSON output
    #[arg(long, global = true, env = "TROGON_ENV_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpreted value: boolean, null or trimmed string
    Get {
        name: String,
        /// Returned when the variable is unset or blank; interpreted like a value
        #[arg(long)]
        default: Option<String>,
    },
    /// Trimmed string without true/false/null translation
    #[command(name = "string")]
    Text {
        name: String,
        #[arg(long)]
        default: Option<String>,
    },
    /// Boolean, or the default for anything that is not true/false
    Bool {
        name: String,
        #[arg(long)]
        default: Option<bool>,
    },
    /// Trimmed value, failing when unset, blank or null
    Require { name: String },
    /// Comma-separated list
    List {
        name: String,
        /// Comma-separated default list
        #[arg(long, value_delimiter = ',')]
        default: Option<Vec<String>>,
    },
    /// Comma-separated list, failing when unset, blank or null
    RequireList { name: String },
    /// All variables starting with PREFIX, keyed without it
    Prefix { prefix: String },
    /// Fail unless the full variable list can be enumerated
    CheckList,
}

fn run<E: ReadEnv + ListEnv>(env: &Env<E>, command: Command) -> trogon_env::Result<Value> {
    debug!(?command, "Running command");

    let value = match command {
        Command::Get { name, default } => {
            let default = default
                .map(|raw| interpret(&raw).unwrap_or(EnvValue::Str(raw)))
                .unwrap_or_default();
            json!(env.get_or(&name, default))
        }
        Command::Text { name, default } => json!(env.get_string(&name).or(default)),
        Command::Bool { name, default } => json!(env.get_bool(&name).or(default)),
        Command::Require { name } => json!(env.require(&name)?),
        Command::List { name, default } => json!(env.get_list_or(&name, default.unwrap_or_default())),
        Command::RequireList { name } => json!(env.require_list(&name)?),
        Command::Prefix { prefix } => json!(env.get_from_prefix(&prefix)?),
        Command::CheckList => {
            env.assert_list_available()?;
            json!(true)
        }
    };
    Ok(value)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trogon_env=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let value = run(&Env::system(), args.command)?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trogon_env::EnvError;
    use trogon_std::env::InMemoryEnv;

    fn parse(args: &[&str]) -> Command {
        Args::try_parse_from(std::iter::once("trogon-env").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn run_with(mem: &InMemoryEnv, args: &[&str]) -> trogon_env::Result<Value> {
        run(&Env::new(mem), parse(args))
    }

    #[test]
    fn get_prints_interpreted_value() {
        let mem = InMemoryEnv::new();
        mem.set("FLAG", " TRUE ");
        mem.set("NAME", " svc ");

        assert_eq!(run_with(&mem, &["get", "FLAG"]).unwrap(), json!(true));
        assert_eq!(run_with(&mem, &["get", "NAME"]).unwrap(), json!("svc"));
        assert_eq!(run_with(&mem, &["get", "UNSET"]).unwrap(), Value::Null);
    }

    #[test]
    fn get_default_is_interpreted() {
        let mem = InMemoryEnv::new();

        assert_eq!(
            run_with(&mem, &["get", "UNSET", "--default", "False"]).unwrap(),
            json!(false)
        );
        assert_eq!(
            run_with(&mem, &["get", "UNSET", "--default", "fallback"]).unwrap(),
            json!("fallback")
        );
    }

    #[test]
    fn string_and_bool_defaults() {
        let mem = InMemoryEnv::new();
        mem.set("YES", "yes");

        assert_eq!(run_with(&mem, &["string", "YES"]).unwrap(), json!("yes"));
        assert_eq!(
            run_with(&mem, &["string", "UNSET", "--default", "d"]).unwrap(),
            json!("d")
        );
        assert_eq!(run_with(&mem, &["bool", "YES"]).unwrap(), Value::Null);
        assert_eq!(
            run_with(&mem, &["bool", "YES", "--default", "true"]).unwrap(),
            json!(true)
        );
    }

    #[test]
    fn require_reports_missing_variable() {
        let mem = InMemoryEnv::new();
        mem.set("BLANK", "  ");

        let err = run_with(&mem, &["require", "BLANK"]).unwrap_err();
        assert_eq!(err.to_string(), "Required environment variable: BLANK, not found.");
        assert!(matches!(
            run_with(&mem, &["require-list", "UNSET"]),
            Err(EnvError::NotFound { .. })
        ));
    }

    #[test]
    fn list_commands() {
        let mem = InMemoryEnv::new();
        mem.set("HOSTS", "a,,b");

        assert_eq!(run_with(&mem, &["list", "HOSTS"]).unwrap(), json!(["a", "", "b"]));
        assert_eq!(
            run_with(&mem, &["list", "UNSET", "--default", "x,y"]).unwrap(),
            json!(["x", "y"])
        );
        assert_eq!(run_with(&mem, &["list", "UNSET"]).unwrap(), json!([]));
        assert_eq!(
            run_with(&mem, &["require-list", "HOSTS"]).unwrap(),
            json!(["a", "", "b"])
        );
    }

    #[test]
    fn prefix_and_check_list() {
        let mem = InMemoryEnv::new();
        mem.set("P_a", "abc");
        mem.set("P_b", "true");
        mem.set("P_d", "null");

        assert_eq!(
            run_with(&mem, &["prefix", "P_"]).unwrap(),
            json!({"a": "abc", "b": true, "d": null})
        );
        assert_eq!(run_with(&mem, &["check-list"]).unwrap(), json!(true));

        mem.disable_listing();
        assert_eq!(
            run_with(&mem, &["check-list"]),
            Err(EnvError::ListNotAvailable)
        );
        assert_eq!(
            run_with(&mem, &["prefix", "P_"]),
            Err(EnvError::ListNotAvailable)
        );
    }
}
