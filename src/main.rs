mod debug_report;

use quilvyn_frontier::{
    Odds, Options, ethnicities, nicknames_verbose_with, parse_value, parse_value_list, random_name_verbose_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "QUILVYN_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let options =
        if config.epithets { Options::default() } else { Options { epithet_odds: Odds::NEVER, ..Options::default() } };

    match config.command {
        Command::Nicknames(name) => {
            let trace = nicknames_verbose_with(&name, &mut rng);
            debug_report::print_nicknames(&trace, config.color);
        }
        Command::Name { ethnicity, gender, count } => {
            let reports: Vec<_> = (0..count)
                .map(|_| random_name_verbose_with(&ethnicity, gender.as_deref(), &mut rng, &options))
                .collect();
            debug_report::print_names(&ethnicity, &reports, config.color);
        }
        Command::Attr { key, record } => {
            match parse_value(&record, &key) {
                Some(value) => println!("{value}"),
                None => println!("(absent)"),
            }
            let list = parse_value_list(&record, &key);
            if list.len() > 1 {
                for (idx, value) in list.iter().enumerate() {
                    println!("  [{idx}] {value}");
                }
            }
        }
        Command::ListEthnicities => {
            for name in ethnicities() {
                println!("{name}");
            }
        }
    }
}

enum Command {
    Nicknames(String),
    Name { ethnicity: String, gender: Option<String>, count: usize },
    Attr { key: String, record: String },
    ListEthnicities,
}

struct CliConfig {
    command: Command,
    seed: Option<u64>,
    epithets: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut nicknames: Option<String> = None;
    let mut name = false;
    let mut list = false;
    let mut ethnicity: Option<String> = None;
    let mut gender: Option<String> = None;
    let mut count = 1usize;
    let mut key: Option<String> = None;
    let mut record: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut epithets = true;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("quilvyn-frontier {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--no-epithet" => epithets = false,
            "--name" => name = true,
            "--list-ethnicities" => list = true,
            "--nicknames" => nicknames = Some(value_of("--nicknames", &mut args)?),
            "--ethnicity" => ethnicity = Some(value_of("--ethnicity", &mut args)?),
            "--gender" => gender = Some(value_of("--gender", &mut args)?),
            "--attr" => key = Some(value_of("--attr", &mut args)?),
            "--record" => record = Some(value_of("--record", &mut args)?),
            "--count" => {
                let value = value_of("--count", &mut args)?;
                count = value.parse().map_err(|_| format!("error: invalid --count '{value}'"))?;
            }
            "--seed" => {
                let value = value_of("--seed", &mut args)?;
                seed = Some(value.parse().map_err(|_| format!("error: invalid --seed '{value}' (expected u64)"))?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                return Err(format!("error: unexpected argument '{arg}'"));
            }
        }
    }

    let modes = [nicknames.is_some(), name, key.is_some() || record.is_some(), list];
    let command = match modes.iter().filter(|m| **m).count() {
        0 => return Err(format!("error: no command given\n\n{}", help_text())),
        1 => {
            if let Some(full_name) = nicknames {
                Command::Nicknames(full_name)
            } else if name {
                let ethnicity = match ethnicity {
                    Some(e) => e,
                    None => pick_ethnicity(seed),
                };
                Command::Name { ethnicity, gender, count }
            } else if list {
                Command::ListEthnicities
            } else {
                match (key, record) {
                    (Some(key), Some(record)) => Command::Attr { key, record },
                    _ => return Err("error: --attr and --record must be given together".to_string()),
                }
            }
        }
        _ => return Err("error: choose one of --nicknames, --name, --attr, --list-ethnicities".to_string()),
    };

    Ok(CliConfig { command, seed, epithets, color })
}

fn value_of(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

/// Random ethnicity for `--name` without `--ethnicity`. Seeded separately so
/// the name draws stay the same for a given `--seed`.
fn pick_ethnicity(seed: Option<u64>) -> String {
    use quilvyn_frontier::RandomSource;

    let choices = ethnicities();
    if choices.is_empty() {
        return String::new();
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    choices[rng.index(choices.len())].to_string()
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "quilvyn-frontier {version}

Frontier name generator and attribute-string inspector.

Usage:
  quilvyn-frontier [OPTIONS] --nicknames <name>
  quilvyn-frontier [OPTIONS] --name [--ethnicity <e>] [--gender <g>] [--count <n>]
  quilvyn-frontier [OPTIONS] --attr <key> --record <record>
  quilvyn-frontier --list-ethnicities

Options:
  --seed <u64>       Seed the random source for repeatable output.
  --no-epithet       Never attach a quoted epithet to generated names.
  --color            Force ANSI color output.
  --no-color         Disable ANSI color output.
  -h, --help         Show this help message.
  -V, --version      Print version information.

Environment:
  {log_env}        Log filter (tracing EnvFilter syntax). Default: warn

Exit codes:
  0  Success.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV
    )
}
