use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: mover [-cpuprofile FILE]

  -cpuprofile FILE   write a span timing profile to FILE
  -h, --help         print this help";

/// Parsed command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub cpuprofile: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parses arguments, program name excluded.
///
/// Flags take one or two dashes and either `-flag value` or `-flag=value`.
/// An empty profile path turns profiling off. Parsing stops at the first
/// argument that is not a flag (a lone `-` included) or just after `--`;
/// whatever follows is ignored.
pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            break;
        }
        let flag = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
            Some(flag) if !flag.is_empty() => flag,
            _ => break, // フラグ以外が来たら終わり
        };
        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        match name {
            "h" | "help" => return Ok(Command::Help),
            "cpuprofile" => {
                let value = match inline_value {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| CliError::MissingValue(name.to_string()))?,
                };
                options.cpuprofile = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(CliError::UnknownFlag(name.to_string())),
        }
    }

    Ok(Command::Run(options))
}
