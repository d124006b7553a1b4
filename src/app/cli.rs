// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.

use crate::application::port::Collection;
use crate::domain::contact::ContactForm;
use crate::error::{Error, Result};
use pico_args::Arguments;

pub const HELP: &str = "\
devfolio - bilingual portfolio site tools

USAGE:
  devfolio [OPTIONS] <COMMAND>

OPTIONS:
  --lang <code>         Render output in this locale (en, ar) for this run
  --data-dir <path>     Directory holding the persisted locale
  --config-dir <path>   Directory holding settings.toml
  --demo                Use built-in demo content instead of the backend
  -h, --help            Print this help

COMMANDS:
  tr <key>...                 Print translations of the given keys
  locale [show|set <code>|toggle]
                              Show or change the persisted locale
  contact --name <n> --email <e> [--subject <s>] --message <m>
                              Build the WhatsApp handoff link
  blog                        List published blog posts
  list <collection>           Dump a content collection as JSON
";

/// Global options, valid with every command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Locale override for this run's output (not persisted).
    pub lang: Option<String>,
    /// Takes precedence over `DEVFOLIO_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `DEVFOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
    pub demo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleAction {
    Show,
    Set(String),
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Translate(Vec<String>),
    Locale(LocaleAction),
    Contact(ContactForm),
    Blog,
    List(Collection),
}

fn remaining(args: Arguments) -> Result<Vec<String>> {
    args.finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| Error::Usage(format!("argument is not UTF-8: {raw:?}")))
        })
        .collect()
}

fn no_extra(args: Arguments) -> Result<()> {
    let extra = remaining(args)?;
    if extra.is_empty() {
        Ok(())
    } else {
        Err(Error::Usage(format!("unexpected arguments: {}", extra.join(" "))))
    }
}

/// Parses global flags and the command.
///
/// # Errors
///
/// Returns [`Error::Usage`] for unknown commands, missing values or stray
/// arguments.
pub fn parse(mut args: Arguments) -> Result<(Flags, Command)> {
    let help = args.contains(["-h", "--help"]);
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        demo: args.contains("--demo"),
    };
    if help {
        return Ok((flags, Command::Help));
    }

    let command = match args.subcommand()?.as_deref() {
        None | Some("help") => Command::Help,
        Some("tr") => {
            let keys = remaining(args)?;
            if keys.is_empty() {
                return Err(Error::Usage("tr needs at least one key".to_string()));
            }
            return Ok((flags, Command::Translate(keys)));
        }
        Some("locale") => {
            let action = match args.opt_free_from_str::<String>()?.as_deref() {
                None | Some("show") => LocaleAction::Show,
                Some("set") => LocaleAction::Set(args.free_from_str()?),
                Some("toggle") => LocaleAction::Toggle,
                Some(other) => {
                    return Err(Error::Usage(format!("unknown locale action: {other}")));
                }
            };
            Command::Locale(action)
        }
        Some("contact") => Command::Contact(ContactForm {
            name: args.value_from_str("--name")?,
            email: args.value_from_str("--email")?,
            subject: args.opt_value_from_str("--subject")?.unwrap_or_default(),
            message: args.value_from_str("--message")?,
        }),
        Some("blog") => Command::Blog,
        Some("list") => {
            let name: String = args.free_from_str()?;
            let collection = name
                .parse::<Collection>()
                .map_err(|_| Error::Usage(format!("unknown collection: {name}")))?;
            Command::List(collection)
        }
        Some(other) => return Err(Error::Usage(format!("unknown command: {other}"))),
    };
    no_extra(args)?;
    Ok((flags, command))
}
