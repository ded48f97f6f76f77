// src/cli.rs
use std::{env, fs, path::PathBuf};

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::config::consts::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::config::{IdentifyOptions, RegistryOptions};
use crate::specs::page::{HtmlPage, PageSnapshot};
use crate::tabs::{Evidence, Hint, Item, Subsystem};
use crate::tool::TabTool;

#[derive(Debug, Default)]
struct EvidenceArgs {
    tab: Option<String>,
    category: Option<String>,
    url: Option<String>,
    page: Option<PathBuf>,
}

#[derive(Debug)]
enum Command {
    Identify(EvidenceArgs),
    Translate { tab: String, subsystem: Subsystem, name: Option<String>, category: Option<String> },
    Item(Item),
    Tabs(Subsystem),
    Dump,
    Help,
}

#[derive(Debug)]
struct Params {
    command: Command,
    fall_through: bool,
    verbose: bool,
    breeds: Option<Vec<String>>,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let params = parse_cli(env::args().skip(1))?;

    crate::log::init(if params.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER });

    let registry = match params.breeds {
        Some(breeds) => RegistryOptions::with_breeds(breeds),
        None => RegistryOptions::default(),
    };
    let options = if params.fall_through {
        IdentifyOptions::fall_through()
    } else {
        IdentifyOptions::default()
    };
    let tool = TabTool::with_options(&registry, options)?;

    match params.command {
        Command::Identify(args) => identify(&tool, &args),
        Command::Translate { tab, subsystem, name, category } => {
            let tab = tool
                .identify_str(&tab)
                .ok_or_else(|| eyre!("Not a tab id or alias: {tab}"))?;
            let hint = Hint { name: name.as_deref(), category: category.as_deref() };
            println!("{}", tool.tab_name_for(tab, subsystem, Some(&hint)).unwrap_or("-"));
            Ok(())
        }
        Command::Item(item) => {
            let set = tool
                .tab_set_for_item(&item)
                .ok_or_else(|| eyre!("Could not identify a tab for {item:?}"))?;
            println!("{}", serde_json::to_string_pretty(&set)?);
            Ok(())
        }
        Command::Tabs(subsystem) => {
            for name in tool.valid_tabs_for(subsystem) {
                println!("{name}");
            }
            Ok(())
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(&tool.data())?);
            Ok(())
        }
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
    }
}

fn identify(tool: &TabTool, args: &EvidenceArgs) -> Result<()> {
    let html = match &args.page {
        Some(path) => Some(
            fs::read_to_string(path)
                .wrap_err_with(|| format!("Reading page {}", path.display()))?,
        ),
        None => None,
    };
    let page = html.as_deref().map(HtmlPage::new);

    let evidence = Evidence {
        tab_name: args.tab.as_deref(),
        category: args.category.as_deref(),
        url: args.url.as_deref(),
        page: page.as_ref().map(|p| p as &dyn PageSnapshot),
    };
    if evidence.is_empty() {
        bail!("identify needs at least one of --tab, --category, --url, --page");
    }

    match tool.identify(&evidence) {
        Some(tab) => println!("{tab}"),
        None => println!("-"),
    }
    Ok(())
}

fn parse_cli<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut positional: Vec<String> = Vec::new();
    let mut ev = EvidenceArgs::default();
    let mut name = None;
    let mut fall_through = false;
    let mut verbose = false;
    let mut help = false;
    let mut breeds = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--tab" => ev.tab = Some(args.next().ok_or_else(|| eyre!("Missing value for --tab"))?),
            "--category" | "--cat" => {
                ev.category = Some(args.next().ok_or_else(|| eyre!("Missing value for --category"))?)
            }
            "--url" => ev.url = Some(args.next().ok_or_else(|| eyre!("Missing value for --url"))?),
            "--page" => {
                ev.page = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing page path"))?))
            }
            "--name" => name = Some(args.next().ok_or_else(|| eyre!("Missing value for --name"))?),
            "--breeds" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --breeds"))?;
                breeds = Some(parse_list(&v));
            }
            "--fall-through" => fall_through = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => help = true,
            other if other.starts_with('-') => bail!("Unknown arg: {other}"),
            _ => positional.push(a),
        }
    }

    if help {
        return Ok(Params { command: Command::Help, fall_through, verbose, breeds });
    }

    let mut pos = positional.into_iter();
    let command = match pos.next().as_deref() {
        Some("identify") => Command::Identify(ev),
        Some("translate") => {
            let tab = pos.next().ok_or_else(|| eyre!("translate needs <TAB> <SUBSYSTEM>"))?;
            let sub = pos.next().ok_or_else(|| eyre!("translate needs <TAB> <SUBSYSTEM>"))?;
            Command::Translate { tab, subsystem: sub.parse()?, name, category: ev.category }
        }
        Some("item") => Command::Item(Item { name, tab: ev.tab, category: ev.category }),
        Some("tabs") => {
            let sub = pos.next().ok_or_else(|| eyre!("tabs needs <SUBSYSTEM>"))?;
            Command::Tabs(sub.parse()?)
        }
        Some("dump") => Command::Dump,
        Some("help") | None => Command::Help,
        Some(other) => bail!("Unknown command: {other}"),
    };
    if let Some(extra) = pos.next() {
        bail!("Unexpected argument: {extra}");
    }

    Ok(Params { command, fall_through, verbose, breeds })
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(String::from)
        .collect()
}
