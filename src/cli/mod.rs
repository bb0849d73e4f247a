pub mod output;
pub mod report;

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    config::{ConfigManager, CONFIG_KEYS},
    core::{services::FinancialViewService, Clock, SystemClock},
    errors::CliError,
    storage::{EntryStore, JsonEntryStore},
    utils::{build_info, persistence},
};

const USAGE: &str = "finance_core_cli <command>

Commands:
  view <entries.json> [--date YYYY-MM-DD] [--json]   full financial report
  insights <entries.json> [--date YYYY-MM-DD]        advisories only
  import <name> <entries.json>                       store a named snapshot
  export <name>                                      print a stored snapshot as JSON
  snapshots                                          list stored snapshots
  config show | config set <key> <value>             view or change settings
  version                                            build information";

/// Entry point used by the `finance_core_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    run_with_args(std::env::args().skip(1).collect(), &SystemClock)
}

/// Dispatches a command line (without the program name). `clock` supplies the
/// reference date when `--date` is absent.
pub fn run_with_args(args: Vec<String>, clock: &dyn Clock) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage(USAGE.to_string()));
    };
    debug!(command = %command, "dispatching cli command");
    match command.as_str() {
        "view" => cmd_view(rest, clock),
        "insights" => cmd_insights(rest, clock),
        "import" => cmd_import(rest),
        "export" => cmd_export(rest),
        "snapshots" => cmd_snapshots(),
        "config" => cmd_config(rest),
        "version" => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`\n\n{USAGE}"))),
    }
}

/// Options shared by the reporting commands.
#[derive(Debug, Default, PartialEq)]
struct ReportArgs {
    path: Option<String>,
    date: Option<NaiveDate>,
    json: bool,
}

fn parse_report_args(args: &[String], allow_json: bool) -> Result<ReportArgs, CliError> {
    let mut parsed = ReportArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--date" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--date expects YYYY-MM-DD".into()))?;
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| CliError::Usage(format!("invalid date `{raw}`")))?;
                parsed.date = Some(date);
            }
            "--json" if allow_json => parsed.json = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option `{flag}`")))
            }
            path if parsed.path.is_none() => parsed.path = Some(path.to_string()),
            extra => return Err(CliError::Usage(format!("unexpected argument `{extra}`"))),
        }
    }
    Ok(parsed)
}

fn report_date(explicit: Option<NaiveDate>, clock: &dyn Clock) -> NaiveDate {
    explicit.unwrap_or_else(|| clock.today())
}

fn cmd_view(args: &[String], clock: &dyn Clock) -> Result<(), CliError> {
    let parsed = parse_report_args(args, true)?;
    let path = parsed
        .path
        .ok_or_else(|| CliError::Usage("view <entries.json> [--date YYYY-MM-DD] [--json]".into()))?;
    let config = ConfigManager::new()?.load()?;
    let entries = persistence::load_entries_from_path(Path::new(&path))?;
    let today = report_date(parsed.date, clock);
    let view = FinancialViewService::compute_with_thresholds(&entries, today, &config.thresholds);

    if parsed.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", report::render_view(&view, &config.currency));
    }
    Ok(())
}

fn cmd_insights(args: &[String], clock: &dyn Clock) -> Result<(), CliError> {
    let parsed = parse_report_args(args, false)?;
    let path = parsed
        .path
        .ok_or_else(|| CliError::Usage("insights <entries.json> [--date YYYY-MM-DD]".into()))?;
    let config = ConfigManager::new()?.load()?;
    let entries = persistence::load_entries_from_path(Path::new(&path))?;
    let today = report_date(parsed.date, clock);
    let view = FinancialViewService::compute_with_thresholds(&entries, today, &config.thresholds);
    print!("{}", report::render_insights(&view.insights));
    Ok(())
}

fn cmd_import(args: &[String]) -> Result<(), CliError> {
    let [name, path] = args else {
        return Err(CliError::Usage("import <name> <entries.json>".into()));
    };
    let entries = persistence::load_entries_from_path(Path::new(path))?;
    if entries.is_empty() {
        output::warning(format!("`{path}` holds no entries; storing an empty snapshot."));
    }
    let store = JsonEntryStore::new_default()?;
    store.save(name, &entries)?;
    output::success(format!("Imported {} entries as `{name}`.", entries.len()));
    Ok(())
}

fn cmd_export(args: &[String]) -> Result<(), CliError> {
    let [name] = args else {
        return Err(CliError::Usage("export <name>".into()));
    };
    let store = JsonEntryStore::new_default()?;
    let entries = store.load(name)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn cmd_snapshots() -> Result<(), CliError> {
    let store = JsonEntryStore::new_default()?;
    let names = store.list()?;
    if names.is_empty() {
        output::info("No stored snapshots.");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn cmd_config(args: &[String]) -> Result<(), CliError> {
    let manager = ConfigManager::new()?;
    match args {
        [] => show_config(&manager),
        [sub] if sub == "show" => show_config(&manager),
        [sub, key, value @ ..] if sub == "set" && !value.is_empty() => {
            manager.set(key, &value.join(" "))?;
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(CliError::Usage(format!(
            "config [show|set <key> <value>] (keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn show_config(manager: &ConfigManager) -> Result<(), CliError> {
    let config = manager.load()?;
    output::print(output::MessageKind::Section, "Configuration");
    println!("{}", serde_json::to_string_pretty(&config)?);
    output::info(format!("Stored at {}", manager.path().display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn report_args_accept_date_and_json() {
        let parsed =
            parse_report_args(&args(&["entries.json", "--date", "2024-05-15", "--json"]), true)
                .expect("parse");
        assert_eq!(parsed.path.as_deref(), Some("entries.json"));
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 5, 15));
        assert!(parsed.json);
    }

    #[test]
    fn report_args_reject_bad_input() {
        assert!(matches!(
            parse_report_args(&args(&["a.json", "--date", "15/05/2024"]), true),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_report_args(&args(&["a.json", "--json"]), false),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_report_args(&args(&["a.json", "b.json"]), true),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn missing_and_unknown_commands_are_usage_errors() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 5, 15).expect("date"));
        assert!(matches!(
            run_with_args(Vec::new(), &clock),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            run_with_args(args(&["frobnicate"]), &clock),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn report_date_prefers_explicit_flag() {
        let pinned = NaiveDate::from_ymd_opt(2024, 5, 15).expect("date");
        let clock = FixedClock::on(pinned);
        assert_eq!(report_date(None, &clock), pinned);
        let explicit = NaiveDate::from_ymd_opt(2023, 1, 2).expect("date");
        assert_eq!(report_date(Some(explicit), &clock), explicit);
    }
}
