//! filebar-inspect: print the toolbar state derived from a snapshot.
//!
//! Reads a JSON snapshot of what the toolbar's collaborators supply
//! (parent folder chain, selection, search string) and prints what the
//! toolbar would show: whether the folder is a knowledge base, whether
//! the bulk trigger is enabled, which breadcrumb segments are links, and
//! the translated menus.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin filebar-inspect -- [OPTIONS] <SNAPSHOT_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use filebar_model::{Locale, MenuRow, Snapshot, ToolbarConfig, ToolbarView, Translator};

/// Print the file-manager toolbar state for a collaborator snapshot.
#[derive(Parser)]
#[command(name = "filebar-inspect", version)]
struct Cli {
    /// Path to the snapshot JSON file.
    snapshot_path: PathBuf,

    /// Language for labels.
    #[arg(long, value_enum, default_value = "en")]
    locale: Lang,

    /// Toolbar config as a JSON string.
    ///
    /// Missing fields take their default values.
    #[arg(long)]
    config_json: Option<String>,

    /// Output the derived state as JSON instead of a text report.
    #[arg(long)]
    json: bool,
}

/// Label language selection.
#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    /// English.
    En,
    /// Simplified Chinese.
    Zh,
}

impl From<Lang> for Locale {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Self::En,
            Lang::Zh => Self::Zh,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config_json.as_deref().map(serde_json::from_str::<ToolbarConfig>) {
        None => ToolbarConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("Invalid --config-json: {e}");
            return ExitCode::FAILURE;
        }
    };

    let json = match std::fs::read_to_string(&cli.snapshot_path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.snapshot_path.display());
            return ExitCode::FAILURE;
        }
    };
    let snapshot = match Snapshot::from_json(&json) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{}: {e}", cli.snapshot_path.display());
            return ExitCode::FAILURE;
        }
    };
    let locale = Locale::from(cli.locale);
    let translator = match Translator::new(locale) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("Locale {locale}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let view = snapshot.view(&translator);
    if cli.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing toolbar state: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report(&view, &config, translator.locale()));
    }

    ExitCode::SUCCESS
}

/// Human-readable report of a toolbar view.
fn report(view: &ToolbarView, config: &ToolbarConfig, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Locale:          {locale}");
    let _ = writeln!(out, "Knowledge base:  {}", view.is_knowledge_base);

    let _ = write!(out, "Breadcrumb:      ");
    if view.breadcrumbs.is_empty() {
        let _ = write!(out, "(root)");
    }
    for (i, segment) in view.breadcrumbs.iter().enumerate() {
        if i > 0 {
            let _ = write!(out, " / ");
        }
        if segment.clickable {
            let _ = write!(out, "[{}]({})", segment.title, segment.path);
        } else {
            let _ = write!(out, "{}", segment.title);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Search:          {:?} (placeholder {:?}, {}px)",
        view.search, view.search_placeholder, config.search_width_px
    );

    write_menu(&mut out, &view.bulk_label, view.bulk_menu.as_deref(), view.bulk_disabled);
    write_menu(&mut out, &view.add_label, view.add_menu.as_deref(), false);
    out.truncate(out.trim_end().len());
    out
}

fn write_menu(out: &mut String, label: &str, rows: Option<&[MenuRow]>, disabled: bool) {
    let Some(rows) = rows else {
        let _ = writeln!(out, "{label}: hidden");
        return;
    };
    let state = if disabled { "disabled" } else { "enabled" };
    let _ = writeln!(out, "{label}: {state}");
    for row in rows {
        match row {
            MenuRow::Item { item, label } => {
                let _ = writeln!(out, "  {}  {label} ({})", item.key, item.action);
            }
            MenuRow::Divider => {
                let _ = writeln!(out, "  ----");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn view_for(json: &str) -> ToolbarView {
        let snapshot = Snapshot::from_json(json).unwrap();
        snapshot.view(&Translator::new(Locale::En).unwrap())
    }

    #[test]
    fn report_marks_links_and_current_folder() {
        let view = view_for(
            r#"{"parent_folders":[{"id":"r","name":"/"},{"id":"d","name":"docs"}],"selection":["f1"]}"#,
        );
        let text = report(&view, &ToolbarConfig::default(), Locale::En);
        assert!(text.contains("[root](?folderId=r) / docs"), "{text}");
        assert!(text.contains("Bulk: enabled"), "{text}");
        assert!(text.contains("  5  Move (move)"), "{text}");
        assert!(text.contains("  ----"), "add menu divider: {text}");
    }

    #[test]
    fn report_hides_menus_in_knowledge_base() {
        let view = view_for(
            r#"{"parent_folders":[{"id":"kb","name":"Manuals","source_type":"knowledgebase"}]}"#,
        );
        let text = report(&view, &ToolbarConfig::default(), Locale::En);
        assert!(text.contains("Breadcrumb:      (root)"), "{text}");
        assert!(text.contains("Bulk: hidden"), "{text}");
        assert!(text.contains("Add file: hidden"), "{text}");
    }

    #[test]
    fn empty_selection_disables_bulk() {
        let view = view_for(r#"{"parent_folders":[{"id":"r","name":"/"}]}"#);
        let text = report(&view, &ToolbarConfig::default(), Locale::En);
        assert!(text.contains("Bulk: disabled"), "{text}");
    }
}
