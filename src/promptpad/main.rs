use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use promptpad::api::{CmdMessage, MessageLevel, PromptApi, RecordDraft};
use promptpad::clipboard::copy_to_clipboard;
use promptpad::commands;
use promptpad::config::{self, PromptConfig};
use promptpad::error::{PromptError, Result};
use promptpad::filter::OptionLists;
use promptpad::index::ClassificationIndex;
use promptpad::model::Record;
use promptpad::store::fs::FileStore;
use std::io::Read;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

/// Display label for an empty group. Never stored.
const UNGROUPED: &str = "(Ungrouped)";
/// Display label for an empty subgroup. Never stored.
const NO_SUBGROUP: &str = "(no subgroup)";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PromptApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_file = resolve_data_file(&cli)?;

    // Capture and config run without an open session: capture must re-read
    // the file on its own, and config has no use for the record list.
    let command = match cli.command {
        Some(Commands::Capture { text }) => return handle_capture(data_file, text),
        Some(Commands::Config { key, value }) => return handle_config(key, value),
        other => other,
    };

    let mut ctx = AppContext {
        api: PromptApi::open(FileStore::new(data_file))?,
    };

    match command {
        Some(Commands::Create {
            title,
            content,
            group,
            subgroup,
        }) => handle_create(&mut ctx, title, content, group, subgroup),
        Some(Commands::List {
            group,
            subgroup,
            query,
            options,
        }) => handle_list(&mut ctx, group, subgroup, query, options),
        Some(Commands::View { selector }) => handle_view(&ctx, &selector),
        Some(Commands::Edit {
            selector,
            title,
            content,
            group,
            subgroup,
        }) => handle_edit(&mut ctx, &selector, title, content, group, subgroup),
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx, &selector),
        Some(Commands::Copy { selector }) => handle_copy(&ctx, &selector),
        Some(Commands::Groups) => handle_groups(&ctx),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Export { dir }) => handle_export(&ctx, dir),
        Some(Commands::Capture { .. }) | Some(Commands::Config { .. }) => Ok(()), // handled above
        None => handle_list(&mut ctx, None, None, None, false),
    }
}

fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    let config = config::project_dirs()
        .and_then(|dirs| PromptConfig::load(dirs.config_dir()))
        .unwrap_or_default();
    config::resolve_data_file(cli.file.clone(), &config)
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    group: String,
    subgroup: String,
) -> Result<()> {
    let content = match content {
        Some(c) => c,
        None => read_stdin()?,
    };
    let result = ctx.api.create(RecordDraft {
        group,
        subgroup,
        title,
        content,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    group: Option<String>,
    subgroup: Option<String>,
    query: Option<String>,
    show_options: bool,
) -> Result<()> {
    if let Some(group) = group {
        ctx.api.set_group(non_empty(group))?;
    }
    if let Some(subgroup) = subgroup {
        ctx.api.set_subgroup(non_empty(subgroup))?;
    }
    if let Some(query) = query {
        ctx.api.set_query(query)?;
    }

    let result = ctx.api.list()?;
    print_records(&result.listed_records);
    if show_options {
        print_options(&result.options);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, selector: &str) -> Result<()> {
    let record = resolve_record(ctx, selector)?;
    println!(
        "{} {}",
        record.title.bold(),
        classification_label(&record).cyan()
    );
    println!("--------------------------------");
    println!("{}", record.content);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    title: Option<String>,
    content: Option<String>,
    group: Option<String>,
    subgroup: Option<String>,
) -> Result<()> {
    let record = resolve_record(ctx, selector)?;
    let id = record.id.clone();
    let draft = RecordDraft {
        group: group.unwrap_or(record.group),
        subgroup: subgroup.unwrap_or(record.subgroup),
        title: title.unwrap_or(record.title),
        content: content.unwrap_or(record.content),
    };
    let result = ctx.api.update(&id, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let record = resolve_record(ctx, selector)?;
    let result = ctx.api.delete(&record.id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, selector: &str) -> Result<()> {
    let record = resolve_record(ctx, selector)?;
    copy_to_clipboard(&record.content)?;
    println!("Prompt content copied to clipboard.");
    Ok(())
}

fn handle_groups(ctx: &AppContext) -> Result<()> {
    let index = ClassificationIndex::build(ctx.api.records());
    let tree = index.tree();
    if tree.is_empty() {
        println!("No prompts yet.");
        return Ok(());
    }
    for (group, subgroups) in tree {
        let label = if group.is_empty() {
            UNGROUPED
        } else {
            group.as_str()
        };
        println!("{}", label.bold());
        for (subgroup, count) in &subgroups {
            let sub_label = if subgroup.is_empty() {
                NO_SUBGROUP
            } else {
                subgroup.as_str()
            };
            println!("  {} {}", sub_label, format!("({})", count).dimmed());
        }
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&path).map_err(PromptError::Io)?;
    let result = ctx.api.import_text(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export_to(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_capture(data_file: PathBuf, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(t) => t,
        None => read_stdin()?,
    };
    let result = commands::capture::run(FileStore::new(data_file), &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dirs = config::project_dirs()?;
    let mut config = PromptConfig::load(dirs.config_dir()).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            match &config.data_file {
                Some(path) => println!("data-file = {}", path.display()),
                None => println!("data-file = (default)"),
            }
            Ok(())
        }
        (Some("data-file"), Some(v)) => {
            config.data_file = Some(PathBuf::from(v));
            config.save(dirs.config_dir())?;
            println!("data-file set.");
            Ok(())
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            Ok(())
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(PromptError::Io)?;
    Ok(buf)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Find the one record a selector names: an id prefix, or failing that an
/// exact title match (case-insensitive). Ambiguity is an error, not a guess.
fn resolve_record(ctx: &AppContext, selector: &str) -> Result<Record> {
    let needle = selector.to_lowercase();
    let records = ctx.api.records();

    let mut hits: Vec<&Record> = records
        .iter()
        .filter(|r| r.id.to_lowercase().starts_with(&needle))
        .collect();
    if hits.is_empty() {
        hits = records
            .iter()
            .filter(|r| r.title.to_lowercase() == needle)
            .collect();
    }

    match hits.len() {
        0 => Err(PromptError::RecordNotFound(selector.to_string())),
        1 => Ok(hits[0].clone()),
        n => Err(PromptError::Store(format!(
            "'{}' matches {} prompts; use a longer id prefix",
            selector, n
        ))),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No prompts found.");
        return;
    }

    for record in records {
        let id_short: String = record.id.chars().take(8).collect();
        let class = classification_label(record);
        let time_ago = format_time_ago(record.updated_at);

        let fixed = id_short.width() + 2 + class.width() + 3 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&record.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}  {}{}  {} {}",
            id_short.dimmed(),
            title,
            " ".repeat(padding),
            class.cyan(),
            time_ago.dimmed()
        );
    }
}

fn print_options(options: &OptionLists) {
    println!();
    println!("{}", "Groups:".bold());
    if options.groups.is_empty() {
        println!("  (none)");
    }
    for group in &options.groups {
        println!("  {}", group);
    }
    println!("{}", "Subgroups:".bold());
    if options.subgroups.is_empty() {
        println!("  (none)");
    }
    for subgroup in &options.subgroups {
        println!("  {}", subgroup);
    }
}

fn classification_label(record: &Record) -> String {
    let group = if record.group.is_empty() {
        UNGROUPED
    } else {
        record.group.as_str()
    };
    if record.subgroup.is_empty() {
        group.to_string()
    } else {
        format!("{} / {}", group, record.subgroup)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
