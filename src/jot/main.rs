use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use jot::api::{CmdMessage, ConfigAction, JotApi, MessageLevel};
use jot::clipboard::{copy_to_clipboard, format_for_share};
use jot::config::JotConfig;
use jot::editor::{edit_content, EditorContent};
use jot::error::{JotError, Result};
use jot::index::DisplayNote;
use jot::model::{palette, NoteDraft, NotePatch};
use jot::store::fs::FileKv;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: JotApi<FileKv>,
    config: JotConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New {
            title,
            content,
            color,
            no_editor,
        }) => handle_new(&mut ctx, title, content, color, no_editor),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::View { positions }) => handle_view(&ctx, positions),
        Some(Commands::Edit { position, color }) => handle_edit(&mut ctx, position, color),
        Some(Commands::Delete { positions }) => handle_delete(&mut ctx, positions),
        Some(Commands::Share { position }) => handle_share(&ctx, position),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    // JOT_HOME overrides the platform dir; the integration tests lean
    // on this.
    if let Ok(home) = std::env::var("JOT_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "jot", "jot")
        .ok_or_else(|| JotError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let config = JotConfig::load(&dir).unwrap_or_default();

    let mut api = JotApi::new(FileKv::new(&dir), dir);
    if let Err(e) = api.load() {
        // Accepted data-loss path: warn and continue with an empty
        // collection rather than refusing to start.
        eprintln!(
            "{} {} — starting with an empty collection",
            "Warning:".yellow(),
            e
        );
    }

    Ok(AppContext { api, config })
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    color: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_content) = if no_editor {
        (title.unwrap_or_default(), content.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), content.unwrap_or_default());
        let edited = edit_content(&initial)?;
        (edited.title, edited.content)
    };

    // The form boundary owns validation; the store accepts anything.
    if final_title.trim().is_empty() || final_content.trim().is_empty() {
        return Err(JotError::Api("Title and content are required".into()));
    }

    let color = resolve_color(color.as_deref(), &ctx.config)?;
    let draft = NoteDraft::new(final_title, final_content, color);
    let result = ctx.api.create_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_notes(&term)?,
        None => ctx.api.list_notes()?,
    };
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, positions: Vec<String>) -> Result<()> {
    let parsed = parse_positions(&positions)?;
    let result = ctx.api.view_notes(&parsed)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: String, color: Option<String>) -> Result<()> {
    let pos = parse_position(&position)?;
    let note = ctx.api.note_at(pos)?;

    let initial = EditorContent::new(note.title.clone(), note.content.clone());
    let edited = edit_content(&initial)?;
    if edited.title.trim().is_empty() || edited.content.trim().is_empty() {
        return Err(JotError::Api("Title and content are required".into()));
    }

    let mut patch = NotePatch::default();
    if edited.title != note.title {
        patch.title = Some(edited.title);
    }
    if edited.content != note.content {
        patch.content = Some(edited.content);
    }
    if let Some(input) = color.as_deref() {
        let hex = palette::resolve(input)
            .ok_or_else(|| JotError::Api(format!("Unknown color: {}", input)))?;
        if hex != note.color {
            patch.color = Some(hex.to_string());
        }
    }

    if patch.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    let result = ctx.api.update_note(pos, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, positions: Vec<String>) -> Result<()> {
    let parsed = parse_positions(&positions)?;
    let result = ctx.api.delete_notes(&parsed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &AppContext, position: String) -> Result<()> {
    let pos = parse_position(&position)?;
    let note = ctx.api.note_at(pos)?;
    copy_to_clipboard(&format_for_share(&note.title, &note.content))?;
    println!("Note copied to clipboard: {}", note.title);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-color"), None) => ConfigAction::ShowKey("default-color".to_string()),
        (Some("default-color"), Some(v)) => ConfigAction::SetDefaultColor(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-color = {}", config.default_color);
    }
    print_messages(&result.messages);
    Ok(())
}

fn resolve_color(input: Option<&str>, config: &JotConfig) -> Result<String> {
    match input {
        Some(input) => palette::resolve(input)
            .map(str::to_string)
            .ok_or_else(|| JotError::Api(format!("Unknown color: {}", input))),
        None => Ok(config.default_color.clone()),
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

fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{}. ", dn.position);
        let swatch = color_swatch(&dn.note.color);

        let content_preview: String = dn
            .note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = format!("{} {}", dn.note.title, content_preview);

        let time_ago = format_time_ago(dn.note.created_at);

        let fixed_width = idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{} {}{}{}",
            idx_str,
            swatch,
            title_display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            dn.position.to_string().yellow(),
            color_swatch(&dn.note.color),
            dn.note.title.bold()
        );
        println!("--------------------------------");
        println!("{}", dn.note.content);
        let mut stamp = format!("Created {}", format_time_ago(dn.note.created_at).trim());
        if let Some(updated) = dn.note.updated_at {
            stamp.push_str(&format!(", updated {}", format_time_ago(updated).trim()));
        }
        println!("{}", stamp.dimmed());
    }
}

/// A colored dot in the note's accent color, when the hex parses and
/// the terminal supports truecolor escapes.
fn color_swatch(hex: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b),
        None => "●".normal(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
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

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn parse_position(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| JotError::Api(format!("Invalid note position: {}", s)))
}

fn parse_positions(strs: &[String]) -> Result<Vec<usize>> {
    strs.iter().map(|s| parse_position(s)).collect()
}
