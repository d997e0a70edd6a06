use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use chrono::Local;

use crate::entity::{Note, NoteDraft, NotePatch, PaletteColor, DEFAULT_COLOR, PALETTE};
use crate::error::{BlocoError, Result};
use crate::export::{export_note, format_timestamp};
use crate::notebook::Notebook;
use crate::search::query;
use crate::storage::NoteStore;
use crate::warnings::capacity_warnings;

/// Resolve the notebook root from `--dir`, or by looking for .bloco/ upwards
fn notebook_root(dir: Option<PathBuf>) -> PathBuf {
    match dir {
        Some(dir) => dir,
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Notebook::find_root(&cwd)
        }
    }
}

/// Open the notebook and its store, reporting a recovered load failure
fn open_store(dir: Option<PathBuf>) -> Result<(Notebook, NoteStore)> {
    let root = notebook_root(dir);
    let notebook = Notebook::open(&root)?;
    let (store, recovered) = notebook.open_store()?;

    if let Some(err) = recovered {
        eprintln!(
            "Warning: {}. The unreadable data was backed up and the notebook starts empty.",
            err
        );
    }

    Ok((notebook, store))
}

fn report_thresholds(store: &NoteStore) -> Result<()> {
    for warning in capacity_warnings(store.len(), store.serialized_len()?) {
        eprintln!("{}", warning);
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(BlocoError::EmptyTitle);
    }
    Ok(())
}

fn parse_color(color: &str) -> Result<PaletteColor> {
    color
        .parse()
        .map_err(|_| BlocoError::InvalidColor(color.to_string()))
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

fn display_date(millis: i64) -> String {
    format_timestamp(millis, &Local).unwrap_or_else(|| millis.to_string())
}

pub fn handle_init(dir: Option<PathBuf>) -> Result<()> {
    let root = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let notebook = Notebook::init(&root)?;

    println!("Initialized bloco notebook in {}", notebook.dir().display());
    Ok(())
}

pub fn handle_add(
    dir: Option<PathBuf>,
    title: String,
    content: Option<String>,
    stdin: bool,
    color: Option<String>,
    json: bool,
) -> Result<()> {
    validate_title(&title)?;
    let color = color.as_deref().map(parse_color).transpose()?;

    let content = if stdin {
        read_stdin()?
    } else {
        content.unwrap_or_default()
    };

    let (_notebook, mut store) = open_store(dir)?;

    let note = store.create(NoteDraft {
        title,
        content,
        color,
    })?;
    report_thresholds(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note ({}) - {}", note.short_id(), note.title);
    }

    Ok(())
}

pub fn handle_edit(
    dir: Option<PathBuf>,
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
    color: Option<String>,
    json: bool,
) -> Result<()> {
    if let Some(ref title) = title {
        validate_title(title)?;
    }
    let color = color.as_deref().map(parse_color).transpose()?;

    let content = if stdin { Some(read_stdin()?) } else { content };

    let patch = NotePatch {
        title,
        content,
        color,
    };
    if patch.is_empty() {
        eprintln!("Nothing to update. Pass --title, --content, --stdin or --color.");
        return Ok(());
    }

    let (_notebook, mut store) = open_store(dir)?;
    let note_id = store.resolve(&id)?.id.clone();

    let updated = store
        .update(&note_id, patch)?
        .ok_or(BlocoError::NoteNotFound(id))?;
    report_thresholds(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        println!("Updated note ({}) - {}", updated.short_id(), updated.title);
    }

    Ok(())
}

pub fn handle_delete(dir: Option<PathBuf>, id: String, force: bool) -> Result<()> {
    let (_notebook, mut store) = open_store(dir)?;
    let note = store.resolve(&id)?.clone();

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note ({}) - {}? [y/N] ", note.short_id(), note.title);

        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(BlocoError::ConfirmationRequired);
        }
    }

    if !store.delete(&note.id)? {
        return Err(BlocoError::NoteNotFound(id));
    }

    println!("Deleted note ({}) - {}", note.short_id(), note.title);
    Ok(())
}

pub fn handle_list(dir: Option<PathBuf>, search: String, json: bool) -> Result<()> {
    let (_notebook, store) = open_store(dir)?;
    let view = query(store.get_all(), &search);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        if search.is_empty() {
            println!("No notes yet. Use 'bloco add <title>' to create one.");
        } else {
            println!("No notes found for \"{}\".", search);
        }
        return Ok(());
    }

    println!("Notes:\n");
    for note in view {
        println!(
            "  {}  {}  [{}]  {}",
            note.short_id(),
            note.title,
            note.color,
            display_date(note.updated_at)
        );
        if let Some(first_line) = note.content.lines().find(|l| !l.trim().is_empty()) {
            println!("      {}", first_line.trim());
        }
    }

    Ok(())
}

pub fn handle_show(dir: Option<PathBuf>, id: String, json: bool) -> Result<()> {
    let (_notebook, store) = open_store(dir)?;
    let note = store.resolve(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(note)?);
    } else {
        print_note(note);
    }

    Ok(())
}

fn print_note(note: &Note) {
    println!("Note {}", note.id);
    println!("Title: {}", note.title);
    println!("Color: {}", note.color);
    println!("Created: {}", display_date(note.created_at));
    println!("Updated: {}", display_date(note.updated_at));
    if !note.content.is_empty() {
        println!("\n{}", note.content);
    }
}

pub fn handle_export(dir: Option<PathBuf>, id: String, out: Option<PathBuf>) -> Result<()> {
    let (notebook, store) = open_store(dir)?;
    let note = store.resolve(&id)?;

    let target = match out.or_else(|| notebook.config().export_dir.clone()) {
        Some(target) => target,
        None => env::current_dir()?,
    };

    let path = export_note(note, &target)?;
    println!("Exported note ({}) to {}", note.short_id(), path.display());
    Ok(())
}

pub fn handle_colors() -> Result<()> {
    for color in PALETTE {
        let marker = if color == DEFAULT_COLOR { " (default)" } else { "" };
        println!("  {:<8} {}{}", color.name(), color.as_str(), marker);
    }
    Ok(())
}
