use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::lock::StoreLock;
use crate::io::store::{FileStore, load_items, resolve_store_dir, save_items};
use crate::model::filter::{Filter, all_complete, filter_items};
use crate::model::item::{Item, ItemKey};
use crate::ops::item_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_dir = resolve_store_dir(cli.store_dir.as_deref());
    let store = FileStore::new(&store_dir);

    match cli.command {
        None | Some(Commands::Path) => {
            // Handled in main.rs before dispatch
            Ok(())
        }

        // Read commands
        Some(Commands::List(args)) => cmd_list(&store, args, json),
        Some(Commands::Count) => cmd_count(&store, json),

        // Write commands
        Some(Commands::Add(args)) => cmd_add(&store, &store_dir, args),
        Some(Commands::Done(args)) => cmd_set_complete(&store, &store_dir, args, true),
        Some(Commands::Undone(args)) => cmd_set_complete(&store, &store_dir, args, false),
        Some(Commands::Edit(args)) => cmd_edit(&store, &store_dir, args),
        Some(Commands::Rm(args)) => cmd_rm(&store, &store_dir, args),
        Some(Commands::Clear) => cmd_clear(&store, &store_dir),
        Some(Commands::All) => cmd_all(&store, &store_dir),
    }
}

pub fn cmd_path(store_dir: Option<&str>) {
    println!("{}", resolve_store_dir(store_dir).display());
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply one mutation under the store lock and save the result.
fn mutate(
    store: &FileStore,
    store_dir: &Path,
    op: impl FnOnce(&[Item]) -> Vec<Item>,
) -> Result<Vec<Item>, Box<dyn std::error::Error>> {
    let _lock = StoreLock::acquire(store_dir)?;
    let items = load_items(store);
    let new_items = op(&items);
    save_items(store, &new_items)?;
    Ok(new_items)
}

/// Look up an item, surfacing a typo as an error. The ops themselves stay
/// permissive; only the command line is strict.
fn require_key(items: &[Item], key: u64) -> Result<ItemKey, item_ops::ItemError> {
    let key = ItemKey(key);
    if item_ops::contains_key(items, key) {
        Ok(key)
    } else {
        Err(item_ops::ItemError::NotFound(key))
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(store: &FileStore, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = Filter::parse(&args.filter)
        .ok_or_else(|| format!("unknown filter '{}' (all, active, completed)", args.filter))?;
    let items = load_items(store);
    let visible = filter_items(filter, &items);

    if json {
        let out = ListJson {
            filter: filter.as_str().to_string(),
            active: crate::model::filter::active_count(&items),
            items: visible.iter().map(|i| item_to_json(i)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if visible.is_empty() {
        match filter {
            Filter::All => println!("nothing to do"),
            _ => println!("no {} items", filter.as_str()),
        }
        return Ok(());
    }
    for item in &visible {
        println!("{}", format_item_line(item));
    }
    let n = crate::model::filter::active_count(&items);
    println!("{} item{} left", n, if n == 1 { "" } else { "s" });
    Ok(())
}

fn cmd_count(store: &FileStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let items = load_items(store);
    if json {
        println!("{}", serde_json::to_string_pretty(&count_to_json(&items))?);
    } else {
        println!("{}", crate::model::filter::active_count(&items));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(
    store: &FileStore,
    store_dir: &Path,
    args: AddArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        // Empty text is silently ignored, not an error
        return Ok(());
    }
    let items = mutate(store, store_dir, |items| item_ops::add_item(items, &text))?;
    let added = items.last().map(|i| i.key).unwrap_or(ItemKey(0));
    println!("added {}", added);
    Ok(())
}

fn cmd_set_complete(
    store: &FileStore,
    store_dir: &Path,
    args: KeyArgs,
    complete: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = StoreLock::acquire(store_dir)?;
    let items = load_items(store);
    let key = require_key(&items, args.key)?;
    let new_items = item_ops::toggle_complete(&items, key, complete);
    save_items(store, &new_items)?;
    println!("{} {}", if complete { "done" } else { "undone" }, key);
    Ok(())
}

fn cmd_edit(
    store: &FileStore,
    store_dir: &Path,
    args: EditArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let _lock = StoreLock::acquire(store_dir)?;
    let items = load_items(store);
    let key = require_key(&items, args.key)?;
    let new_items = item_ops::update_text(&items, key, &text);
    save_items(store, &new_items)?;
    println!("edited {}", key);
    Ok(())
}

fn cmd_rm(
    store: &FileStore,
    store_dir: &Path,
    args: KeyArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = StoreLock::acquire(store_dir)?;
    let items = load_items(store);
    let key = require_key(&items, args.key)?;
    let new_items = item_ops::remove_item(&items, key);
    save_items(store, &new_items)?;
    println!("removed {}", key);
    Ok(())
}

fn cmd_clear(store: &FileStore, store_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut before = 0;
    let items = mutate(store, store_dir, |items| {
        before = items.len();
        item_ops::clear_completed(items)
    })?;
    println!("cleared {} completed", before - items.len());
    Ok(())
}

fn cmd_all(store: &FileStore, store_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut target = true;
    let items = mutate(store, store_dir, |items| {
        target = !all_complete(items);
        item_ops::toggle_all_complete(items, target)
    })?;
    let n = items.len();
    if target {
        println!("completed {} item{}", n, if n == 1 { "" } else { "s" });
    } else {
        println!("reopened {} item{}", n, if n == 1 { "" } else { "s" });
    }
    Ok(())
}
