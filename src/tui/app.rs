use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::config_io::read_config;
use crate::io::persist::Persister;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::store::{FileStore, load_items, resolve_store_dir};
use crate::io::watcher::StoreWatcher;
use crate::model::filter::{Filter, filter_items};
use crate::model::item::{Item, ItemKey};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new item into the input row
    Insert,
    /// Rewriting the text of the item under the cursor
    Edit,
    Search,
}

/// Main application state. The whole view model lives here; nothing is
/// ambient.
pub struct App {
    /// Full item sequence; the filtered view is derived, never stored
    pub items: Vec<Item>,
    pub filter: Filter,
    /// True until the initial load has completed or failed
    pub loading: bool,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Line editor shared by Insert (new item) and Edit (rewrite)
    pub edit_buffer: String,
    /// Byte offset of the editor cursor in `edit_buffer`
    pub edit_cursor: usize,
    /// Key of the item being rewritten (Edit mode)
    pub edit_key: Option<ItemKey>,
    /// Search mode: query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    pub show_help: bool,
    pub status_message: Option<String>,
    store: FileStore,
    persister: Persister,
}

impl App {
    pub fn new(store: FileStore, persister: Persister, theme: Theme) -> Self {
        App {
            items: Vec::new(),
            filter: Filter::All,
            loading: true,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_key: None,
            search_input: String::new(),
            last_search: None,
            show_help: false,
            status_message: None,
            store,
            persister,
        }
    }

    /// Initial load from the store. An absent or unreadable payload means
    /// an empty list; either way the loading flag clears.
    pub fn load(&mut self) {
        self.items = load_items(&self.store);
        self.loading = false;
    }

    /// The filtered view, in insertion order.
    pub fn visible(&self) -> Vec<&Item> {
        filter_items(self.filter, &self.items)
    }

    /// Commit a new full sequence: the display updates now, the durable
    /// write is queued behind it and never blocks the event loop.
    pub fn commit(&mut self, new_items: Vec<Item>) {
        self.items = new_items;
        self.persister.queue(&self.items);
        self.clamp_cursor();
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Key of the item under the cursor, if any.
    pub fn cursor_key(&self) -> Option<ItemKey> {
        self.visible().get(self.cursor).map(|item| item.key)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_cursor();
    }

    /// Active search regex for highlighting. In Search mode it tracks the
    /// input as typed; in Navigate it is the last committed pattern.
    /// Invalid regexes fall back to a literal match.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Visible-list indices whose text matches the active search.
    pub fn match_indices(&self) -> Vec<usize> {
        let Some(re) = self.active_search_re() else {
            return Vec::new();
        };
        self.visible()
            .iter()
            .enumerate()
            .filter(|(_, item)| re.is_match(&item.text))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the cursor to the next/previous match, wrapping.
    pub fn jump_to_match(&mut self, backwards: bool) {
        let matches = self.match_indices();
        if matches.is_empty() {
            return;
        }
        let next = if backwards {
            matches
                .iter()
                .rev()
                .find(|&&i| i < self.cursor)
                .or_else(|| matches.last())
        } else {
            matches
                .iter()
                .find(|&&i| i > self.cursor)
                .or_else(|| matches.first())
        };
        if let Some(&i) = next {
            self.cursor = i;
        }
    }

    /// Re-read the store after an external write (CLI invocation, another
    /// session). Skipped when nothing actually changed, which also covers
    /// the echo of our own persistence writes.
    pub fn reload_from_store(&mut self) {
        let fresh = load_items(&self.store);
        if fresh != self.items {
            self.items = fresh;
            self.clamp_cursor();
            self.status_message = Some("list reloaded from store".to_string());
        }
    }
}

/// Restore session state from .state.json
fn restore_ui_state(app: &mut App) {
    let Some(state) = read_ui_state(app.store.dir()) else {
        return;
    };
    if let Some(filter) = Filter::parse(&state.filter) {
        app.filter = filter;
    }
    app.cursor = state.cursor;
    app.scroll_offset = state.scroll_offset;
    app.last_search = state.last_search;
    app.clamp_cursor();
}

/// Save session state to .state.json
fn save_ui_state(app: &App) {
    let state = UiState {
        filter: app.filter.as_str().to_string(),
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
        last_search: app.last_search.clone(),
    };
    let _ = write_ui_state(app.store.dir(), &state);
}

/// Run the TUI application
pub fn run(store_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let store_dir = resolve_store_dir(store_dir_override);
    std::fs::create_dir_all(&store_dir)?;
    let config = read_config(&store_dir)?;
    let theme = Theme::from_config(&config.ui);

    let store = FileStore::new(&store_dir);
    let persister = Persister::spawn(store_dir.clone());
    let mut app = App::new(store, persister, theme);

    app.load();
    restore_ui_state(&mut app);

    let watcher = StoreWatcher::start(&store_dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Save session state and drain pending writes before exit
    save_ui_state(&app);
    app.persister.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // Debounced session-state save: every ~5 key presses
                    save_counter += 1;
                    if save_counter >= 5 {
                        save_ui_state(app);
                        save_counter = 0;
                    }
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        // External writes only replace the list while it's not being edited
        if let Some(watcher) = watcher
            && watcher.poll()
            && app.mode == Mode::Navigate
        {
            app.reload_from_store();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::item_ops::{add_item, toggle_complete};
    use tempfile::TempDir;

    fn test_app(dir: &std::path::Path) -> App {
        App::new(
            FileStore::new(dir),
            Persister::spawn(dir.to_path_buf()),
            Theme::default(),
        )
    }

    #[test]
    fn load_clears_loading_even_when_payload_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("items.json"), "garbage").unwrap();

        let mut app = test_app(tmp.path());
        assert!(app.loading);
        app.load();
        assert!(!app.loading);
        assert!(app.items.is_empty());
    }

    #[test]
    fn load_clears_loading_on_missing_store() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.load();
        assert!(!app.loading);
        assert!(app.items.is_empty());
    }

    #[test]
    fn commit_updates_display_state_synchronously() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.load();

        app.commit(add_item(&app.items, "one"));
        app.commit(add_item(&app.items, "two"));
        assert_eq!(app.items.len(), 2);
    }

    #[test]
    fn cursor_clamps_when_the_view_shrinks() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.load();

        app.commit(add_item(&app.items, "one"));
        app.commit(add_item(&app.items, "two"));
        app.cursor = 1;

        // Completed view is empty, cursor falls back to 0
        app.set_filter(Filter::Completed);
        assert_eq!(app.cursor, 0);

        app.set_filter(Filter::All);
        let key = app.items[1].key;
        app.cursor = 1;
        app.commit(toggle_complete(&app.items, key, true));
        app.set_filter(Filter::Active);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn search_matches_wrap_in_both_directions() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.load();

        for text in ["alpha", "beta", "almond"] {
            app.commit(add_item(&app.items, text));
        }
        app.last_search = Some("al".to_string());

        assert_eq!(app.match_indices(), vec![0, 2]);

        app.cursor = 0;
        app.jump_to_match(false);
        assert_eq!(app.cursor, 2);
        app.jump_to_match(false);
        assert_eq!(app.cursor, 0);
        app.jump_to_match(true);
        assert_eq!(app.cursor, 2);
    }
}
