mod pane;
mod render;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use docpane_config::Config;
use docpane_engine::{
    AnchorNavigator, CatalogEntry, CatalogOptions, CatalogResolver, DirectorySource,
    DocumentViewer, FAILED_TO_LOAD, LoadState, Location, NavigatorOptions, ScrollBehavior,
    SelectOutcome, ViewerOptions, io,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    fs::File,
    io::stdout,
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::Duration,
};

use pane::{PaneHost, SystemClipboard};
use render::render_blocks;

/// Idle time between input polls, which lets scheduled scrolls run.
const FRAME: Duration = Duration::from_millis(33);

struct App {
    viewer: DocumentViewer<DirectorySource>,
    host: PaneHost,
    docs_root: PathBuf,
    documents: Arc<[CatalogEntry]>,
    list_state: ListState,
    header_offset: usize,
    status: String,
}

impl App {
    async fn new(
        viewer: DocumentViewer<DirectorySource>,
        host: PaneHost,
        docs_root: PathBuf,
    ) -> Self {
        let documents = viewer.documents().await;
        let header_offset = viewer.navigator().options().header_offset.max(0.0) as usize;
        Self {
            viewer,
            host,
            docs_root,
            documents,
            list_state: ListState::default(),
            header_offset,
            status: String::new(),
        }
    }

    async fn open(&mut self, id: &str) {
        if let Some(index) = self.documents.iter().position(|e| e.id() == id) {
            self.list_state.select(Some(index));
        }
        match self.viewer.select(id).await {
            SelectOutcome::Applied => self.refresh(),
            SelectOutcome::Superseded => {}
            SelectOutcome::UnknownDocument => self.status = format!("No document '{id}'"),
        }
    }

    async fn open_default(&mut self) {
        match self.documents.first().map(|e| e.id().to_string()) {
            Some(id) => self.open(&id).await,
            None => self.status = "No documents found".to_string(),
        }
    }

    async fn next_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.documents.len(),
            None => 0,
        };
        self.switch_to(i).await;
    }

    async fn previous_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.documents.len() - 1,
            Some(i) => i - 1,
        };
        self.switch_to(i).await;
    }

    /// Picking from the list starts the document at its top.
    async fn switch_to(&mut self, index: usize) {
        let Some(id) = self.documents.get(index).map(|e| e.id().to_string()) else {
            return;
        };
        self.viewer.navigator().set_fragment("");
        self.open(&id).await;
    }

    fn refresh(&mut self) {
        match self.viewer.state() {
            LoadState::Ready(loaded) => {
                let url = file_url(&self.docs_root, loaded.entry.filename());
                self.host.lock().show(render_blocks(&loaded.doc.blocks), url);
                self.status = loaded.entry.title().to_string();
            }
            LoadState::Failed { entry, reason } => {
                self.host.lock().show_message(vec![
                    FAILED_TO_LOAD.to_string(),
                    String::new(),
                    reason.clone(),
                ]);
                self.status = format!("{}: {reason}", entry.filename());
            }
            LoadState::Loading { .. } | LoadState::Idle => {}
        }
    }

    fn next_heading(&mut self) {
        let next = self
            .host
            .lock()
            .next_heading(self.header_offset)
            .map(str::to_string);
        if let Some(id) = next {
            self.viewer.navigator().follow_link(&format!("#{id}"));
            self.status = format!("#{id}");
        }
    }

    fn copy_permalink(&mut self) {
        let Some(anchor) = self.host.fragment().filter(|f| !f.is_empty()) else {
            self.status = "No heading selected; press Tab to pick one".to_string();
            return;
        };
        let copy = self
            .viewer
            .navigator()
            .copy_permalink(&anchor, &SystemClipboard);
        self.status = if copy.copied {
            format!("Copied {}", copy.url)
        } else {
            format!("Clipboard unavailable: {}", copy.url)
        };
    }

    fn scroll_page(&mut self, direction: isize) {
        let mut pane = self.host.lock();
        let page = pane.height().max(1) as isize;
        pane.scroll_by(direction * page);
    }
}

/// The config remembered after a first run: the docs folder made absolute so
/// later runs work from any directory.
fn first_run_config(config: &Config) -> Config {
    let mut saved = config.clone();
    if let Ok(absolute) = config.docs_path.canonicalize() {
        saved.docs_path = absolute;
    }
    saved
}

fn file_url(docs_root: &Path, filename: &str) -> String {
    format!("file://{}/{}", docs_root.display(), filename)
}

/// Splits `id#anchor`; either side may be missing.
fn parse_target(target: &str) -> (Option<&str>, Option<&str>) {
    let (id, anchor) = match target.split_once('#') {
        Some((id, anchor)) => (id, Some(anchor)),
        None => (target, None),
    };
    (
        Some(id).filter(|s| !s.is_empty()),
        anchor.filter(|s| !s.is_empty()),
    )
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)?;
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Determine docs path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() > 3 {
        eprintln!("Usage: {} [docs-folder-path] [doc-id#anchor]", args[0]);
        process::exit(1);
    }

    let loaded = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <docs-folder-path>", args[0]);
            process::exit(1);
        }
    };

    let first_run = loaded.is_none();
    let (config, from_config) = match (args.get(1), loaded) {
        (Some(path), Some(mut config)) => {
            config.docs_path = PathBuf::from(path);
            (config, false)
        }
        (Some(path), None) => (Config::new(path), false),
        (None, Some(config)) => (config, true),
        (None, None) => {
            eprintln!("Error: No docs path provided and no config file found");
            eprintln!("Usage: {} <docs-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    // Validate docs directory using engine
    if let Err(e) = io::validate_docs_dir(&config.docs_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Docs path '{}'{} is invalid: {e}",
            config.docs_path.display(),
            source
        );
        process::exit(1);
    }

    let log_path = config.log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Warning: cannot write log file '{}': {e}", log_path.display());
    }
    log::info!("Serving docs from {}", config.docs_path.display());

    if first_run {
        match first_run_config(&config).save() {
            Ok(()) => log::info!("Created config file at {}", config_path.display()),
            Err(e) => log::warn!("Failed to create config file: {e}"),
        }
    }

    let target = args.get(2).map(|t| parse_target(t)).unwrap_or((None, None));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime.block_on(async {
        let mut app = build_app(&config).await;
        if let Some(anchor) = target.1 {
            app.viewer.navigator().set_fragment(anchor);
        }
        app.viewer.mount();
        match target.0 {
            Some(id) => app.open(id).await,
            None => app.open_default().await,
        }
        run_app(&mut terminal, &mut app).await
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        println!("{err:?}");
    }

    Ok(())
}

async fn build_app(config: &Config) -> App {
    let docs_root = config
        .docs_path
        .canonicalize()
        .unwrap_or_else(|_| config.docs_path.clone());
    let host = PaneHost::new();

    let navigation = &config.navigation;
    let navigator = AnchorNavigator::new(
        Arc::new(host.clone()),
        Arc::new(host.clone()),
        NavigatorOptions {
            header_offset: navigation.header_offset,
            mount_delay: navigation.mount_delay(),
            fragment_delay: navigation.fragment_delay(),
            content_delay: navigation.content_delay(),
            behavior: ScrollBehavior::Instant,
        },
    );
    let catalog = CatalogResolver::new(
        Arc::new(DirectorySource::new(&docs_root)),
        CatalogOptions {
            cache_ttl: config.catalog.cache_ttl(),
            primary_document: config.catalog.primary_document.clone(),
        },
    );
    let viewer = DocumentViewer::new(catalog, navigator, ViewerOptions::default());

    App::new(viewer, host, docs_root).await
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::ZERO)? {
            tokio::time::sleep(FRAME).await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_document().await,
                KeyCode::Up | KeyCode::Char('k') => app.previous_document().await,
                KeyCode::Tab => app.next_heading(),
                KeyCode::Char('y') => app.copy_permalink(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(1),
                KeyCode::PageUp => app.scroll_page(-1),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // Document list panel
    let items: Vec<ListItem> = app
        .documents
        .iter()
        .map(|entry| ListItem::new(Line::from(Span::raw(entry.title().to_string()))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Documentation"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Content panel; the border takes two rows
    let content_text = {
        let mut pane = app.host.lock();
        pane.set_height(chunks[1].height.saturating_sub(2) as usize);
        if app.viewer.state().is_loading() {
            vec![Line::from("Loading...")]
        } else {
            pane.visible_lines()
        }
    };
    let title = app
        .viewer
        .state()
        .entry()
        .map(|e| e.filename().to_string())
        .unwrap_or_else(|| "Content".to_string());

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(content, chunks[1]);

    let status = Paragraph::new(Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::Cyan),
    )));
    f.render_widget(status, rows[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Tab: Next heading | y: Copy link | PgUp/PgDn: Scroll"),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[2]);
}
