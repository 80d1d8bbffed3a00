use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};
use template_highlight_config::Config;
use template_highlight_engine::{HighlightColor, NodeKind, Palette, RenderNode, markup};

mod app;

use app::App;

/// Shown when no file is given and no template is configured.
const SAMPLE_TEMPLATE: &str = "Hi. {AliasRepName} here. [I'd like to buy/I want to acquire] {PropertyAddress}. \
To make it easy, I [can pay upfront/am willing to pay upfront] and [we can close/we can be done/we can finish] \
[quickly/soon/whenever you want].\n(Any interest)?";

/// Poll interval while no cycle is pending.
const IDLE_POLL: Duration = Duration::from_secs(1);

enum Mode {
    Edit(Option<PathBuf>),
    Html(PathBuf),
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level; output goes to stderr
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let mode = match args.as_slice() {
        [_] => Mode::Edit(None),
        [_, flag, path] if flag == "--html" => Mode::Html(PathBuf::from(path)),
        [_, path] if !path.starts_with('-') => Mode::Edit(Some(PathBuf::from(path))),
        _ => {
            eprintln!("Usage: {} [template-file]", args[0]);
            eprintln!("       {} --html <template-file>", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!(
                "Fix or remove {} to use the defaults",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    match mode {
        Mode::Html(path) => print_html(&path, &config),
        Mode::Edit(path) => edit(path, &config),
    }
}

fn print_html(path: &Path, config: &Config) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let nodes = config.highlighter().highlight(&text);
    println!("{}", markup::render_html(&nodes, &config.palette));
    Ok(())
}

fn edit(path: Option<PathBuf>, config: &Config) -> Result<()> {
    // An explicit file wins; a configured template is loaded without a save path
    let text = match (&path, &config.template_path) {
        (Some(p), _) if p.exists() => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display()))?,
        (Some(_), _) => String::new(),
        (None, Some(t)) => std::fs::read_to_string(t)
            .with_context(|| format!("Failed to read configured template {}", t.display()))?,
        (None, None) => SAMPLE_TEMPLATE.to_string(),
    };

    let mut app = App::new(&text, path, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = app.time_until_cycle(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !handle_key(app, key)?
        {
            return Ok(());
        }

        if app.cycle_due(Instant::now()) {
            app.run_cycle();
        }
    }
}

/// Applies one key press. Returns false when the editor should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Ok(false),
        KeyCode::Char('q') if ctrl => return Ok(false),
        KeyCode::Char('s') if ctrl => {
            if let Err(e) = app.save() {
                log::warn!("{e:#}");
                app.status = format!("{e:#}");
            }
        }
        KeyCode::Char(c) if !ctrl => app.insert(c.encode_utf8(&mut [0; 4])),
        KeyCode::Enter => app.insert("\n"),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.move_left(),
        KeyCode::Right => app.move_right(),
        KeyCode::Home => app.move_line_start(),
        KeyCode::End => app.move_line_end(),
        _ => {}
    }
    Ok(true)
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let text = app.text();
    let lines = match app.nodes() {
        Some(nodes) => styled_lines(nodes, &app.palette),
        None => plain_lines(&text),
    };

    let (row, col) = row_col(&text, app.caret());
    let (scroll, cursor) = viewport(chunks[0], row, col);

    let title = match &app.path {
        Some(p) => p.display().to_string(),
        None => "[sample template]".to_string(),
    };
    let editor = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll(scroll);
    f.render_widget(editor, chunks[0]);
    f.set_cursor_position(cursor);

    let caret_info = match app.node_caret() {
        Some(pos) => format!("node {} +{}", pos.node_index, pos.local_offset),
        None => "highlighting…".to_string(),
    };
    let status = Line::from(vec![
        Span::styled(caret_info, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | Esc/Ctrl-Q: Quit | Ctrl-S: Save | "),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);
}

/// Splits node contents into display lines, keeping each node's style.
fn styled_lines(nodes: &[RenderNode], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for node in nodes {
        let style = match node.kind {
            NodeKind::Plain => Style::default(),
            NodeKind::Highlighted(kind) => Style::default().fg(terminal_color(palette.color_of(kind))),
        };
        for (i, piece) in node.content.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !piece.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push_span(Span::styled(piece.to_string(), style));
            }
        }
    }
    lines
}

fn plain_lines(text: &str) -> Vec<Line<'static>> {
    text.split('\n').map(|l| Line::from(l.to_string())).collect()
}

fn terminal_color(color: HighlightColor) -> Color {
    match color {
        HighlightColor::Green => Color::Green,
        HighlightColor::Blue => Color::Blue,
        HighlightColor::Red => Color::Red,
        HighlightColor::Yellow => Color::Yellow,
        HighlightColor::Magenta => Color::Magenta,
        HighlightColor::Cyan => Color::Cyan,
    }
}

/// Scroll offsets `(rows, cols)` and the cursor cell that keep the caret at
/// `(row, col)` inside the bordered interior of `area`.
fn viewport(area: Rect, row: usize, col: usize) -> ((u16, u16), (u16, u16)) {
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    let scroll_row = row.saturating_sub(area.height.saturating_sub(2).saturating_sub(1));
    let scroll_col = col.saturating_sub(area.width.saturating_sub(2).saturating_sub(1));
    let cursor = (
        area.x.saturating_add(1).saturating_add(col - scroll_col),
        area.y.saturating_add(1).saturating_add(row - scroll_row),
    );
    ((scroll_row, scroll_col), cursor)
}

/// Row and column (in chars) of a byte offset.
fn row_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count());
    (row, col)
}
