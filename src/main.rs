mod app;
mod config;
mod engine;
mod event;
mod logging;
mod session;
mod store;
mod ui;
mod vocab;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use app::{App, AppScreen};
use config::Config;
use engine::progress::ProgressTracker;
use event::{AppEvent, EventHandler};
use session::quiz::{QuizSession, Slot};
use store::ProgressStore;
use store::json_store::JsonStore;
use ui::components::answer_field::AnswerField;
use ui::components::completion::{CompletionBanner, ConfirmRestart};
use ui::components::progress_bar::ProgressBar;
use ui::components::quiz_message::QuizMessage;
use ui::components::verb_card::VerbCard;
use ui::layout::{QuizLayout, centered_rect, pack_hint_lines};
use ui::theme::Theme;
use vocab::Vocabulary;

#[derive(Parser)]
#[command(name = "verbdrill", version, about = "Terminal trainer for English irregular verb forms")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Vocabulary JSON file to quiz instead of the bundled list")]
    vocab: Option<PathBuf>,

    #[arg(short, long, help = "Directory for saved progress and logs")]
    data_dir: Option<PathBuf>,

    #[arg(short, long, help = "Seed for verb selection (reproducible runs)")]
    seed: Option<u64>,

    #[arg(long, help = "Forget all mastered verbs before starting")]
    reset: bool,

    #[arg(long, help = "Write the effective configuration file and exit")]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.vocab {
        config.vocabulary_file = Some(path.to_string_lossy().to_string());
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir.to_string_lossy().to_string();
    }
    config.normalize(&Theme::available_themes());

    if cli.write_config {
        let path = config.save()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let _log_guard = logging::init_logging(&config.data_dir(), &config.log_level);
    if let Some(err) = config_err {
        tracing::warn!(path = %Config::config_path().display(), "ignoring unreadable config: {err:#}");
    }

    let vocab = match config.vocabulary_file.as_deref() {
        Some(path) => Vocabulary::from_path(Path::new(path))
            .with_context(|| format!("failed to load vocabulary from {path}"))?,
        None => Vocabulary::builtin().context("bundled vocabulary is invalid")?,
    };

    let store: Option<Box<dyn ProgressStore>> = match JsonStore::with_base_dir(config.data_dir()) {
        Ok(store) => Some(Box::new(store) as Box<dyn ProgressStore>),
        Err(err) => {
            tracing::warn!(%err, "progress storage unavailable; progress will not be saved");
            None
        }
    };
    let mut progress = ProgressTracker::load(store, &vocab);
    if cli.reset {
        progress.reset();
    }
    tracing::info!(
        verbs = vocab.len(),
        mastered = progress.progress_count(),
        "starting quiz"
    );

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let session = QuizSession::new(vocab, progress);
    let mut app = App::new(session, theme, cli.seed);
    app.start();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("quiz loop failed: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Redraw => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::Complete => handle_complete_key(app, key),
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    // Confirmation dialog takes priority
    if app.confirm_restart {
        match key.code {
            KeyCode::Char('y') => app.restart(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_restart(),
            _ => {}
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.switch_focus(),
        KeyCode::Char('t') if ctrl => app.request_hint(),
        KeyCode::Char('n') if ctrl => app.next_verb(),
        KeyCode::Char('r') if ctrl => app.ask_restart(),
        _ => {
            app.edit_focused(key);
        }
    }
}

fn handle_complete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => app.restart(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Quiz => render_quiz(frame, app),
        AppScreen::Complete => render_complete(frame, app),
    }
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let area = centered_rect(70, 90, frame.area());
    let session = &app.session;

    let footer_lines = pack_hint_lines(&app.quiz_hints(), area.width as usize);

    let layout = QuizLayout::new(area, footer_lines.len() as u16);

    let mut header = vec![
        Span::styled(
            " verbdrill ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Irregular Verbs Challenge",
            Style::default().fg(colors.text_muted()),
        ),
    ];
    if !session.progress().has_store() {
        header.push(Span::styled(
            "  (progress not saved)",
            Style::default().fg(colors.warning()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), layout.header);

    let progress = ProgressBar::new(
        session.mastered_count(),
        session.total_count(),
        session.progress_ratio(),
        app.theme,
    );
    frame.render_widget(progress, layout.progress);

    if let Some(verb) = session.current_verb() {
        frame.render_widget(VerbCard::new(&verb.base, app.theme), layout.verb);
    }

    let (past_area, participle_area) = layout.answer_fields();
    for (slot, field_area) in [
        (Slot::PastSimple, past_area),
        (Slot::PastParticiple, participle_area),
    ] {
        let placeholder = app.placeholder(slot);
        let field = AnswerField::new(slot.label(), app.input(slot), app.theme)
            .feedback(session.feedback(slot))
            .placeholder(&placeholder)
            .focused(app.focus == slot)
            .editable(session.is_editable(slot));
        frame.render_widget(field, field_area);
    }

    frame.render_widget(QuizMessage::new(session, app.theme), layout.message);

    let footer: Vec<Line> = footer_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_muted()))))
        .collect();
    frame.render_widget(Paragraph::new(footer), layout.footer);

    if app.confirm_restart {
        let popup = centered_rect(40, 20, frame.area());
        let popup = ratatui::layout::Rect {
            height: popup.height.min(5),
            y: popup.y + popup.height.saturating_sub(5) / 2,
            ..popup
        };
        frame.render_widget(Clear, popup);
        frame.render_widget(ConfirmRestart::new(session.mastered_count(), app.theme), popup);
    }
}

fn render_complete(frame: &mut ratatui::Frame, app: &App) {
    let area = centered_rect(50, 40, frame.area());
    let banner = CompletionBanner::new(app.session.total_count(), app.theme);
    frame.render_widget(banner, area);
}
