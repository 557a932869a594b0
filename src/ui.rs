use crate::api::{ChatApi, ChatOutcome};
use crate::app::App;
use crate::chat_view::draw_chat;
use crate::key_handlers::handle_chat_input;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Sets up the terminal, runs the chat loop, and restores the terminal on
/// the way out.
pub async fn run_ui(mut app: App, api: ChatApi) -> Result<(), Box<dyn Error + Send + Sync>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, api).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The cooperative loop: draw, drain resolved replies, handle one input
/// event per tick. All app mutation happens here; spawned request tasks only
/// report outcomes over the channel, so replies from overlapping submissions
/// are applied in resolution order.
async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: ChatApi,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<ChatOutcome>();
    let tick_rate = Duration::from_millis(80);

    loop {
        terminal.draw(|f| draw_chat(f, app))?;

        while let Ok(outcome) = reply_rx.try_recv() {
            app.resolve_reply(outcome);
        }

        let deadline = Instant::now() + tick_rate;
        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(query) = handle_chat_input(key, app) {
                    dispatch_query(&api, &reply_tx, query);
                }
            }
        }

        if app.should_quit {
            log::info!("quit requested, leaving chat loop");
            return Ok(());
        }
    }
}

/// Fires off one request without blocking the loop. The task is never
/// cancelled; its reply is appended whenever it resolves.
fn dispatch_query(api: &ChatApi, reply_tx: &mpsc::UnboundedSender<ChatOutcome>, query: String) {
    log::debug!("dispatching query: {}", query);
    let api = api.clone();
    let reply_tx = reply_tx.clone();
    tokio::spawn(async move {
        let outcome = api.resolve(&query).await;
        // The receiver only goes away on shutdown.
        let _ = reply_tx.send(outcome);
    });
}
