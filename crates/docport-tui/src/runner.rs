//! Main TUI runner - entry point and event loop

use docport_app::message::Message;
use docport_app::process::process_message;
use docport_app::signals;
use docport_app::state::AppState;
use docport_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        // Pastes still arrive, just as individual key presses
        warn!("{}", e);
    }

    // Channel for messages from outside the terminal (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    info!("TUI started");
    let result = run_loop(&mut term, &mut state, msg_rx);

    terminal::disable_paste();
    ratatui::restore();
    info!("TUI stopped");

    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
