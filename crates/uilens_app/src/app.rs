use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use uilens_client::ClientSettings;
use uilens_core::{update, Msg, PanelState};

use crate::effects::EffectRunner;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(settings: ClientSettings) -> Result<()> {
    let terminal = ratatui::init();
    let result = run(terminal, settings);
    ratatui::restore();
    result
}

fn run(mut terminal: DefaultTerminal, settings: ClientSettings) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(settings, msg_tx.clone());

    let mut state = PanelState::new();
    let mut input = String::new();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render(frame, &view))?;
            needs_redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(key, &mut input, &msg_tx) {
                        break;
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        // Drain pending messages, then redraw at most once.
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, pending) = update(std::mem::take(&mut state), msg);
            state = next;
            effects.run(pending);
        }
        if state.consume_dirty() {
            needs_redraw = true;
        }
    }

    Ok(())
}

/// Translates a key press into panel messages. Returns `false` when the key
/// asks to quit.
fn handle_key(key: KeyEvent, input: &mut String, msg_tx: &mpsc::Sender<Msg>) -> bool {
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Enter => {
            let _ = msg_tx.send(Msg::SubmitClicked);
        }
        KeyCode::Backspace => {
            input.pop();
            let _ = msg_tx.send(Msg::InputChanged(input.clone()));
        }
        KeyCode::Char(ch) => {
            input.push(ch);
            let _ = msg_tx.send(Msg::InputChanged(input.clone()));
        }
        _ => {}
    }
    true
}
