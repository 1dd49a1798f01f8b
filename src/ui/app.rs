use crate::config::Config;
use crate::generator::DescriptionService;
use crate::logger::LogBuffer;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Set up the terminal, run the event loop and restore the terminal afterwards.
///
/// The terminal is restored on every exit once raw mode is on, including a
/// failure halfway through setup.
pub async fn run_app(config: &Config, generator: DescriptionService, log_buffer: LogBuffer) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let run = run_in_terminal(config, generator, log_buffer).await;
    settle_session(run, restore_terminal())
}

async fn run_in_terminal(config: &Config, generator: DescriptionService, log_buffer: LogBuffer) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = AppComponent::new(config, generator, log_buffer);
    let mut event_handler = EventHandler::new();

    run_app_loop(&mut terminal, &mut app, &mut event_handler).await
}

/// Leave raw mode and the alternate screen. Safe after a partial setup.
fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show).context("Failed to restore terminal")?;
    Ok(())
}

/// The session error wins over a restore error, which is then only logged
fn settle_session(run: anyhow::Result<()>, restore: anyhow::Result<()>) -> anyhow::Result<()> {
    match run {
        Err(e) => {
            if let Err(restore_error) = restore {
                log::error!("Terminal: restore failed: {:#}", restore_error);
            }
            Err(e)
        }
        Ok(()) => restore,
    }
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    let action = app.update(action);
                    app.handle_app_action(action);
                    needs_render = true;
                }
                if app.on_tick() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_wins_over_restore_error() {
        let result = settle_session(Err(anyhow::anyhow!("terminal setup failed")), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "terminal setup failed");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_run() {
        let result = settle_session(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
        assert!(settle_session(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_restore_without_raw_mode_is_harmless() {
        // Nothing was set up; restoring must not fail on the raw mode side
        assert!(disable_raw_mode().is_ok());
    }
}
