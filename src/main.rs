use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use texteditor::app::Workbench;
use texteditor::kernel::services::adapters::{
    discover_font_families, ensure_settings_file, load_settings_from, KeybindingService,
    LocalFileProvider,
};
use texteditor::kernel::services::ports::Settings;
use texteditor::kernel::AppState;
use texteditor::tui::crossterm::into_input_event;
use texteditor::tui::terminal_guard::{set_window_title, TerminalGuard, TerminationSignal};
use texteditor::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn load_settings() -> Settings {
    match ensure_settings_file() {
        Ok(path) => load_settings_from(&path).unwrap_or_default(),
        Err(err) => {
            tracing::warn!(error = %err, "settings file unavailable, using defaults");
            Settings::default()
        }
    }
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let workspace_dir = std::env::current_dir()?;
    let path_to_open = std::env::args_os().nth(1).map(|arg| {
        let path = PathBuf::from(arg);
        if path.is_absolute() {
            path
        } else {
            workspace_dir.join(path)
        }
    });

    let settings = load_settings();
    let keybindings = KeybindingService::with_rules(&settings.keybindings);
    let families = discover_font_families();
    tracing::info!(families = families.len(), "font families discovered");

    let state = AppState::new(workspace_dir, settings.editor, families)
        .with_file_filters(settings.file_filters);
    let mut workbench = Workbench::new(state, keybindings, Box::new(LocalFileProvider::new()));
    if let Some(path) = path_to_open {
        workbench.open_path(path);
    }

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = texteditor::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let outcome = run(&mut terminal, &mut workbench, &signal_rx);

    drop(terminal);
    drop(guard);

    match outcome {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated by signal");
            std::process::exit(signal.exit_code());
        }
        Ok(None) => {
            tracing::info!("exit");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "terminal loop failed");
            Err(err)
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
            if let Some(pos) = workbench.cursor_position() {
                frame.set_cursor_position(pos);
            }
        })?;

        if let Some(title) = workbench.take_title() {
            if let Err(err) = set_window_title(&title) {
                tracing::warn!(error = %err, "failed to set window title");
            }
        }

        if workbench.should_quit() {
            return Ok(None);
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            let event = into_input_event(crossterm::event::read()?);
            if workbench.handle_input(&event).is_quit() {
                return Ok(None);
            }
        }
    }
}
