use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{IsTerminal, stdin, stdout};
use std::path::{Path, PathBuf};

use mojicount::app::{App, OutputMode};
use mojicount::config::{self, ConfigResult, Language};
use mojicount::input::{FileLoader, loader};
use mojicount::measure;
use mojicount::report::{self, ReportFormat};

/// Character, line and byte counter for text
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Count characters, lines and bytes of text, live in the terminal"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin when piped)
    input: Option<PathBuf>,

    /// Print the stats and exit without opening the TUI
    #[arg(short, long)]
    print: bool,

    /// Report format for --print and Ctrl+Q
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Label language, overrides the config file
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Start with live update off (count with Ctrl+R)
    #[arg(long)]
    manual: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/mojicount-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/mojicount-debug.log")
            .expect("Failed to open /tmp/mojicount-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== MOJICOUNT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let ConfigResult {
        mut config,
        warning,
    } = config::load_config();

    let args = Args::parse();

    if let Some(language) = args.lang {
        config.display.language = language;
    }
    if args.manual {
        config.counting.live_update = false;
    }

    if args.print {
        if let Some(warning) = &warning {
            eprintln!("Warning: {}", warning);
        }
        return print_report(args.input.as_deref(), args.format, config.display.language);
    }

    let terminal = init_terminal()?;

    // Deferred loading prevents blocking on large files/stdin
    let app = match args.input {
        Some(path) => App::new_with_loader(FileLoader::spawn_load(path), &config),
        None if !stdin().is_terminal() => {
            App::new_with_loader(FileLoader::spawn_load_stdin(), &config)
        }
        None => App::new(String::new(), &config),
    };

    let result = run(terminal, app, warning);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app, args.format);

    #[cfg(debug_assertions)]
    log::debug!("=== MOJICOUNT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Measure the file or piped stdin and print the report without a TUI
fn print_report(input: Option<&Path>, format: ReportFormat, language: Language) -> Result<()> {
    let text = match input {
        Some(path) => loader::read_file(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None if stdin().is_terminal() => String::new(),
        None => loader::read_stdin().wrap_err("Failed to read stdin")?,
    };

    print!("{}", report::render(&measure(&text), format, language));
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<App> {
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render to load data from background thread
        app.poll_file_loader();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App, format: ReportFormat) {
    match app.output_mode() {
        Some(OutputMode::Report) => {
            print!("{}", report::render(app.stats.display(), format, app.language));
        }
        None => {
            // No output mode (exited with Ctrl+C)
        }
    }
}
