use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepdeck::logging;
use stepdeck::schema::{ContentRegistry, WizardOutline};
use stepdeck::ui::content::{ChoiceContent, InfoContent, TextFormContent};
use stepdeck::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use stepdeck::ui::{WizardResult, WizardScreen};
use stepdeck::{Hierarchy, MainStep, SubStep};

/// Demo wizard for the stepdeck navigation library
#[derive(Parser)]
#[command(name = "stepdeck", version, about)]
struct Cli {
    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Load a wizard outline from a JSON file instead of the built-in demo
    #[arg(long)]
    outline: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = ".stepdeck/logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging_handle = logging::init(cli.debug, Some(&cli.log_dir))?;
    if let Some(path) = &logging_handle.log_file_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let hierarchy = match &cli.outline {
        Some(path) => outline_hierarchy(path)?,
        None => demo_hierarchy()?,
    };

    let completed = run(hierarchy)?;
    if completed {
        println!("Wizard complete.");
    } else {
        println!("Wizard cancelled.");
    }
    Ok(())
}

/// The built-in onboarding wizard: two form sections and a confirmation.
fn demo_hierarchy() -> Result<Hierarchy> {
    let hierarchy = Hierarchy::new(vec![
        MainStep::new(
            "account",
            "Account",
            vec![
                SubStep::new(
                    "email",
                    "Email",
                    TextFormContent::new(
                        "Email",
                        "Enter the address used to sign in.",
                        "you@example.com",
                    ),
                ),
                SubStep::new(
                    "password",
                    "Password",
                    TextFormContent::new(
                        "Password",
                        "Pick something long.",
                        "correct horse battery staple",
                    ),
                ),
            ],
        ),
        MainStep::new(
            "profile",
            "Profile",
            vec![
                SubStep::new(
                    "display_name",
                    "Name",
                    TextFormContent::new("Display name", "Shown to other members.", "Ada"),
                ),
                SubStep::new(
                    "role",
                    "Role",
                    ChoiceContent::new(
                        "What best describes you?",
                        vec![
                            ("Engineer", "Builds the thing"),
                            ("Operator", "Runs the thing"),
                            ("Manager", "Plans the thing"),
                        ],
                    ),
                ),
            ],
        ),
        MainStep::single(
            "confirm",
            "Confirm",
            SubStep::new(
                "review",
                "Review",
                InfoContent::new("Review your answers, then press Enter to finish."),
            ),
        ),
    ])?;
    Ok(hierarchy)
}

/// Load an outline file and bind placeholder content to every sub step.
fn outline_hierarchy(path: &Path) -> Result<Hierarchy> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read outline {}", path.display()))?;
    let outline = WizardOutline::from_json(&raw)?;

    let mut registry = ContentRegistry::new();
    for main in &outline.steps {
        for sub in main.subs.iter() {
            registry = registry.register(
                &sub.name,
                InfoContent::new(format!(
                    "{}\n\nPlaceholder content for step '{}'.",
                    sub.label, sub.name
                )),
            );
        }
    }

    Ok(outline.into_hierarchy(registry)?)
}

/// Run the wizard until completion or cancellation. Returns whether the
/// final step was completed.
fn run(hierarchy: Hierarchy) -> Result<bool> {
    let mut screen = WizardScreen::new("Stepdeck", hierarchy);

    let completed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&completed);
    screen.nav_mut().on_completed(move || flag.set(true));

    install_panic_hook();
    let _guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);
    let finished = loop {
        terminal.draw(|frame| screen.render(frame))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(screen.handle_key(key.code), WizardResult::Quit) {
                        break false;
                    }
                    if completed.get() {
                        break true;
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        screen.handle_mouse(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }
    };

    tracing::info!(completed = finished, "wizard session ended");
    Ok(finished)
}
