use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::time::{Duration, Instant};

use liftlog::catalog::Catalog;
use liftlog::session::{ScreenKind, WorkoutSessionMachine};

use crossterm::event::{self, KeyCode, KeyEvent};
use ratatui::{
    DefaultTerminal,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};

#[derive(Parser, Debug)]
#[command(version, about = "liftlog - workout session tracker", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive workout session
    Interactive {
        /// Path to a catalog JSON file to use instead of the built-in one
        #[arg(long)]
        catalog: Option<std::path::PathBuf>,
    },
    /// Print the built-in exercise catalog
    Catalog {
        #[arg(short, long)]
        verbose: bool,
        /// Emit the catalog as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

enum InputMode {
    Normal,
    /// Typing a name for a custom exercise on the exercise list.
    NamingExercise,
    /// Typing a new name for the exercise on the detail screen.
    RenamingExercise,
}

/// Which of the two active-set fields keystrokes edit.
#[derive(PartialEq)]
enum Field {
    Weight,
    Reps,
}

struct App {
    machine: WorkoutSessionMachine,
    selected: usize,
    status_message: String,
    input_mode: InputMode,
    input_buffer: String,
    field: Field,
    last_tick: Instant,
}

const SELECTION_KEYS: &str = "j/k: navigate | Enter: select | t: today's pick | q: quit";
const LIST_KEYS: &str =
    "j/k: navigate | Enter: start | +/-: sets | J/K: move | e: edit | n: custom | x: end | q: quit";
const DETAIL_KEYS: &str = "j/k: navigate | a: add set | d: remove set | r: rename | Enter: save";
const ACTIVE_KEYS: &str =
    "type: edit field | Tab: weight/reps | Enter: log set | s: skip rest | +/-: rest | b: back | x: end";

impl App {
    fn new(catalog: Catalog) -> Self {
        Self {
            machine: WorkoutSessionMachine::new(catalog),
            selected: 0,
            status_message: SELECTION_KEYS.to_string(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            field: Field::Weight,
            last_tick: Instant::now(),
        }
    }

    fn list_len(&self) -> usize {
        match self.machine.screen() {
            ScreenKind::Selection => self.machine.catalog().groups.len(),
            ScreenKind::ExerciseList | ScreenKind::ActiveWorkout => self
                .machine
                .workout()
                .map(|w| w.exercises.len())
                .unwrap_or(0),
            ScreenKind::ExerciseDetail => {
                self.machine.draft().map(|d| d.sets.len()).unwrap_or(0)
            }
        }
    }

    fn scroll_down(&mut self) {
        let len = self.list_len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    fn scroll_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn sync_status(&mut self) {
        self.status_message = match self.machine.screen() {
            ScreenKind::Selection => SELECTION_KEYS,
            ScreenKind::ExerciseList => LIST_KEYS,
            ScreenKind::ExerciseDetail => DETAIL_KEYS,
            ScreenKind::ActiveWorkout => ACTIVE_KEYS,
        }
        .to_string();
    }

    /// The machine owns the input strings; keystrokes rebuild them.
    fn edit_active_field(&mut self, key: KeyCode) {
        let Some(active) = self.machine.active_set() else {
            return;
        };
        let mut weight = active.weight_input.clone();
        let mut reps = active.reps_input.clone();
        let buffer = match self.field {
            Field::Weight => &mut weight,
            Field::Reps => &mut reps,
        };
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            _ => return,
        }
        self.machine.set_inputs(&weight, &reps);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Interactive { catalog } => {
            let catalog = match catalog {
                Some(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading catalog {}", path.display()))?;
                    Catalog::from_json(&json)?
                }
                None => Catalog::builtin(),
            };
            let terminal = ratatui::init();
            let result = run_app(terminal, catalog);
            ratatui::restore();
            result
        }
        Commands::Catalog { verbose, json } => print_catalog(verbose, json),
    }
}

fn print_catalog(verbose: bool, json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    for group in &catalog.groups {
        println!(
            "{} ({} exercises, last workout {})",
            group.name,
            group.exercises.len(),
            group.last_workout
        );
        if verbose {
            for exercise in &group.exercises {
                println!("\t{}", exercise);
                println!("\t\t{}", exercise.instructions);
            }
            println!("\tTip: {}", group.next_suggestion);
        }
    }
    Ok(())
}

fn run_app(mut terminal: DefaultTerminal, catalog: Catalog) -> Result<()> {
    let mut app = App::new(catalog);

    loop {
        terminal.draw(|frame| {
            let chunks = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

            // Header
            let title = match app.machine.workout() {
                Some(workout) => format!("liftlog - {}", workout.group_name),
                None => "liftlog - Select Muscle Group".to_string(),
            };
            let header = Paragraph::new(title)
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, chunks[0]);

            match app.machine.screen() {
                ScreenKind::Selection => draw_selection(frame, chunks[1], &app),
                ScreenKind::ExerciseList => draw_exercise_list(frame, chunks[1], &app),
                ScreenKind::ExerciseDetail => draw_detail(frame, chunks[1], &app),
                ScreenKind::ActiveWorkout => draw_active(frame, chunks[1], &app),
            }

            // Footer with status
            let footer = Paragraph::new(app.status_message.as_str())
                .style(Style::default().fg(Color::White))
                .block(Block::default().borders(Borders::ALL).title("Status"));
            frame.render_widget(footer, chunks[2]);
        })?;

        // Drive the two periodic sub-processes at ~1 Hz regardless of how
        // often keys arrive.
        if app.last_tick.elapsed() >= Duration::from_secs(1) {
            app.machine.tick_second();
            app.machine.refresh_elapsed(Utc::now());
            app.last_tick = Instant::now();
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let event::Event::Key(key) = event::read()? {
            if handle_key(&mut app, key) {
                return Ok(());
            }
        }
    }
}

/// Returns true when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::NamingExercise | InputMode::RenamingExercise => match key.code {
            KeyCode::Enter => {
                match app.input_mode {
                    InputMode::NamingExercise => {
                        app.machine.add_custom_exercise(&app.input_buffer, "", 3, None);
                    }
                    InputMode::RenamingExercise => {
                        let name = app.input_buffer.clone();
                        app.machine.draft_set_name(&name);
                    }
                    InputMode::Normal => unreachable!(),
                }
                app.input_mode = InputMode::Normal;
                app.input_buffer.clear();
                app.sync_status();
            }
            KeyCode::Esc => {
                app.input_mode = InputMode::Normal;
                app.input_buffer.clear();
                app.sync_status();
            }
            KeyCode::Char(c) => app.input_buffer.push(c),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            _ => {}
        },
        InputMode::Normal => match app.machine.screen() {
            ScreenKind::Selection => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return true,
                KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    app.machine.start_todays_recommendation();
                    app.selected = 0;
                    app.sync_status();
                }
                KeyCode::Enter => {
                    let group_id = app
                        .machine
                        .catalog()
                        .groups
                        .get(app.selected)
                        .map(|g| g.id.clone());
                    if let Some(group_id) = group_id {
                        app.machine.select_muscle_group(&group_id);
                        app.selected = 0;
                        app.sync_status();
                    }
                }
                _ => {}
            },
            ScreenKind::ExerciseList => match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
                KeyCode::Char('J') => {
                    let from = app.selected;
                    if from + 1 < app.list_len() {
                        app.machine.reorder_exercises(from, from + 1);
                        app.selected = from + 1;
                    }
                }
                KeyCode::Char('K') => {
                    let from = app.selected;
                    if from > 0 {
                        app.machine.reorder_exercises(from, from - 1);
                        app.selected = from - 1;
                    }
                }
                KeyCode::Char('+') | KeyCode::Char('-') => {
                    let delta = if key.code == KeyCode::Char('+') { 1 } else { -1 };
                    let exercise_id = app
                        .machine
                        .workout()
                        .and_then(|w| w.exercises.get(app.selected))
                        .map(|e| e.exercise.id.clone());
                    if let Some(exercise_id) = exercise_id {
                        app.machine.adjust_set_count(&exercise_id, delta);
                    }
                }
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    app.machine.edit_exercise_details(app.selected);
                    app.selected = 0;
                    app.sync_status();
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    app.input_mode = InputMode::NamingExercise;
                    app.input_buffer.clear();
                    app.status_message =
                        "Enter exercise name (Enter to add, Esc to cancel):".to_string();
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    app.machine.end_workout();
                    app.selected = 0;
                    app.sync_status();
                }
                KeyCode::Enter => {
                    app.machine.start_exercise(app.selected);
                    app.field = Field::Weight;
                    app.sync_status();
                }
                _ => {}
            },
            ScreenKind::ExerciseDetail => match key.code {
                KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
                KeyCode::Char('a') | KeyCode::Char('A') => app.machine.draft_add_set(),
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    app.machine.draft_remove_set(app.selected as u32 + 1);
                    let len = app.list_len();
                    if len > 0 && app.selected >= len {
                        app.selected = len - 1;
                    }
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    app.input_mode = InputMode::RenamingExercise;
                    app.input_buffer.clear();
                    app.status_message =
                        "Enter new name (Enter to apply, Esc to cancel):".to_string();
                }
                KeyCode::Enter => {
                    app.machine.save_exercise_details();
                    app.selected = 0;
                    app.sync_status();
                }
                KeyCode::Esc => {
                    app.machine.back_to_list();
                    app.selected = 0;
                    app.sync_status();
                }
                _ => {}
            },
            ScreenKind::ActiveWorkout => match key.code {
                KeyCode::Tab => {
                    app.field = match app.field {
                        Field::Weight => Field::Reps,
                        Field::Reps => Field::Weight,
                    };
                }
                KeyCode::Enter => {
                    if app.machine.log_set() {
                        app.field = Field::Weight;
                    } else {
                        app.status_message =
                            "Set not logged: fill weight and reps first".to_string();
                    }
                }
                KeyCode::Char('s') | KeyCode::Char('S') => app.machine.skip_rest(),
                KeyCode::Char('+') => app.machine.adjust_rest_timer(15),
                KeyCode::Char('-') => app.machine.adjust_rest_timer(-15),
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    app.machine.back_to_list();
                    app.selected = 0;
                    app.sync_status();
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    app.machine.end_workout();
                    app.selected = 0;
                    app.sync_status();
                }
                code => app.edit_active_field(code),
            },
        },
    }
    false
}

fn draw_selection(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let items: Vec<ListItem> = app
        .machine
        .catalog()
        .groups
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let content = format!(
                "{} - {} exercises, last workout {} ({})",
                group.name,
                group.exercises.len(),
                group.last_workout,
                group.next_suggestion
            );
            let style = if idx == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Muscle Groups"),
    );
    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_exercise_list(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let Some(workout) = app.machine.workout() else {
        return;
    };
    let items: Vec<ListItem> = workout
        .exercises
        .iter()
        .enumerate()
        .map(|(idx, session_exercise)| {
            let done = workout.completed_count(&session_exercise.exercise.id);
            let content = format!(
                "{} - {}/{} sets done",
                session_exercise.exercise.name, done, session_exercise.current_sets
            );
            let style = if idx == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if done >= session_exercise.current_sets {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let title = format!(
        "Exercises | {} sets, {:.0} kg total, {} min",
        workout.stats.total_sets, workout.stats.total_weight, workout.stats.elapsed_minutes
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_detail(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let Some(draft) = app.machine.draft() else {
        return;
    };
    let items: Vec<ListItem> = draft
        .sets
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let content = format!(
                "Set {}: {:.1} kg x {} reps",
                entry.number, entry.weight, entry.reps
            );
            let style = if idx == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Editing: {}", draft.name)),
    );
    let mut list_state = ListState::default();
    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_active(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let (Some(workout), Some(active), Some(rest)) = (
        app.machine.workout(),
        app.machine.active_set(),
        app.machine.rest_timer(),
    ) else {
        return;
    };
    let Some(session_exercise) = workout.exercise(&active.exercise_id) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .split(area);

    let weight_marker = if app.field == Field::Weight { ">" } else { " " };
    let reps_marker = if app.field == Field::Reps { ">" } else { " " };
    let mut lines = vec![
        Line::from(format!(
            "{} - Set {}/{}",
            session_exercise.exercise.name, active.set_number, session_exercise.current_sets
        )),
        Line::from(session_exercise.exercise.instructions.clone()),
        Line::from(format!("{weight_marker} Weight: {}", active.weight_input)),
        Line::from(format!("{reps_marker} Reps:   {}", active.reps_input)),
    ];
    if let Some(flash) = app.machine.pr_flash() {
        lines.push(
            Line::from(format!(
                "NEW PERSONAL RECORD: {} at {:.1} kg!",
                flash.exercise_name, flash.weight
            ))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
    let exercise_panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Current Exercise"),
    );
    frame.render_widget(exercise_panel, chunks[0]);

    let rest_label = if rest.active {
        format!("Rest: {}:{:02}", rest.remaining_secs / 60, rest.remaining_secs % 60)
    } else {
        "Rest timer idle".to_string()
    };
    let ratio = f64::from(rest.remaining_secs) / f64::from(liftlog::session::REST_DEFAULT_SECS);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Rest"))
        .gauge_style(Style::default().fg(if rest.active {
            Color::Yellow
        } else {
            Color::DarkGray
        }))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(rest_label);
    frame.render_widget(gauge, chunks[1]);

    let stats = Paragraph::new(format!(
        "Session: {} sets | {:.0} kg moved | {} min elapsed",
        workout.stats.total_sets, workout.stats.total_weight, workout.stats.elapsed_minutes
    ))
    .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, chunks[2]);
}
