use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cyclelog_core::*;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "cyclelog")]
#[command(about = "Hybrid athlete workout tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit today's session context
    Session {
        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Training week (1-based)
        #[arg(long)]
        week: Option<String>,

        /// Day type (push, pull, legs, rings, core, recovery)
        #[arg(long)]
        day: Option<String>,

        /// Hours of sleep
        #[arg(long)]
        sleep: Option<String>,

        /// Energy rating 1-5
        #[arg(long)]
        energy: Option<u8>,

        /// Soreness rating 1-5
        #[arg(long)]
        soreness: Option<u8>,

        /// Stress rating 1-5
        #[arg(long)]
        stress: Option<u8>,

        /// Motivation rating 1-5
        #[arg(long)]
        motivation: Option<u8>,

        /// Ready to train (yes/no)
        #[arg(long)]
        ready: Option<String>,

        /// Session notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Log an exercise / block against the current session
    Add {
        /// Exercise name (required for the entry to be accepted)
        exercise: Option<String>,

        /// Category (strength, skill, rope, core, mobility, recovery)
        #[arg(long)]
        category: Option<String>,

        /// Side (both, left, right)
        #[arg(long)]
        side: Option<String>,

        #[arg(long)]
        sets: Option<String>,

        #[arg(long)]
        reps: Option<String>,

        /// Weight or assistance (kg or %BW, free text)
        #[arg(long)]
        weight: Option<String>,

        /// Rate of perceived exertion 1-10
        #[arg(long)]
        rpe: Option<String>,

        /// Hold time in seconds
        #[arg(long)]
        hold: Option<String>,

        /// Tempo / notes
        #[arg(long)]
        tempo: Option<String>,

        /// Rope weight (half, one)
        #[arg(long)]
        rope_weight: Option<String>,

        /// Rope protocol (primer, conditioning, finisher, recovery)
        #[arg(long)]
        protocol: Option<String>,

        /// Rope work interval in seconds
        #[arg(long)]
        work: Option<String>,

        /// Rope rest interval in seconds
        #[arg(long)]
        rest: Option<String>,

        /// Rope rounds
        #[arg(long)]
        rounds: Option<String>,

        #[arg(long)]
        core_focus: Option<String>,

        /// Mobility block length in minutes
        #[arg(long)]
        mobility: Option<String>,

        /// Flag pain / a niggle on this block
        #[arg(long)]
        pain: bool,

        #[arg(long)]
        pain_area: Option<String>,

        #[arg(long)]
        pain_notes: Option<String>,
    },

    /// Remove a logged entry by id
    Remove {
        /// Entry id (UUID)
        id: String,
    },

    /// Show the entry log
    Log {
        /// Only entries for this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Quick summary per exercise (latest performance first)
    Exercises,

    /// Cycle dashboard: per-week training summary
    Cycle,

    /// Show or update long-term goals
    Goals {
        #[command(subcommand)]
        command: Option<GoalCommands>,
    },

    /// Export the full entry log to CSV
    Export {
        /// Output path (default: <data-dir>/entries.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// List all goals
    List,

    /// Update one field of a goal
    Set {
        /// Goal id
        id: u32,

        #[arg(long)]
        baseline: Option<String>,

        #[arg(long)]
        mid_point: Option<String>,

        #[arg(long)]
        end_result: Option<String>,

        /// Mark achieved (yes/no)
        #[arg(long)]
        achieved: Option<String>,
    },
}

fn main() -> Result<()> {
    cyclelog_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let snapshot_path = data_dir.join("tracker.json");

    match cli.command {
        Commands::Session {
            date,
            week,
            day,
            sleep,
            energy,
            soreness,
            stress,
            motivation,
            ready,
            notes,
        } => cmd_session(
            &snapshot_path,
            SessionEdits {
                date,
                week,
                day,
                sleep,
                energy,
                soreness,
                stress,
                motivation,
                ready,
                notes,
            },
        ),
        Commands::Add {
            exercise,
            category,
            side,
            sets,
            reps,
            weight,
            rpe,
            hold,
            tempo,
            rope_weight,
            protocol,
            work,
            rest,
            rounds,
            core_focus,
            mobility,
            pain,
            pain_area,
            pain_notes,
        } => cmd_add(
            &snapshot_path,
            DraftEdits {
                exercise,
                category,
                side,
                sets,
                reps,
                weight,
                rpe,
                hold,
                tempo,
                rope_weight,
                protocol,
                work,
                rest,
                rounds,
                core_focus,
                mobility,
                pain,
                pain_area,
                pain_notes,
            },
        ),
        Commands::Remove { id } => cmd_remove(&snapshot_path, &id),
        Commands::Log { date } => cmd_log(&snapshot_path, date),
        Commands::Exercises => cmd_exercises(&snapshot_path),
        Commands::Cycle => cmd_cycle(&snapshot_path, &config),
        Commands::Goals { command } => cmd_goals(&snapshot_path, command),
        Commands::Export { out } => cmd_export(&snapshot_path, out.unwrap_or_else(|| data_dir.join("entries.csv"))),
    }
}

struct SessionEdits {
    date: Option<String>,
    week: Option<String>,
    day: Option<String>,
    sleep: Option<String>,
    energy: Option<u8>,
    soreness: Option<u8>,
    stress: Option<u8>,
    motivation: Option<u8>,
    ready: Option<String>,
    notes: Option<String>,
}

impl SessionEdits {
    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.week.is_none()
            && self.day.is_none()
            && self.sleep.is_none()
            && self.energy.is_none()
            && self.soreness.is_none()
            && self.stress.is_none()
            && self.motivation.is_none()
            && self.ready.is_none()
            && self.notes.is_none()
    }
}

fn cmd_session(snapshot_path: &std::path::Path, edits: SessionEdits) -> Result<()> {
    let state = if edits.is_empty() {
        TrackerState::load(snapshot_path)?
    } else {
        TrackerState::update(snapshot_path, |state| {
            apply_session_edits(&mut state.session, &edits);
            Ok(())
        })?
    };

    let session = &state.session;
    println!("Session for {}", session.date);
    println!("  Week:       {}", session.week_number());
    println!("  Day:        {}", session.day_type.label());
    println!("  Sleep:      {} hrs", session.sleep);
    println!("  Energy:     {}/5", session.energy);
    println!("  Soreness:   {}/5", session.soreness);
    println!("  Stress:     {}/5", session.stress);
    println!("  Motivation: {}/5", session.motivation);
    println!("  Ready:      {}", if session.ready { "yes" } else { "no" });
    if !session.notes.is_empty() {
        println!("  Notes:      {}", session.notes);
    }
    Ok(())
}

fn apply_session_edits(session: &mut SessionContext, edits: &SessionEdits) {
    if let Some(ref raw) = edits.date {
        match raw.parse::<NaiveDate>() {
            Ok(date) => session.date = date,
            Err(_) => eprintln!("Invalid date '{}', keeping {}", raw, session.date),
        }
    }
    if let Some(ref week) = edits.week {
        session.week = week.clone();
    }
    if let Some(ref day) = edits.day {
        match DayType::from_token(day) {
            Some(day_type) => session.day_type = day_type,
            None => eprintln!("Unknown day type '{}', keeping {}", day, session.day_type.label()),
        }
    }
    if let Some(ref sleep) = edits.sleep {
        session.sleep = sleep.clone();
    }
    if let Some(energy) = edits.energy {
        session.energy = energy;
    }
    if let Some(soreness) = edits.soreness {
        session.soreness = soreness;
    }
    if let Some(stress) = edits.stress {
        session.stress = stress;
    }
    if let Some(motivation) = edits.motivation {
        session.motivation = motivation;
    }
    if let Some(ref ready) = edits.ready {
        session.ready = matches!(ready.to_lowercase().as_str(), "yes" | "y" | "true");
    }
    if let Some(ref notes) = edits.notes {
        session.notes = notes.clone();
    }
}

struct DraftEdits {
    exercise: Option<String>,
    category: Option<String>,
    side: Option<String>,
    sets: Option<String>,
    reps: Option<String>,
    weight: Option<String>,
    rpe: Option<String>,
    hold: Option<String>,
    tempo: Option<String>,
    rope_weight: Option<String>,
    protocol: Option<String>,
    work: Option<String>,
    rest: Option<String>,
    rounds: Option<String>,
    core_focus: Option<String>,
    mobility: Option<String>,
    pain: bool,
    pain_area: Option<String>,
    pain_notes: Option<String>,
}

fn cmd_add(snapshot_path: &std::path::Path, edits: DraftEdits) -> Result<()> {
    let mut state = TrackerState::load(snapshot_path)?;

    apply_draft_edits(&mut state.draft, &edits);

    match commit_entry(&mut state.draft, &state.session) {
        Commit::Logged(entry) => {
            let id = entry.id;
            let exercise = entry.exercise.clone();
            state.entries.append(entry);
            state.save(snapshot_path)?;
            println!("Logged {} ({})", exercise, id);
            println!("  {} entries total", state.entries.len());
        }
        Commit::EmptyExercise => {
            // No mutation happened; nothing to save
            println!("Nothing logged: exercise name is empty.");
        }
    }

    Ok(())
}

fn apply_draft_edits(draft: &mut EntryDraft, edits: &DraftEdits) {
    // Fresh exercise name each time; the previous one never sticks
    draft.exercise = edits.exercise.clone().unwrap_or_default();

    if let Some(ref token) = edits.category {
        match Category::from_token(token) {
            Some(category) => draft.category = category,
            None => eprintln!("Unknown category '{}', keeping {}", token, draft.category.label()),
        }
    }
    if let Some(ref token) = edits.side {
        match Side::from_token(token) {
            Some(side) => draft.side = side,
            None => eprintln!("Unknown side '{}'", token),
        }
    }
    if let Some(ref sets) = edits.sets {
        draft.sets = sets.clone();
    }
    if let Some(ref reps) = edits.reps {
        draft.reps = reps.clone();
    }
    if let Some(ref weight) = edits.weight {
        draft.weight = weight.clone();
    }
    if let Some(ref rpe) = edits.rpe {
        draft.rpe = rpe.clone();
    }
    if let Some(ref hold) = edits.hold {
        draft.hold_time = hold.clone();
    }
    if let Some(ref tempo) = edits.tempo {
        draft.tempo = tempo.clone();
    }
    if let Some(ref token) = edits.rope_weight {
        match token.to_lowercase().as_str() {
            "half" | "0.5" | "1/2" => draft.rope_weight = RopeWeight::HalfPound,
            "one" | "1" => draft.rope_weight = RopeWeight::OnePound,
            _ => eprintln!("Unknown rope weight '{}'", token),
        }
    }
    if let Some(ref token) = edits.protocol {
        match token.to_lowercase().as_str() {
            "primer" => draft.rope_protocol = RopeProtocol::Primer,
            "conditioning" => draft.rope_protocol = RopeProtocol::Conditioning,
            "finisher" => draft.rope_protocol = RopeProtocol::Finisher,
            "recovery" => draft.rope_protocol = RopeProtocol::Recovery,
            _ => eprintln!("Unknown rope protocol '{}'", token),
        }
    }
    if let Some(ref work) = edits.work {
        draft.work = work.clone();
    }
    if let Some(ref rest) = edits.rest {
        draft.rest = rest.clone();
    }
    if let Some(ref rounds) = edits.rounds {
        draft.rounds = rounds.clone();
    }
    if let Some(ref core_focus) = edits.core_focus {
        draft.core_focus = core_focus.clone();
    }
    if let Some(ref mobility) = edits.mobility {
        draft.mobility_block = mobility.clone();
    }
    if edits.pain {
        draft.pain_flag = true;
    }
    if let Some(ref area) = edits.pain_area {
        draft.pain_area = area.clone();
    }
    if let Some(ref notes) = edits.pain_notes {
        draft.pain_notes = notes.clone();
    }
}

fn cmd_remove(snapshot_path: &std::path::Path, raw_id: &str) -> Result<()> {
    let id = Uuid::parse_str(raw_id)
        .map_err(|e| Error::Other(format!("Invalid entry id '{}': {}", raw_id, e)))?;

    let state = TrackerState::update(snapshot_path, |state| {
        state.entries.remove(id);
        Ok(())
    })?;

    println!("Removed entry {} if it existed.", id);
    println!("  {} entries remain", state.entries.len());
    Ok(())
}

fn cmd_log(snapshot_path: &std::path::Path, date: Option<String>) -> Result<()> {
    let state = TrackerState::load(snapshot_path)?;

    let filter_date = match date {
        Some(ref raw) => match raw.parse::<NaiveDate>() {
            Ok(date) => Some(date),
            Err(_) => {
                eprintln!("Invalid date '{}', showing full log", raw);
                None
            }
        },
        None => None,
    };

    let entries: Vec<&Entry> = match filter_date {
        Some(date) => state.entries.for_date(date),
        None => state.entries.all().iter().collect(),
    };

    if entries.is_empty() {
        println!("No entries yet. Log some work with `cyclelog add`.");
        return Ok(());
    }

    println!(
        "{:<10} {:>4} {:<24} {:<10} {:>9} {:>4} {:<36}",
        "Date", "Wk", "Exercise", "Category", "Sets x Reps", "RPE", "Id"
    );
    for entry in entries {
        println!(
            "{:<10} {:>4} {:<24} {:<10} {:>6}x{:<4} {:>4} {}",
            entry.date,
            entry.week,
            entry.exercise,
            entry.category.label(),
            entry.sets,
            entry.reps,
            entry.rpe,
            entry.id,
        );
    }
    Ok(())
}

fn cmd_exercises(snapshot_path: &std::path::Path) -> Result<()> {
    let state = TrackerState::load(snapshot_path)?;
    let groups = group_by_exercise(state.entries.all());

    if groups.is_empty() {
        println!("Once you log a few sessions, you'll see a snapshot per exercise here.");
        return Ok(());
    }

    for group in groups {
        let latest = group.latest();
        let load = if latest.weight.is_empty() {
            "bodyweight".to_string()
        } else {
            latest.weight.clone()
        };
        let hold = if latest.hold_time.is_empty() {
            String::new()
        } else {
            format!(" ({}s)", latest.hold_time)
        };
        println!(
            "{} - last {} week {}: {}x{} @ {}{} RPE {}  [{} logged]",
            group.name,
            latest.date,
            latest.week,
            latest.sets,
            latest.reps,
            load,
            hold,
            latest.rpe,
            group.entries.len(),
        );
    }
    Ok(())
}

fn cmd_cycle(snapshot_path: &std::path::Path, config: &Config) -> Result<()> {
    let state = TrackerState::load(snapshot_path)?;
    let summaries = summarize_by_week(state.entries.all());

    println!("{}-week cycle dashboard", config.cycle.weeks);
    if summaries.is_empty() {
        println!("Log some sessions to populate this view.");
        return Ok(());
    }

    println!(
        "{:<6} {:>12} {:>10} {:>8} {:>10} {:>14}",
        "Week", "Days done", "Sets", "Avg RPE", "Rope (min)", "Mobility (min)"
    );
    for week in summaries {
        println!(
            "{:<6} {:>12} {:>10} {:>8} {:>10.1} {:>14.1}",
            week.week,
            week.days_completed,
            week.total_sets,
            week.avg_rpe_label(),
            week.rope_minutes,
            week.mobility_minutes,
        );
    }
    Ok(())
}

fn cmd_goals(snapshot_path: &std::path::Path, command: Option<GoalCommands>) -> Result<()> {
    match command {
        None | Some(GoalCommands::List) => {
            let state = TrackerState::load(snapshot_path)?;
            print_goals(&state.goals);
        }
        Some(GoalCommands::Set {
            id,
            baseline,
            mid_point,
            end_result,
            achieved,
        }) => {
            let state = TrackerState::update(snapshot_path, |state| {
                if let Some(value) = baseline {
                    state.goals.update_field(id, GoalField::Baseline(value));
                }
                if let Some(value) = mid_point {
                    state.goals.update_field(id, GoalField::MidPoint(value));
                }
                if let Some(value) = end_result {
                    state.goals.update_field(id, GoalField::EndResult(value));
                }
                if let Some(value) = achieved {
                    let flag = matches!(value.to_lowercase().as_str(), "yes" | "y" | "true");
                    state.goals.update_field(id, GoalField::Achieved(flag));
                }
                Ok(())
            })?;
            print_goals(&state.goals);
        }
    }
    Ok(())
}

fn print_goals(goals: &GoalLedger) {
    for goal in goals.all() {
        let mark = if goal.achieved { "x" } else { " " };
        println!("[{}] #{} {}", mark, goal.id, goal.goal);
        if !goal.baseline.is_empty() {
            println!("      baseline:   {}", goal.baseline);
        }
        if !goal.mid_point.is_empty() {
            println!("      mid-point:  {}", goal.mid_point);
        }
        if !goal.end_result.is_empty() {
            println!("      end result: {}", goal.end_result);
        }
    }
}

fn cmd_export(snapshot_path: &std::path::Path, out: PathBuf) -> Result<()> {
    let state = TrackerState::load(snapshot_path)?;
    let count = export_entries_csv(state.entries.all(), &out)?;

    println!("Exported {} entries to CSV", count);
    println!("  CSV: {}", out.display());
    Ok(())
}
