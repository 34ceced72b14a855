//! scalar - mandolin scale visualizer CLI
//!
//! Renders the circle-of-fifths key selector and the fretboard diagram to
//! SVG, and manages the saved preferences those renders default to.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use scalar::renderer::{render_circle_of_fifths_svg, render_page_svg, render_state_to_svg};
use scalar::settings::{self, FileStore, MemoryStore, SettingsStore, STORAGE_KEY};
use scalar::{get_scale_notes, AppState, Note, Orientation, ScaleType, CIRCLE_OF_FIFTHS};

#[derive(Parser)]
#[command(name = "scalar")]
#[command(about = "Mandolin scale visualizer")]
#[command(version)]
struct Cli {
    /// Settings directory (defaults to the platform config directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an SVG diagram
    Render {
        /// What to draw
        #[arg(value_enum, default_value_t = View::Fretboard)]
        view: View,

        #[command(flatten)]
        selection: Selection,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Persist the effective selections as the new defaults
        #[arg(long)]
        save: bool,
    },

    /// Print the notes of a scale
    Scale {
        #[command(flatten)]
        selection: Selection,
    },

    /// Print the circle of fifths
    Keys,

    /// Inspect or change saved preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Fretboard,
    Circle,
    Page,
}

/// Overrides applied on top of the saved preferences.
#[derive(Args)]
struct Selection {
    /// Key (e.g. C, F#, Bb)
    #[arg(short, long)]
    key: Option<Note>,

    /// Scale: major, minor, pentatonic or blues
    #[arg(short, long)]
    scale: Option<ScaleType>,

    /// Fretboard orientation: horizontal or vertical
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Hide note names inside the fretboard markers
    #[arg(long, conflicts_with = "show_names")]
    hide_names: bool,

    /// Show note names inside the fretboard markers
    #[arg(long)]
    show_names: bool,
}

impl Selection {
    fn apply(&self, mut state: AppState) -> AppState {
        if let Some(key) = self.key {
            state = state.with_key(key);
        }
        if let Some(scale) = self.scale {
            state = state.with_scale(scale);
        }
        if let Some(orientation) = self.orientation {
            state = state.with_orientation(orientation);
        }
        if self.hide_names {
            state.show_note_names = false;
        }
        if self.show_names {
            state.show_note_names = true;
        }
        state
    }
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the saved preferences as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Restore the defaults
    Reset,
    /// Update saved preferences
    Set {
        #[command(flatten)]
        selection: Selection,
    },
}

fn open_store(config_dir: Option<PathBuf>) -> Result<FileStore> {
    match config_dir {
        Some(dir) => Ok(FileStore::new(dir)),
        None => FileStore::default_location()
            .context("could not determine the settings directory; pass --config-dir"),
    }
}

fn write_output(svg: &str, output: Option<PathBuf>, out: &mut dyn Write) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, svg).with_context(|| format!("failed to write {:?}", path))?;
            tracing::info!("Wrote {:?} ({} bytes)", path, svg.len());
        }
        None => write!(out, "{svg}")?,
    }
    Ok(())
}

/// Run one command against a settings store, writing results to `out`.
fn execute<S: SettingsStore>(command: Commands, store: &mut S, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Render {
            view,
            selection,
            output,
            save,
        } => {
            let state = selection.apply(settings::load_state(&*store));
            let svg = match view {
                View::Fretboard => render_state_to_svg(&state),
                View::Circle => render_circle_of_fifths_svg(state.key),
                View::Page => render_page_svg(&state),
            };
            write_output(&svg, output, out)?;
            if save {
                settings::save_state(store, &state);
            }
        }

        Commands::Scale { selection } => {
            let state = selection.apply(settings::load_state(&*store));
            let names: Vec<&str> = get_scale_notes(state.key, state.scale)
                .into_iter()
                .map(Note::display_name)
                .collect();
            writeln!(out, "{} {}: {}", state.key, state.scale, names.join(" "))?;
        }

        Commands::Keys => {
            let names: Vec<&str> = CIRCLE_OF_FIFTHS.iter().map(|n| n.display_name()).collect();
            writeln!(out, "{}", names.join(" "))?;
        }

        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let state = settings::load_state(&*store);
                writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
            }
            SettingsAction::Path => {
                anyhow::bail!("the settings path is only known for the file store");
            }
            SettingsAction::Reset => {
                store.set(STORAGE_KEY, &AppState::default().to_json()?)?;
                tracing::info!("Settings reset to defaults");
            }
            SettingsAction::Set { selection } => {
                let json = selection.apply(settings::load_state(&*store)).to_json()?;
                store.set(STORAGE_KEY, &json)?;
                tracing::info!("Saved {}", json);
            }
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Commands::Keys = cli.command {
        return execute(cli.command, &mut MemoryStore::new(), &mut stdout);
    }

    let mut store = open_store(cli.config_dir)?;
    if let Commands::Settings {
        action: SettingsAction::Path,
    } = cli.command
    {
        writeln!(stdout, "{}", store.path_for(STORAGE_KEY).display())?;
        return Ok(());
    }

    execute(cli.command, &mut store, &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use scalar::settings::load_state;

    fn saved(state: AppState) -> MemoryStore {
        let mut store = MemoryStore::new();
        settings::save_state(&mut store, &state);
        store
    }

    fn run(args: &[&str], store: &mut MemoryStore) -> String {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments should parse");
        let mut out = Vec::new();
        execute(cli.command, store, &mut out).expect("command should succeed");
        String::from_utf8(out).unwrap()
    }

    fn selection_of(args: &[&str]) -> Selection {
        match Cli::try_parse_from(args.iter().copied()).unwrap().command {
            Commands::Render { selection, .. }
            | Commands::Scale { selection }
            | Commands::Settings {
                action: SettingsAction::Set { selection },
            } => selection,
            _ => panic!("command has no selection"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_apply_on_top_of_saved_preferences() {
        let base = AppState::default()
            .with_key(Note::A)
            .with_scale(ScaleType::Minor)
            .toggled_note_names();
        let state = selection_of(&["scalar", "render", "--key", "Db", "--orientation", "vertical"])
            .apply(base);
        assert_eq!(
            state,
            AppState {
                key: Note::CSharp,
                scale: ScaleType::Minor,
                orientation: Orientation::Vertical,
                show_note_names: false,
            }
        );
    }

    #[test]
    fn note_name_flags() {
        let hidden = AppState::default().toggled_note_names();
        assert!(!selection_of(&["scalar", "render", "--hide-names"])
            .apply(AppState::default())
            .show_note_names);
        assert!(selection_of(&["scalar", "render", "--show-names"])
            .apply(hidden)
            .show_note_names);
        assert!(!selection_of(&["scalar", "render"]).apply(hidden).show_note_names);
        assert!(Cli::try_parse_from(["scalar", "render", "--hide-names", "--show-names"]).is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["scalar", "render", "--key", "H"]).is_err());
        assert!(Cli::try_parse_from(["scalar", "render", "--scale", "dorian"]).is_err());
        assert!(Cli::try_parse_from(["scalar", "render", "sideways"]).is_err());
    }

    #[test]
    fn render_without_save_leaves_store_untouched() {
        let original = AppState::default().with_key(Note::E);
        let mut store = saved(original);
        let svg = run(&["scalar", "render", "circle", "--key", "G"], &mut store);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#333" stroke="#ccc" stroke-width="1.0" data-key="G""##));
        assert_eq!(load_state(&store), original);
    }

    #[test]
    fn render_with_save_persists_effective_state() {
        let mut store = saved(AppState::default().with_scale(ScaleType::Blues));
        let svg = run(
            &["scalar", "render", "page", "--key", "F#", "--hide-names", "--save"],
            &mut store,
        );
        assert!(svg.contains("Mandolin Scale Visualizer"));
        assert_eq!(
            load_state(&store),
            AppState::default()
                .with_key(Note::FSharp)
                .with_scale(ScaleType::Blues)
                .toggled_note_names()
        );
    }

    #[test]
    fn render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.svg");
        let mut store = MemoryStore::new();
        let printed = run(
            &["scalar", "render", "--output", path.to_str().unwrap()],
            &mut store,
        );
        assert!(printed.is_empty());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"class="fretboard""#));
    }

    #[test]
    fn scale_and_keys_output() {
        let mut store = MemoryStore::new();
        assert_eq!(
            run(&["scalar", "scale", "--key", "A", "--scale", "minor"], &mut store),
            "A Minor: A B C D E F G\n"
        );
        assert_eq!(
            run(&["scalar", "keys"], &mut store),
            "C G D A E B F♯ C♯ G♯ D♯ A♯ F\n"
        );
    }

    #[test]
    fn settings_set_show_and_reset() {
        let mut store = saved(AppState::default().with_key(Note::D));
        run(
            &["scalar", "settings", "set", "--scale", "pentatonic", "--orientation", "vertical"],
            &mut store,
        );
        assert_eq!(
            load_state(&store),
            AppState::default()
                .with_key(Note::D)
                .with_scale(ScaleType::Pentatonic)
                .with_orientation(Orientation::Vertical)
        );

        let shown = run(&["scalar", "settings", "show"], &mut store);
        assert!(shown.contains(r#""scale": "pentatonic""#));

        run(&["scalar", "settings", "reset"], &mut store);
        assert_eq!(load_state(&store), AppState::default());
    }
}
