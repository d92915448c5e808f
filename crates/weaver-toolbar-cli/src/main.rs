mod script;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use weaver_toolbar::{
    CATALOG, Dispatched, EditorHandle, FileStore, MemoryEditor, RichTextToolbar, Row,
    SelectedSet, ToolbarAction, ToolbarConfig, ToolbarHooks, changed_rows, default_icon,
};

use crate::script::Step;

#[derive(Parser)]
#[command(version, about = "Weaver toolbar - drive a rich text toolbar against an in-memory editor", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known action with its label and default icon
    Catalog,
    /// Mount a toolbar and print its buttons
    Render {
        /// Toolbar config (.toml or .json)
        #[arg(long, env = "WEAVER_TOOLBAR_CONFIG")]
        config: Option<PathBuf>,

        /// Actions the editor reports as active
        #[arg(long = "select", value_name = "ID")]
        selected: Vec<String>,

        /// Print buttons as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a line script against a toolbar and print what the editor saw
    Replay {
        /// Script file
        script: PathBuf,

        /// Toolbar config (.toml or .json)
        #[arg(long, env = "WEAVER_TOOLBAR_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Catalog => print_catalog(),
        Commands::Render {
            config,
            selected,
            json,
        } => {
            let config = load_config(config).await?;
            render(config, selected, json)?;
        }
        Commands::Replay {
            script: path,
            config,
        } => {
            let config = load_config(config).await?;
            let source = std::fs::read_to_string(&path).into_diagnostic()?;
            let steps = script::parse(&source)?;
            replay(config, steps).await?;
        }
    }

    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("weaver").join("toolbar.toml"))
}

/// An explicit path must exist. The default path is optional.
async fn load_config(path: Option<PathBuf>) -> Result<ToolbarConfig> {
    let store = match path {
        Some(path) => FileStore::new(path),
        None => match default_config_path() {
            Some(path) if path.exists() => FileStore::new(path),
            _ => {
                tracing::debug!("no toolbar config, using defaults");
                return Ok(ToolbarConfig::default());
            }
        },
    };
    let config = ToolbarConfig::load(&store).await?;
    tracing::info!(path = %store.path().display(), "using toolbar config");
    Ok(config)
}

fn print_catalog() {
    for action in CATALOG.iter() {
        let icon = default_icon(action);
        println!(
            "{:<16} {:<20} {}",
            action.as_str(),
            action.label(),
            icon.as_ref().map(|i| i.as_str()).unwrap_or("-")
        );
    }
}

fn mount(config: ToolbarConfig, editor: &Arc<MemoryEditor>) -> Result<RichTextToolbar> {
    let handle: EditorHandle = editor.clone();
    let toolbar = RichTextToolbar::mount(move || Some(handle), config, ToolbarHooks::default())?;
    Ok(toolbar)
}

fn render(config: ToolbarConfig, selected: Vec<String>, json: bool) -> Result<()> {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(config, &editor)?;
    editor.push_selection(
        selected
            .iter()
            .map(|id| ToolbarAction::from(id.as_str()))
            .collect(),
    );

    let buttons = toolbar.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&buttons).into_diagnostic()?);
        return Ok(());
    }
    for button in &buttons {
        println!(
            "[{}] {:<16} {:<20} {:<18} {}",
            if button.selected { "x" } else { " " },
            button.key,
            button.title,
            button.icon.as_ref().map(|i| i.as_str()).unwrap_or("-"),
            button.background,
        );
    }
    Ok(())
}

async fn replay(config: ToolbarConfig, steps: Vec<Step>) -> Result<()> {
    let editor = Arc::new(MemoryEditor::new());
    let toolbar = mount(config, &editor)?;
    editor.take_calls();
    let mut previous = toolbar.rows();

    for step in steps {
        match step {
            Step::Actions(actions) => {
                println!("> actions {}", join(actions.iter()));
                toolbar.set_actions(actions);
            }
            Step::Select(selected) => {
                println!("> select {}", join(sorted(&selected).iter()));
                editor.push_selection(selected);
            }
            Step::Text(text) => {
                println!("> text {text}");
                editor.set_selected_text(text);
            }
            Step::FailText => {
                println!("> fail-text");
                editor.fail_selected_text("selection unavailable");
            }
            Step::Press(action) => {
                println!("> press {action}");
                match toolbar.press(&action) {
                    Dispatched::LinkDialogPending(pending) => pending.await,
                    Dispatched::Ignored => println!("  ignored"),
                    _ => {}
                }
            }
        }

        for call in editor.take_calls() {
            println!("  editor: {call:?}");
        }
        let rows = toolbar.rows();
        print_changed(&previous, &rows);
        previous = rows;
    }
    Ok(())
}

fn print_changed(previous: &[Row], rows: &[Row]) {
    for index in changed_rows(previous, rows) {
        let row = &rows[index];
        println!(
            "  row {index}: {} {}",
            row.action,
            if row.selected { "on" } else { "off" }
        );
    }
}

fn sorted(selected: &SelectedSet) -> Vec<&ToolbarAction> {
    let mut actions: Vec<_> = selected.iter().collect();
    actions.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    actions
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(" ")
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn init_miette() {
    // Another hook may already be installed; the default handler is fine then.
    let _ = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(3)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }));
    miette::set_panic_hook();
}
