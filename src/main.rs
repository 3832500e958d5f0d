use std::env;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use party_planner::ai::provider::normalize_ollama_host;
use party_planner::ai::{AiProvider, ModelClient, compose};
use party_planner::app::App;
use party_planner::chat::{ConversationTurn, load_history};
use party_planner::config::{self, Config};
use party_planner::error::PlannerError;
use party_planner::event::EventFields;
use party_planner::planner;

/// Plan an event by chatting with a local language model
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Event title
    #[arg(long)]
    title: Option<String>,

    /// Date and time, free text
    #[arg(long = "date", value_name = "DATE_TIME")]
    date_time: Option<String>,

    #[arg(long)]
    street: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long = "zip", value_name = "ZIP_CODE")]
    zip_code: Option<String>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Earlier conversation as JSON (pairs or role/content messages)
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Model name, overrides the config file
    #[arg(long)]
    model: Option<String>,

    /// Ollama host, overrides OLLAMA_HOST and the config file
    #[arg(long, value_name = "URL")]
    host: Option<String>,

    /// Config file to use instead of ~/.config/party-planner/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not ask the model for field suggestions
    #[arg(long)]
    no_suggestions: bool,

    /// Print the prompt that would be sent and exit
    #[arg(long)]
    print_prompt: bool,

    /// Send one message, print the reply and exit
    #[arg(long, value_name = "MESSAGE")]
    ask: Option<String>,
}

impl Args {
    fn fields(&self) -> EventFields {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        EventFields {
            title: value(&self.title),
            date_time: value(&self.date_time),
            street: value(&self.street),
            city: value(&self.city),
            state: value(&self.state),
            zip_code: value(&self.zip_code),
            country: value(&self.country),
            description: value(&self.description),
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logger();

    let args = Args::parse();
    let (config, warning) = load_config(&args)?;
    let fields = args.fields();
    let history = match &args.history {
        Some(path) => load_history(path)?,
        None => Vec::new(),
    };

    if args.print_prompt || args.ask.is_some() {
        if let Some(warning) = &warning {
            eprintln!("warning: {}", warning);
        }

        if args.print_prompt {
            let message = args.ask.as_deref().unwrap_or_default();
            println!(
                "{}",
                compose(&fields, &history, message, config.ai.request_suggestions)
            );
            return Ok(());
        }

        if let Some(message) = &args.ask {
            ask(&config, &fields, &history, message)?;
        }
        return Ok(());
    }

    let client = AiProvider::from_config(&config.ai)
        .map(|provider| Box::new(provider) as Box<dyn ModelClient>);
    let mut app = App::with_client(&config, &fields, history, client);
    if let Some(warning) = &warning {
        app.notification.show_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();

    result
}

/// Config file, then OLLAMA_HOST, then flags
fn load_config(args: &Args) -> Result<(Config, Option<String>), PlannerError> {
    let (mut config, warning) = match &args.config {
        Some(path) => (config::load_config_strict(path)?, None),
        None => {
            let loaded = config::load_config();
            (loaded.config, loaded.warning)
        }
    };

    config::apply_env_overrides(&mut config, env::var("OLLAMA_HOST").ok());

    if let Some(model) = &args.model {
        config.ai.model = model.clone();
    }
    if let Some(host) = &args.host {
        config.ai.host = normalize_ollama_host(host);
    }
    if args.no_suggestions {
        config.ai.request_suggestions = false;
    }

    Ok((config, warning))
}

/// One chat turn from the command line
fn ask(
    config: &Config,
    fields: &EventFields,
    history: &[ConversationTurn],
    message: &str,
) -> Result<(), PlannerError> {
    let client = AiProvider::from_config(&config.ai)?;
    let outcome = planner::chat_turn(
        &client,
        fields,
        history,
        message,
        config.ai.request_suggestions,
    )?;

    println!("{}", outcome.display_text);
    if !outcome.suggestions.is_empty() {
        println!();
        println!("{}", outcome.suggestions.to_pretty_json());
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;
        app.poll_ai();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stdout belongs to the TUI
#[cfg(debug_assertions)]
fn init_logger() {
    use std::io::Write;

    let path = env::temp_dir().join("party-planner-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("party_planner=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
