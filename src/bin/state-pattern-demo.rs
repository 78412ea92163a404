use anyhow::Context as _;
use clap::Parser;
use serde::Serialize;
use state_pattern::{
    ConsoleDriven, Context, Driven, DrivenCall, Event, RecordingDriven, State, StateHistory,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "state-pattern-demo")]
#[command(about = "Feed events through the Null/Idle/Ready state machine")]
#[command(version)]
struct Cli {
    /// Comma-separated events to dispatch, in order
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "create,connect,disconnect,destroy"
    )]
    events: Vec<Event>,

    /// Print the recorded callbacks and history as JSON instead of console lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    final_state: State,
    calls: &'a [DrivenCall],
    history: &'a StateHistory,
}

fn run<D: Driven>(context: &mut Context<D>, events: &[Event]) -> anyhow::Result<()> {
    for (index, event) in events.iter().enumerate() {
        context
            .handle_event(*event)
            .with_context(|| format!("event #{} rejected", index + 1))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    if cli.json {
        let mut context = Context::new(RecordingDriven::new());
        run(&mut context, &cli.events)?;

        let report = Report {
            final_state: context.current_state(),
            calls: context.driven().calls(),
            history: context.history(),
        };
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        let mut context = Context::new(ConsoleDriven::stdout());
        let outcome = run(&mut context, &cli.events);
        if let Some(err) = context.driven_mut().take_error() {
            return Err(anyhow::Error::new(err).context("failed to write to stdout"));
        }
        outcome?;
        writeln!(stdout, "Final state: {}", context.current_state())?;
    }

    Ok(())
}
