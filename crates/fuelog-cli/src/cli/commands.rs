//! # CLI Layer
//!
//! This module is **one possible UI client** for fuelog, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build the file-backed API through `fuelog::init::initialize`
//! 3. **API Dispatch**: Call the matching `FuelogApi` method
//! 4. **Output Formatting**: Render `CmdResult` values (see `render`)
//! 5. **Shutdown**: Give in-flight mirror requests a bounded grace period
//!
//! Logs go to stderr, command output to stdout.

use super::render::{
    print_config, print_entries, print_messages, print_metrics, print_settings, print_summary,
};
use super::setup::{AddArgs, Cli, Commands, MetricsArgs, MirrorCommands};
use clap::Parser;
use fuelog::api::FuelogApi;
use fuelog::commands::config::ConfigAction;
use fuelog::commands::MessageLevel;
use fuelog::commands::settings::SettingsAction;
use fuelog::config::FuelogConfig;
use fuelog::error::{FuelogError, Result};
use fuelog::init::{initialize, FuelogContext};
use fuelog::model::EntryDraft;
use fuelog::store::fs::FileStore;
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: FuelogApi<FileStore>,
    config: FuelogConfig,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let FuelogContext {
        api,
        config,
        mirror,
    } = initialize(cli.data, Handle::current())?;
    let grace = config.mirror_timeout();
    let mut ctx = AppContext { api, config };

    let outcome = dispatch(&mut ctx, cli.command);

    // The outcome is already decided; this only keeps exit from cutting requests short
    if mirror.in_flight() > 0 {
        tracing::debug!(pending = mirror.in_flight(), "waiting for mirror requests");
        mirror.drain(grace).await;
    }

    outcome
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Add(args)) => handle_add(ctx, args),
        Some(Commands::Metrics(args)) => handle_metrics(ctx, args),
        Some(Commands::List) | None => handle_list(ctx),
        Some(Commands::Delete { selectors }) => handle_delete(ctx, selectors),
        Some(Commands::Summary) => handle_summary(ctx),
        Some(Commands::Sample) => handle_sample(ctx),
        Some(Commands::Reset { all }) => handle_reset(ctx, all),
        Some(Commands::Mirror { action }) => handle_mirror(ctx, action),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let draft = EntryDraft {
        date: args.date,
        fuel_brand: args.brand,
        amount_paid: args.amount,
        litres: args.litres,
        odo_start: args.start,
        odo_end: args.end,
        notes: args.notes.unwrap_or_default(),
    };

    let result = ctx.api.add_entry(&draft)?;
    print_entries(&result.affected_entries, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_metrics(ctx: &mut AppContext, args: MetricsArgs) -> Result<()> {
    let draft = EntryDraft {
        odo_start: args.start,
        odo_end: args.end.unwrap_or_default(),
        litres: args.litres.unwrap_or_default(),
        amount_paid: args.amount.unwrap_or_default(),
        ..Default::default()
    };

    let result = ctx.api.preview_metrics(&draft)?;
    if let Some(metrics) = &result.metrics {
        print_metrics(metrics, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_entries()?;
    print_entries(&result.listed_entries, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_entries(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_summary(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.summary()?;
    if let Some(summary) = &result.summary {
        print_summary(summary, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sample(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.generate_sample()?;
    print_entries(&result.listed_entries, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, all: bool) -> Result<()> {
    let result = ctx.api.reset(all)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mirror(ctx: &mut AppContext, action: Option<MirrorCommands>) -> Result<()> {
    let action = match action {
        None | Some(MirrorCommands::Show) => SettingsAction::Show,
        Some(MirrorCommands::Enable { url }) => SettingsAction::Enable(url),
        Some(MirrorCommands::Disable) => SettingsAction::Disable,
    };

    let result = ctx.api.settings(action)?;
    print_messages(&result.messages);
    if let Some(settings) = &result.settings {
        print_settings(settings);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.has_errors() {
        let reasons: Vec<&str> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Error)
            .map(|m| m.content.as_str())
            .collect();
        return Err(FuelogError::Api(reasons.join("; ")));
    }

    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
