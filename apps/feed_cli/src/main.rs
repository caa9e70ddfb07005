mod commands;

use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, Receiver, Sender};
use feed_core::{
    config::{load_settings, resolve_endpoint},
    Activation, EventOutcome, FileSource, HtmlSurface, HttpSource, NotificationSource,
    NotificationsApp,
};
use url::Url;

use crate::commands::{enqueue, parse_command, to_event, Command, HELP};

/// Loads the notification feed once and renders it as HTML.
#[derive(Parser, Debug)]
#[command(name = "notifications")]
struct Args {
    /// Settings file; defaults to ./notifications.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured endpoint.
    #[arg(long)]
    endpoint: Option<String>,
    /// Base for relative endpoints.
    #[arg(long, default_value = "http://127.0.0.1:8080/")]
    base_url: Url,
    /// Read the payload from a local JSON file instead of over HTTP.
    #[arg(long, conflicts_with = "endpoint")]
    file: Option<PathBuf>,
    /// Read `read <id>` / `all` commands from stdin after loading.
    #[arg(long, short)]
    interactive: bool,
    /// Write the final HTML snapshot here instead of stdout.
    #[arg(long, short)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = endpoint.clone();
    }

    let source: Box<dyn NotificationSource> = match &args.file {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(HttpSource::new(resolve_endpoint(
            &settings.endpoint,
            Some(&args.base_url),
        )?)),
    };
    let surface = HtmlSurface::new(settings.mounts.clone(), settings.heading.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;
    let mut app = runtime.block_on(NotificationsApp::start(settings, source.as_ref(), surface));

    if args.interactive {
        print_summary(&app);
        println!("{HELP}");
        let (cmd_tx, cmd_rx) = bounded::<Command>(64);
        spawn_input_thread(cmd_tx);
        run_session(&mut app, cmd_rx);
    }

    let html = app
        .surface()
        .to_html()
        .context("failed to render notifications")?;
    match &args.out {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None if !args.interactive => println!("{html}"),
        None => {}
    }
    Ok(())
}

fn spawn_input_thread(cmd_tx: Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => {
                    if !enqueue(&cmd_tx, command) {
                        break;
                    }
                }
                Err(message) => eprintln!("{message}"),
            }
        }
    });
}

fn run_session(app: &mut NotificationsApp<HtmlSurface>, commands: Receiver<Command>) {
    while let Ok(command) = commands.recv() {
        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => print_summary(app),
            other => match to_event(app.surface(), &other) {
                Some(event) => println!("{}", describe(app.dispatch(event))),
                None => println!("nothing to activate for {other:?}"),
            },
        }
    }
}

fn describe(outcome: EventOutcome) -> String {
    match outcome {
        EventOutcome::Activated(Activation::MarkedRead { unread }) => {
            format!("marked read; {unread} unread")
        }
        EventOutcome::Activated(Activation::AlreadyRead) => "already read".to_string(),
        EventOutcome::Activated(Activation::UnknownItem) => "no such notification".to_string(),
        EventOutcome::MarkedAll(0) => "nothing unread".to_string(),
        EventOutcome::MarkedAll(n) => format!("marked {n} read; 0 unread"),
    }
}

fn print_summary(app: &NotificationsApp<HtmlSurface>) {
    let report = app.report();
    if report.fetch_failed {
        println!("{}", app.settings().error_message);
        return;
    }
    for notification in app.feed().iter() {
        let marker = if notification.is_unread() { "*" } else { " " };
        println!(
            "[{marker}] {:>4}  {:<8} {:<20} {}",
            notification.id,
            notification.content.tag(),
            notification.actor.name,
            notification.time
        );
    }
    println!(
        "{} notifications, {} unread, {} skipped",
        app.feed().len(),
        app.unread_count(),
        report.rejected.len()
    );
}
