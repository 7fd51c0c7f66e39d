//! Line-oriented driver for the card form with the banner timer on the tokio event loop.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use card_core::{CardFormController, Notifier, TokioClock};
use shared::{
    error::IntentParseError,
    protocol::{split_token, Intent, Notification},
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    time::Instant,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Intent(Intent),
    Wait(Duration),
    Show,
    Quit,
}

/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, IntentParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = split_token(trimmed);
    let parsed = match command {
        "wait" => {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(IntentParseError::MissingArgument {
                    command: "wait",
                    argument: "duration",
                });
            }
            let millis = rest
                .parse::<u64>()
                .map_err(|_| IntentParseError::InvalidDuration(rest.to_string()))?;
            ConsoleCommand::Wait(Duration::from_millis(millis))
        }
        "show" => ConsoleCommand::Show,
        "quit" | "exit" => ConsoleCommand::Quit,
        // `set` keeps the untrimmed line so trailing spaces in values survive.
        _ => ConsoleCommand::Intent(Intent::parse(line)?),
    };
    Ok(Some(parsed))
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub hint_banner_duration: Duration,
    pub drain: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            hint_banner_duration: card_core::DEFAULT_HINT_BANNER_DURATION,
            drain: false,
        }
    }
}

struct PrintNotifier<'a, W: Write> {
    out: &'a mut W,
    failed: Option<std::io::Error>,
}

impl<W: Write> Notifier for PrintNotifier<'_, W> {
    fn notify(&mut self, notification: Notification) {
        if let Err(err) = writeln!(self.out, "notice: {}", notification.message) {
            self.failed.get_or_insert(err);
        }
    }
}

pub async fn run<R, W>(input: R, out: &mut W, options: RunOptions) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut controller = CardFormController::with_clock(TokioClock, options.hint_banner_duration);
    let mut lines = input.lines();

    loop {
        let deadline = controller.next_deadline().map(Instant::from_std);
        tokio::select! {
            biased;
            _ = sleep_until_deadline(deadline), if deadline.is_some() => {
                fire_timer(&mut controller, out)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        warn!(%err, line = %line, "skipping invalid line");
                        writeln!(out, "error: {err}")?;
                        continue;
                    }
                };
                match command {
                    ConsoleCommand::Intent(intent) => apply_intent(&mut controller, intent, out)?,
                    ConsoleCommand::Wait(duration) => {
                        wait_until(&mut controller, Instant::now() + duration, out).await?;
                    }
                    ConsoleCommand::Show => {
                        let snapshot = serde_json::to_string(&controller.snapshot())?;
                        writeln!(out, "{snapshot}")?;
                    }
                    ConsoleCommand::Quit => break,
                }
            }
        }
    }

    if options.drain {
        if let Some(deadline) = controller.next_deadline() {
            wait_until(&mut controller, Instant::from_std(deadline), out).await?;
        }
    } else if controller.hint_banner_visible() {
        debug!("exiting with hint banner visible; pending timer dropped");
    }
    Ok(())
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Sleeps until `until`, firing the banner timer on the way if it falls due first.
async fn wait_until<W: Write>(
    controller: &mut CardFormController<TokioClock>,
    until: Instant,
    out: &mut W,
) -> Result<()> {
    while let Some(deadline) = controller.next_deadline().map(Instant::from_std) {
        if deadline > until {
            break;
        }
        tokio::time::sleep_until(deadline).await;
        fire_timer(controller, out)?;
    }
    tokio::time::sleep_until(until).await;
    Ok(())
}

fn fire_timer<W: Write>(controller: &mut CardFormController<TokioClock>, out: &mut W) -> Result<()> {
    if controller.tick() {
        writeln!(out, "banner: hidden")?;
    }
    Ok(())
}

fn apply_intent<W: Write>(
    controller: &mut CardFormController<TokioClock>,
    intent: Intent,
    out: &mut W,
) -> Result<()> {
    let mode_before = controller.mode();
    let banner_before = controller.hint_banner_visible();

    let mut notifier = PrintNotifier {
        out: &mut *out,
        failed: None,
    };
    controller.handle(intent, &mut notifier);
    if let Some(err) = notifier.failed {
        return Err(err).context("failed to write notification");
    }

    if controller.mode() != mode_before {
        writeln!(out, "mode: {}", controller.mode().label())?;
    }
    if controller.hint_banner_visible() && !banner_before {
        writeln!(out, "banner: shown")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
