use super::*;
use shared::{
    domain::{CardField, Mode},
    protocol::FormSnapshot,
};
use tokio::io::{AsyncWriteExt, BufReader};

async fn run_script(script: &str, options: RunOptions) -> Vec<String> {
    let mut out = Vec::new();
    run(BufReader::new(script.as_bytes()), &mut out, options)
        .await
        .expect("run script");
    String::from_utf8(out)
        .expect("utf8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

fn snapshot(line: &str) -> FormSnapshot {
    serde_json::from_str(line).expect("snapshot json")
}

#[test]
fn parses_console_commands() {
    assert_eq!(parse_command("  # note").expect("parse"), None);
    assert_eq!(parse_command("").expect("parse"), None);
    assert_eq!(
        parse_command("wait 250").expect("parse"),
        Some(ConsoleCommand::Wait(Duration::from_millis(250)))
    );
    assert_eq!(
        parse_command("show").expect("parse"),
        Some(ConsoleCommand::Show)
    );
    assert_eq!(
        parse_command("save").expect("parse"),
        Some(ConsoleCommand::Intent(Intent::RequestSave))
    );
    assert_eq!(
        parse_command("set name Ada ").expect("parse"),
        Some(ConsoleCommand::Intent(Intent::SetField {
            field: CardField::Name,
            value: "Ada ".to_string()
        }))
    );
}

#[test]
fn rejects_bad_wait_durations() {
    assert_eq!(
        parse_command("wait soon"),
        Err(IntentParseError::InvalidDuration("soon".to_string()))
    );
    assert!(matches!(
        parse_command("wait"),
        Err(IntentParseError::MissingArgument { command: "wait", .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn end_to_end_script_locks_and_hides_banner() {
    let lines = run_script(
        "set name Ada\n\
         set hobby Math\n\
         set age 3a0\n\
         show\n\
         set age 30\n\
         save\n\
         wait 2999\n\
         show\n\
         wait 1\n\
         show\n",
        RunOptions::default(),
    )
    .await;

    assert_eq!(lines.len(), 7, "{lines:?}");
    let first = snapshot(&lines[0]);
    assert_eq!(first.fields.age, "");
    assert_eq!(first.mode, Mode::Editing);

    assert_eq!(lines[1], "notice: Saved successfully!");
    assert_eq!(lines[2], "mode: Locked");
    assert_eq!(lines[3], "banner: shown");

    let before = snapshot(&lines[4]);
    assert_eq!(before.fields.age, "30");
    assert_eq!(before.mode, Mode::Locked);
    assert!(before.hint_banner_visible);

    assert_eq!(lines[5], "banner: hidden");
    let after = snapshot(&lines[6]);
    assert!(!after.hint_banner_visible);
    assert_eq!(after.mode, Mode::Locked);
    assert_eq!(after.fields, before.fields);
}

#[tokio::test(start_paused = true)]
async fn rejected_save_lists_missing_fields() {
    let lines = run_script("set hobby chess\nset age 9\nsave\nshow\n", RunOptions::default()).await;

    assert_eq!(lines[0], "notice: Please enter: Name");
    assert_eq!(snapshot(&lines[1]).mode, Mode::Editing);
}

#[tokio::test(start_paused = true)]
async fn invalid_lines_are_reported_and_skipped() {
    let lines = run_script("lock\nset email x\ntoggle\n", RunOptions::default()).await;

    assert_eq!(
        lines,
        vec![
            "error: unknown command 'lock'".to_string(),
            "error: unknown field 'email' (expected name, hobby or age)".to_string(),
            "mode: Locked".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn pending_timer_is_dropped_without_drain() {
    let lines = run_script(
        "set name Ada\nset hobby Math\nset age 30\nsave\n",
        RunOptions::default(),
    )
    .await;

    assert_eq!(lines.last().map(String::as_str), Some("banner: shown"));
}

#[tokio::test(start_paused = true)]
async fn drain_waits_for_banner_to_hide() {
    let started = Instant::now();
    let lines = run_script(
        "set name Ada\nset hobby Math\nset age 30\ntoggle\n",
        RunOptions {
            drain: true,
            ..RunOptions::default()
        },
    )
    .await;

    assert_eq!(
        lines,
        vec!["mode: Locked", "banner: shown", "banner: hidden"]
    );
    assert!(started.elapsed() >= Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn banner_hides_while_waiting_for_input() {
    let (mut tx, rx) = tokio::io::duplex(256);
    let mut out = Vec::new();

    let feeder = async move {
        tx.write_all(b"set name Ada\nset hobby Math\nset age 30\nsave\n")
            .await
            .expect("write intents");
        tokio::time::sleep(Duration::from_millis(3500)).await;
        tx.write_all(b"show\n").await.expect("write show");
    };

    let (result, ()) = tokio::join!(
        run(BufReader::new(rx), &mut out, RunOptions::default()),
        feeder
    );
    result.expect("run");

    let output = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[..4],
        [
            "notice: Saved successfully!",
            "mode: Locked",
            "banner: shown",
            "banner: hidden"
        ]
    );
    assert!(!snapshot(lines[4]).hint_banner_visible);
}
