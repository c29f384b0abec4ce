use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use paper::cli::{load_script, render_output, CliArgs};
use paper::update::update;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    paper::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config()?;
    let mut note = args.load_note(now_millis())?;
    let script = load_script(&args.script)?;

    tracing::info!(
        messages = script.len(),
        script = %args.script.display(),
        "replaying script"
    );

    for (step, msg) in script.into_iter().enumerate() {
        let msg = msg.with_config_defaults(&config);
        let name = msg.name();
        update(&mut note, msg).with_context(|| format!("step {} ({}) failed", step + 1, name))?;
    }

    println!("{}", render_output(&note, args.format)?);
    Ok(())
}
