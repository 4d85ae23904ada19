//! Fetches a published entity dataset and prints the chart payloads.
//!
//! Exercises the full path end to end: HTTP source, debounced input
//! settlement, board application, JSON contract output.
//!
//! Usage: `eps_trend_probe <base-url> <entity-id> [yoy-lookback] [dividends-lookback]`

use std::env;
use std::process::ExitCode;

use eps_trend::api::{BoardConfig, TrendBoard};
use eps_trend::source::{SeriesSource, StaticJsonSource};

struct CliArgs {
    base_url: String,
    entity_id: String,
    yoy_lookback: u32,
    dividends_lookback: u32,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);
    let base_url = args.next().ok_or("missing <base-url>")?;
    let entity_id = args.next().ok_or("missing <entity-id>")?;
    let yoy_lookback = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|e| format!("invalid yoy lookback `{raw}`: {e}"))?,
        None => 1,
    };
    let dividends_lookback = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|e| format!("invalid dividends lookback `{raw}`: {e}"))?,
        None => 9,
    };
    Ok(CliArgs {
        base_url,
        entity_id,
        yoy_lookback,
        dividends_lookback,
    })
}

fn run(args: &CliArgs) -> Result<(), String> {
    let source = StaticJsonSource::new(args.base_url.clone()).map_err(|e| e.to_string())?;

    let config = BoardConfig::from_wall_clock()
        .with_yoy_lookback(args.yoy_lookback)
        .with_dividends_lookback(args.dividends_lookback);
    let mut board = TrendBoard::new(config);

    board.set_directory(source.fetch_entities().map_err(|e| e.to_string())?);

    board.on_entity_input(args.entity_id.clone(), 0);
    let command = board
        .poll_entity(config.debounce.settle_ms)
        .ok_or("entity input did not settle")?;

    let notifications = board.apply_entity_fetch(
        command.generation,
        source.fetch_eps_series(&command.value),
        source.fetch_dividend_series(&command.value),
    );
    for notification in &notifications {
        eprintln!("{}: {}", notification.title, notification.message);
    }

    println!("# {}", board.window_title());
    println!(
        "{}",
        board
            .yoy()
            .to_json_contract_v1_pretty()
            .map_err(|e| e.to_string())?
    );
    println!(
        "{}",
        board
            .eps_vs_dividends()
            .to_json_contract_v1_pretty()
            .map_err(|e| e.to_string())?
    );
    Ok(())
}

fn main() -> ExitCode {
    let _ = eps_trend::telemetry::init_default_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!(
                "usage: eps_trend_probe <base-url> <entity-id> [yoy-lookback] [dividends-lookback]"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
