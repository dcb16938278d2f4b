//! Deals one sample turn and runs it through the decision pipeline.
//!
//! With `ADVISOR_API_KEY` set the turn goes through the live advisory
//! round-trip; without it the deterministic fallback decides, which makes
//! this binary a quick offline smoke check.

use advisor_poker::{
    AdvisorConfig, AdvisorPlayer, ConfigError, TableAgent,
    game::entities::{GameStart, RoundState, ValidAction},
};
use anyhow::Result;
use pico_args::Arguments;
use rand::seq::SliceRandom;

const HELP: &str = "\
Run one sample poker turn through the decision pipeline

USAGE:
  dry_run [OPTIONS]

OPTIONS:
  --name NAME           Agent display name  [default: hero]
  --stack CHIPS         Starting stack      [default: 1000]
  --call CHIPS          Amount to call      [default: 20]

FLAGS:
  -h, --help            Print help information

ENVIRONMENT:
  ADVISOR_API_KEY       Advisory service bearer token (omit to run offline)
  ADVISOR_MODEL         Model shorthand or verbatim name
  ADVISOR_BASE_URL      Advisory endpoint prefix
";

struct Args {
    name: String,
    stack: u64,
    call: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        name: pargs
            .value_from_str("--name")
            .unwrap_or_else(|_| "hero".to_string()),
        stack: pargs.value_from_str("--stack").unwrap_or(1000),
        call: pargs.value_from_str("--call").unwrap_or(20),
    };

    env_logger::builder().format_target(false).init();

    let (hole_cards, board) = deal();
    let round_state = sample_round_state(&args, &board);
    let valid_actions = sample_valid_actions(&args);

    println!("Dealt hole cards: {hole_cards:?}, board: {board:?}");

    match AdvisorConfig::from_env() {
        Ok(config) => {
            println!("Consulting {} ...", config.model);
            let mut player = AdvisorPlayer::new(args.name.clone(), config)?;
            player.receive_game_start(&sample_game_start(&args));
            let (kind, amount) = player
                .declare_action(&valid_actions, &hole_cards, &round_state)
                .await;
            println!("Decision: {kind} {amount}");
            println!("\nSession history:\n{}", player.history().export_json()?);
        }
        Err(err @ ConfigError::MissingRequired { .. }) => {
            println!("{err}");
            println!("Running the offline fallback path instead.\n");
            let info = advisor_poker::extract_game_info(
                &round_state,
                &hole_cards,
                &valid_actions,
                Some("seat-hero"),
            );
            let action = advisor_poker::fallback_decision(
                &hole_cards,
                &board,
                info.my_stack,
                info.call_amount,
                &info.legal_actions,
            );
            println!("Hand: {} | Board: {}", info.hole_cards, info.community_cards);
            println!("Decision: {action}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Deals two hole cards and a flop from a shuffled deck of card codes.
fn deal() -> (Vec<String>, Vec<String>) {
    let ranks = [
        "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K", "A",
    ];
    let suits = ['C', 'D', 'H', 'S'];
    let mut deck: Vec<String> = ranks
        .iter()
        .flat_map(|rank| suits.iter().map(move |suit| format!("{rank}{suit}")))
        .collect();
    deck.shuffle(&mut rand::rng());
    let hole = deck[..2].to_vec();
    let board = deck[2..5].to_vec();
    (hole, board)
}

fn sample_round_state(args: &Args, board: &[String]) -> RoundState {
    serde_json::from_value(serde_json::json!({
        "street": "flop",
        "community_card": board,
        "pot": {"main": {"amount": 3 * args.call}, "side": []},
        "seats": [
            {"uuid": "seat-hero", "name": args.name, "stack": args.stack},
            {"uuid": "seat-1", "name": "villain", "stack": args.stack},
        ],
        "action_histories": {
            "flop": [{"uuid": "seat-1", "action": "BET", "amount": args.call}]
        }
    }))
    .expect("sample round state is valid")
}

fn sample_valid_actions(args: &Args) -> Vec<ValidAction> {
    serde_json::from_value(serde_json::json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": args.call},
        {"action": "raise", "amount": {"min": 2 * args.call, "max": args.stack}},
    ]))
    .expect("sample valid actions are valid")
}

fn sample_game_start(args: &Args) -> GameStart {
    serde_json::from_value(serde_json::json!({
        "player_num": 2,
        "rule": {"max_round": 1, "small_blind_amount": args.call / 2, "initial_stack": args.stack},
        "seats": [
            {"uuid": "seat-hero", "name": args.name, "stack": args.stack},
            {"uuid": "seat-1", "name": "villain", "stack": args.stack},
        ]
    }))
    .expect("sample game start is valid")
}
