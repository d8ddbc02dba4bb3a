use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use policies::ReceiverRotation;
use session::config::SessionConfig;
use session::input::{self, Command};
use session::{ensure_match, register_missing_players, RecordingSession};
use store::{SqliteStore, StoreConfig};
use types::{Handedness, MatchId, Player, Roster, RotationPolicy};

#[derive(Parser, Debug)]
struct Params {
    /// Side A players (one for singles, two for doubles)
    #[arg(long = "team-a", required = true)]
    team_a: Vec<String>,

    /// Side B players (one for singles, two for doubles)
    #[arg(long = "team-b", required = true)]
    team_b: Vec<String>,

    /// Players who hold the racket left-handed
    #[arg(long)]
    lefty: Vec<String>,

    /// Match date; today when omitted
    #[arg(long)]
    date: Option<chrono::NaiveDate>,

    /// Ordinal of the match on that date
    #[arg(long, default_value_t = 1)]
    slot: u8,

    /// Database url (falls back to DATABASE_URL, then the config file)
    #[arg(long)]
    database: Option<String>,

    /// Optional YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rotation policy: receiver | fixed
    #[arg(long)]
    policy: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Params::parse();
    log::debug!("args: {args:?}");

    let config = SessionConfig::load(args.config.as_deref())?;
    let store_config =
        StoreConfig::from_cli_or_env_or_yaml(args.database.clone(), config.database_url.clone());
    let pool = store_config.create_pool().await?;
    let mut store = SqliteStore::new(pool);
    store.run_migrations().await?;

    let roster = if args.team_a.len() == 1 && args.team_b.len() == 1 {
        Roster::singles(args.team_a[0].clone(), args.team_b[0].clone())?
    } else {
        Roster::doubles(args.team_a.clone(), args.team_b.clone())?
    };

    let players: Vec<Player> = roster
        .players()
        .map(|name| {
            let handedness = if args.lefty.iter().any(|l| l == name) {
                Handedness::Left
            } else {
                Handedness::Right
            };
            Player::new(name, handedness, "")
        })
        .collect();
    let added = register_missing_players(&mut store, &players).await?;
    if added > 0 {
        log::info!("registered {added} new players");
    }

    let date = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let names: Vec<&str> = roster.players().collect();
    let match_id = MatchId::derive(date, args.slot, &names);
    ensure_match(&mut store, &match_id, &roster).await?;

    let policy: Box<dyn RotationPolicy> = match args.policy.or(config.policy) {
        Some(name) => policies::policy_named(&name)
            .ok_or_else(|| format!("unknown rotation policy: {name}"))?,
        None => Box::new(ReceiverRotation::default()),
    };

    let mut session = RecordingSession::open(&mut store, match_id, policy).await?;
    println!("Recording {}: {}", session.state().match_id, session.roster());
    println!("Shots: <hitter> <receiver> <strike> <landing> <stroke> <outcome>");
    println!(
        "Zones: {}; commands: undo, score, quit",
        types::Zone::ALL.iter().join(" ")
    );

    let mut buf = String::new();
    loop {
        print!(
            "[{}] {} from {} >> ",
            session.state(),
            session.suggested_hitter(),
            session.suggested_strike_zone()
        );
        io::stdout().flush()?;
        buf.clear();
        if io::stdin().read_line(&mut buf)? == 0 {
            break;
        }
        if buf.trim().is_empty() {
            continue;
        }

        let command = match input::parse_command(&buf) {
            Ok(command) => command,
            Err(err) => {
                log::error!("{err}");
                continue;
            }
        };

        match command {
            Command::Shot(form) => match session.submit_shot(&form).await {
                Ok(event) => {
                    if event.outcome.is_terminal() {
                        println!("rally {} over, score {}", event.rally, session.state().score);
                    }
                }
                Err(err) => log::error!("rejected: {err}"),
            },
            Command::Undo => match session.undo_last().await {
                Ok(removed) => println!("removed {removed}"),
                Err(err) => log::error!("{err}"),
            },
            Command::Score => println!("{}", session.state()),
            Command::Quit => break,
        }
    }

    let score = session.close();
    println!("final score: {score}");
    Ok(())
}
