//! Play one memory game headlessly and record it on the leaderboard.
//!
//! ```text
//! autoplay [--name NAME] [--cards N] [--config NAME] [--config-dir DIR]
//!          [--artwork-dir DIR] [--leaderboards DIR] [--seed N] [--verbose]
//! ```
//!
//! Without `--config-dir` a built-in face list is dealt.

use anyhow::{bail, Context, Result};

use memory_match::autoplay::PerfectMemory;
use memory_match::cards::CardFace;
use memory_match::catalog::{AcceptAll, ArtworkDirectory, FaceCatalog, FaceValidator};
use memory_match::core::{ConfigKey, GameConfig, GameRng, PairCount};
use memory_match::leaderboard::{FileStore, DEFAULT_TOP_N};
use memory_match::session::GameSession;

const BUILTIN_FACES: [&str; 6] = [
    "ace_of_spades.gif",
    "king_of_hearts.gif",
    "queen_of_clubs.gif",
    "jack_of_diamonds.gif",
    "ten_of_spades.gif",
    "joker.gif",
];

struct Args {
    name: String,
    cards: String,
    config: String,
    config_dir: Option<String>,
    artwork_dir: Option<String>,
    leaderboards: String,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        name: String::new(),
        cards: String::new(),
        config: String::new(),
        config_dir: None,
        artwork_dir: None,
        leaderboards: "leaderboards".to_string(),
        seed: None,
        verbose: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        if flag == "--verbose" {
            args.verbose = true;
            continue;
        }

        let value = iter
            .next()
            .with_context(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--name" => args.name = value,
            "--cards" => args.cards = value,
            "--config" => args.config = value,
            "--config-dir" => args.config_dir = Some(value),
            "--artwork-dir" => args.artwork_dir = Some(value),
            "--leaderboards" => args.leaderboards = value,
            "--seed" => {
                args.seed = Some(value.parse().with_context(|| format!("invalid seed {value:?}"))?)
            }
            other => bail!("unknown argument {other:?}"),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    let args = parse_args()?;
    memory_match::logging::init(args.verbose)?;

    let choice = PairCount::parse_card_count(&args.cards);
    if choice.adjusted && !args.cards.is_empty() {
        println!("Playing with {} instead of {:?}", choice.pair_count, args.cards);
    }
    let requested = ConfigKey::from_input(&args.config, choice.pair_count);

    let (key, faces): (ConfigKey, Vec<CardFace>) = match &args.config_dir {
        Some(dir) => {
            let validator: Box<dyn FaceValidator> = match &args.artwork_dir {
                Some(artwork) => Box::new(ArtworkDirectory::new(artwork)),
                None => Box::new(AcceptAll),
            };
            let loaded = FaceCatalog::new(dir)
                .load(&requested, &*validator)
                .context("Failed to load a card configuration")?;
            if loaded.fell_back {
                println!("Configuration {requested} unavailable, using {}", loaded.key);
            }
            (loaded.key, loaded.faces)
        }
        None => (requested, BUILTIN_FACES.iter().copied().map(CardFace::from).collect()),
    };

    let mut config = GameConfig::new(key, faces).with_player(&args.name);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(config, FileStore::new(&args.leaderboards))
        .context("Failed to start session")?;
    println!(
        "Good luck, {}! Dealing {} (seed {})",
        session.player_name(),
        session.key(),
        session.seed()
    );

    let mut player = PerfectMemory::new(GameRng::new(session.seed()).for_context("autoplay"));
    player.play(&mut session).context("Session failed")?;
    println!("  {}", session.status_text());

    println!("Leaders:");
    for entry in session.leaders(DEFAULT_TOP_N)? {
        println!("  {entry}");
    }

    Ok(())
}
