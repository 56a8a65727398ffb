// src/bin/poker_table_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use poker_table::api::{ApiError, Command, CommandResponse, PokerService, Query, QueryResponse};
use poker_table::domain::{Card, TableId};
use poker_table::engine::HandEventKind;
use poker_table::render::{render_table, TextRenderer};
use poker_table::EngineConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dev-CLI: один покерный стол в терминале", long_about = None)]
struct Args {
    /// JSON-конфиг движка.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для воспроизводимых раздач (перекрывает конфиг).
    #[arg(long)]
    seed: Option<u64>,

    /// Имя стола.
    #[arg(long)]
    name: Option<String>,

    /// Подробный лог (debug).
    #[arg(short, long)]
    verbose: bool,
}

/// Команды, которые вводятся в строке `> `.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
enum Input {
    #[command(about = "Раздать новую руку", alias = "d")]
    Deal,
    #[command(about = "Следующий раунд торговли", alias = "n", alias = "advance")]
    Next,
    #[command(about = "Поставить сумму в банк", alias = "b")]
    Bet {
        #[arg(required = true, allow_hyphen_values = true)]
        amount: String,
    },
    #[command(about = "Показать стол", alias = "s")]
    Show,
    #[command(about = "История текущей раздачи", alias = "h")]
    History,
    #[command(about = "Выход", alias = "exit", alias = "q")]
    Quit,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[CLI] {err}");
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut service = PokerService::new(config);
    let table_id = match service.execute(Command::CreateTable { name: args.name }) {
        Ok(CommandResponse::TableCreated(view)) => view.table_id,
        Ok(other) => {
            eprintln!("[CLI] BUG: неожиданный ответ {other:?}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("[CLI] {err}");
            std::process::exit(1);
        }
    };

    println!("poker_table_cli: deal | next | bet <amount> | show | history | quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let input = match Input::try_parse_from(line.split_whitespace()) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        if let Input::Quit = input {
            break;
        }
        if let Err(err) = handle(&mut service, table_id, input) {
            eprintln!("[CLI] {err}");
        }
    }

    println!("[CLI] Завершение работы.");
}

fn handle(service: &mut PokerService, table_id: TableId, input: Input) -> Result<(), ApiError> {
    match input {
        Input::Deal => {
            service.execute(Command::Deal { table_id })?;
            show(service, table_id);
        }
        Input::Next => {
            if let CommandResponse::RoundAdvanced(view) =
                service.execute(Command::AdvanceRound { table_id })?
            {
                show(service, table_id);
                if !view.can_advance {
                    println!("(river: раунд больше не меняется, раздайте заново)");
                }
            }
        }
        Input::Bet { amount } => {
            if let CommandResponse::BetPlaced { accepted, table } =
                service.execute(Command::PlaceBet { table_id, input: amount })?
            {
                if accepted.is_zero() {
                    println!("ставка не распознана, в банк ничего не добавлено");
                }
                println!("pot: {}", table.total_pot);
            }
        }
        Input::Show => show(service, table_id),
        Input::History => {
            if let QueryResponse::History(history) =
                service.query(Query::GetHistory { table_id })?
            {
                match history {
                    Some(h) => {
                        for event in h.history.events {
                            println!("{:>3} {}", event.index, describe(&event.kind));
                        }
                    }
                    None => println!("раздач ещё не было"),
                }
            }
        }
        Input::Quit => {}
    }
    Ok(())
}

fn show(service: &PokerService, table_id: TableId) {
    let Some(table) = service.manager().table(table_id) else {
        return;
    };
    if !table.hand_in_progress {
        println!("раздач ещё не было: введите deal");
        return;
    }
    let mut renderer = TextRenderer::new();
    render_table(table, &mut renderer);
    println!("{}", renderer.output);
    println!("pot:   {}", table.total_pot);
}

fn cards(cards: &[Card]) -> String {
    cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn describe(kind: &HandEventKind) -> String {
    match kind {
        HandEventKind::HandStarted { table_id, hand_id } => {
            format!("hand {hand_id} started at table {table_id}")
        }
        HandEventKind::HoleCardsDealt { cards: c } => format!("hole cards {}", cards(c)),
        HandEventKind::BoardRevealed { street, cards: c } => format!("{street}: {}", cards(c)),
        HandEventKind::BetPlaced { amount, pot_after } => {
            format!("bet {amount}, pot {pot_after}")
        }
        HandEventKind::BetIgnored { input } => format!("ignored bet input {input:?}"),
    }
}
