// Terminal Main - line-oriented coin watch page
// The prompt stands in for the search field; favorites live in a JSON file

use std::error::Error;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use watchlist::{
    FileStore, MarketClient, MarketEntry, SearchTicket, SearchTrigger, WatchConfig, Watchlist,
};

mod input;

use input::{resolve_result, Input, HELP};

type SearchOutcome = (SearchTicket, watchlist::Result<Vec<MarketEntry>>);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_file = dotenv::dotenv().ok();
    let config = WatchConfig::from_env();

    shared::init_logging(&config.log_level);
    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let client = MarketClient::new(&config)?;
    let mut watchlist = Watchlist::new(FileStore::new(&config.favorites_path));
    info!("Favorites stored at {}", config.favorites_path);

    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", HELP);
    print_favorites(&watchlist);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };

                match Input::parse(&line) {
                    Input::Search(query) => {
                        let trigger = SearchTrigger::Key("Enter".to_string());
                        if let Some(ticket) = watchlist.start_search(&trigger, &query) {
                            println!("Searching for '{}'...", query);
                            let client = client.clone();
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                let outcome = client.fetch_markets().await;
                                // The receiver only goes away on shutdown
                                let _ = tx.send((ticket, outcome));
                            });
                        }
                    }
                    Input::Add(target) => {
                        let coin = resolve_result(watchlist.results(), &target).cloned();
                        match coin {
                            Some(coin) => {
                                let name = coin.name.clone();
                                match watchlist.add_favorite(coin) {
                                    Ok(true) => {
                                        println!("Added {}", name);
                                        print_favorites(&watchlist);
                                    }
                                    Ok(false) => println!("{} is already a favorite", name),
                                    Err(e) => println!("  ! Could not save favorites: {}", e),
                                }
                            }
                            None => println!("No result '{}' in the current results", target),
                        }
                    }
                    Input::Remove(id) => match watchlist.remove_favorite(&id) {
                        Ok(true) => {
                            println!("Removed {}", id);
                            print_favorites(&watchlist);
                        }
                        Ok(false) => println!("{} is not a favorite", id),
                        Err(e) => println!("  ! Could not save favorites: {}", e),
                    },
                    Input::Favorites => print_favorites(&watchlist),
                    Input::Results => print_results(&watchlist),
                    Input::Help => println!("{}", HELP),
                    Input::Quit => break,
                    Input::Unknown(line) => println!("Unknown command '{}', try /help", line),
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                if watchlist.finish_search(&ticket, outcome) {
                    println!(
                        "Results for '{}' at {}:",
                        ticket.query(),
                        chrono::Local::now().format("%H:%M:%S")
                    );
                    print_results(&watchlist);
                }
            }
        }
    }

    info!("Shutting down");
    Ok(())
}

fn print_results(watchlist: &Watchlist<FileStore>) {
    let panel = watchlist.results_panel();
    if panel.is_empty() && panel.error.is_none() {
        println!("  (no matches)");
    } else {
        print!("{}", panel);
    }
}

fn print_favorites(watchlist: &Watchlist<FileStore>) {
    println!("Favorites:");
    print!("{}", watchlist.favorites_panel());
}
