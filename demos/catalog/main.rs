//! Browse a product catalog in the terminal.
//!
//! ```text
//! cargo run -- [products.json] [config.json]
//! ```
//!
//! Without arguments the bundled `products.json` is shown. Press `/` to
//! search by tag, `←`/`→` to turn pages, `q` to quit.

use bubbletea_cardlist::{catalog, CardList, Config, DefaultCard, Focus, Product};
use bubbletea_rs::{Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::OnceLock;

const BUNDLED: &str = include_str!("products.json");

static SETUP: OnceLock<(Vec<Product>, Config)> = OnceLock::new();

struct App {
    list: CardList,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let (products, config) = SETUP.get().cloned().unwrap_or_default();
        let list = CardList::with_config(products, DefaultCard::new(), &config);
        (Self { list }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c = key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            let q = key.key == KeyCode::Char('q') && self.list.focused_control() != Focus::Search;
            if ctrl_c || q {
                return Some(bubbletea_rs::quit());
            }
        }
        self.list.update(msg)
    }

    fn view(&self) -> String {
        format!("\n{}\n", self.list.view())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let products = match args.next() {
        Some(path) => catalog::load(path)?,
        None => catalog::from_str(BUNDLED)?,
    };
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let _ = SETUP.set((products, config));

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
