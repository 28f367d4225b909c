//! Application wiring: startup, the one-time small-terminal warning and the
//! mode menu.

use std::io;
use std::path::PathBuf;

use crate::data::{DataSource, DataStore};
use crate::grading::GradingClient;
use crate::prefs::{PrefStore, GLASS_ENABLED_KEY, SMALL_TERMINAL_ACCEPTED_KEY};
use crate::ui;

/// The interface is laid out for at least this many columns.
const MIN_COLUMNS: u32 = 80;

#[derive(Debug, Clone)]
pub struct Options {
    /// Backend base URL serving `data.json` and the grading API.
    pub backend_url: String,
    /// Local dataset file overriding the backend.
    pub data_file: Option<PathBuf>,
}

pub async fn run(options: Options) -> anyhow::Result<()> {
    let source = match &options.data_file {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::Remote {
            base_url: options.backend_url.clone(),
        },
    };

    let store = DataStore::new(source);
    if let Err(e) = store.load().await {
        // Degrade to an empty catalog rather than exiting; every mode
        // handles an empty pool.
        tracing::error!("Не удалось загрузить data.json: {e}");
    }

    let mut prefs = PrefStore::open(PrefStore::default_path());
    if !small_terminal_warning(&mut prefs)? {
        return Ok(());
    }

    let grading = GradingClient::new(options.backend_url);

    loop {
        let framed = prefs.get_bool(GLASS_ENABLED_KEY);
        println!("\n=== prepdeck · {} карточек ===", store.cards().len());
        println!("1 — Каталог");
        println!("2 — Карточки");
        println!("3 — Блиц");
        println!("4 — Интервью");
        println!("g — оформление карточек ({})", if framed { "вкл" } else { "выкл" });
        println!("q — выход");

        let topics = store.topics();
        let choice = ui::read_line("> ")?;
        match choice.trim() {
            "1" => ui::catalog::run(store.cards(), &topics, framed)?,
            "2" => ui::flip::run(store.cards(), &topics, framed)?,
            "3" => ui::blitz::run(store.cards(), &topics, framed)?,
            "4" => ui::interview::run(store.cards(), &topics, &grading, framed).await?,
            "g" => prefs.set_bool(GLASS_ENABLED_KEY, !framed),
            "q" => break,
            _ => {}
        }
    }
    Ok(())
}

/// Warn once when the terminal looks too narrow; the dismissal is
/// remembered in the preference store.
fn small_terminal_warning(prefs: &mut PrefStore) -> io::Result<bool> {
    if prefs.get_bool(SMALL_TERMINAL_ACCEPTED_KEY) {
        return Ok(true);
    }
    let Some(width) = terminal_width() else {
        return Ok(true);
    };
    if width >= MIN_COLUMNS {
        return Ok(true);
    }

    println!("Терминал уже {MIN_COLUMNS} колонок — интерфейс может расползтись.");
    let answer = ui::read_line("Продолжить всё равно? (y/N): ")?;
    if matches!(answer.trim(), "y" | "Y" | "д" | "Д") {
        prefs.set_bool(SMALL_TERMINAL_ACCEPTED_KEY, true);
        Ok(true)
    } else {
        Ok(false)
    }
}

fn terminal_width() -> Option<u32> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}
