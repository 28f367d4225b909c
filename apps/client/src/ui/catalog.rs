//! Catalog browsing driver: the filtered card list with aggregate counts.

use std::io;

use prepdeck_core::{Card, Catalog, DropdownGroup};

use super::{card_meta_line, level_dropdown, pick_from_dropdown, print_block, read_line, topic_dropdown};

pub fn run(cards: &[Card], topics: &[String], framed: bool) -> io::Result<()> {
    let mut catalog = Catalog::new();
    let mut dropdowns = DropdownGroup::new();
    dropdowns.insert(topic_dropdown("topic", topics));
    dropdowns.insert(level_dropdown("level"));

    loop {
        render(&catalog, cards, framed);

        let input = read_line(
            "\nкаталог [t тема · l уровень · /текст поиск · o <id> ответ · c сброс поиска · q назад]> ",
        )?;
        let input = input.trim();
        match input {
            "q" => break,
            "t" => {
                if let Some(topic) = pick_from_dropdown(&mut dropdowns, "topic")? {
                    catalog.set_topic(topic);
                }
            }
            "l" => {
                if let Some(level) = pick_from_dropdown(&mut dropdowns, "level")? {
                    catalog.set_level(level);
                }
            }
            "c" => catalog.set_search(""),
            _ if input.starts_with('/') => {
                catalog.set_search(input.trim_start_matches('/').to_string());
            }
            _ if input.starts_with("o ") => {
                match input[2..].trim().parse::<i64>() {
                    Ok(id) => {
                        catalog.toggle_answer(id);
                    }
                    Err(_) => println!("Нужен номер карточки, например: o 12"),
                }
            }
            "" => {}
            _ => println!("Неизвестная команда"),
        }
    }
    Ok(())
}

fn render(catalog: &Catalog, cards: &[Card], framed: bool) {
    let view = catalog.view(cards);
    let stats = view.stats;

    println!(
        "\n{} из {} карточек · Easy {} · Medium {} · Hard {}",
        stats.matching, stats.total, stats.by_level[0], stats.by_level[1], stats.by_level[2]
    );

    if view.cards.is_empty() {
        println!("Ничего не найдено");
        return;
    }

    for card in &view.cards {
        println!();
        print_block(&card_meta_line(card), &card.question, framed);
        if catalog.is_revealed(card.id) {
            print_block("ОТВЕТ", &card.answer, framed);
        } else {
            println!("  [o {} — показать ответ]", card.id);
        }
    }
}
