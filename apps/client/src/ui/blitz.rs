//! Blitz mode driver: rapid self-assessment with session statistics.

use std::io;

use prepdeck_core::{BlitzState, Card, DropdownGroup, Phase, Session};

use super::{
    card_meta_line, pick_from_dropdown, print_block, read_line, topic_dropdown, EMPTY_POOL_MESSAGE,
};

pub fn run(cards: &[Card], topics: &[String], framed: bool) -> io::Result<()> {
    let mut rng = rand::rng();
    let mut session: Session<BlitzState> = Session::new(cards.to_vec());
    let mut dropdowns = DropdownGroup::new();
    dropdowns.insert(topic_dropdown("topic", topics));

    session.next_card(&mut rng);

    loop {
        render(&session, framed);

        let input =
            read_line("\nблиц [a ответ · 1 знал · 2 не знал · n следующий · t тема · q назад]> ")?;
        match input.trim() {
            "q" => break,
            "a" => {
                if session.phase() == Phase::Ready {
                    session.toggle_answer();
                }
            }
            "1" | "2" => {
                if !session.rate(input.trim() == "1") && session.is_rated() {
                    println!("Этот вопрос уже оценён — возьмите следующий");
                }
            }
            "n" => {
                session.next_card(&mut rng);
            }
            "t" => {
                if let Some(topic) = pick_from_dropdown(&mut dropdowns, "topic")? {
                    session.set_topic(topic, &mut rng);
                }
            }
            "" => {}
            _ => println!("Неизвестная команда"),
        }
    }

    let stats = session.stats();
    println!(
        "\nИтог блица: отвечено {} · точность {}% · лучшая серия {}",
        stats.total,
        stats.accuracy(),
        stats.max_streak
    );
    Ok(())
}

fn render(session: &Session<BlitzState>, framed: bool) {
    let stats = session.stats();
    println!(
        "\nОтвечено: {} · Точность: {}% · Серия: {}",
        stats.total,
        stats.accuracy(),
        stats.max_streak
    );

    let Some(card) = session.current() else {
        println!("{EMPTY_POOL_MESSAGE}");
        return;
    };

    print_block(&card_meta_line(card), &card.question, framed);
    if session.answer_visible() {
        print_block("ОТВЕТ", &card.answer, framed);
    } else {
        println!("  [a — показать ответ]");
    }
    if session.is_rated() {
        println!("  (оценено — n для следующего вопроса)");
    }
}
