//! Flip mode driver: one random card at a time, answer on demand.

use std::io;

use prepdeck_core::{Card, DropdownGroup, FlipState, Phase, Session};

use super::{
    card_meta_line, pick_from_dropdown, print_block, read_line, topic_dropdown, EMPTY_POOL_MESSAGE,
};

pub fn run(cards: &[Card], topics: &[String], framed: bool) -> io::Result<()> {
    let mut rng = rand::rng();
    let mut session: Session<FlipState> = Session::new(cards.to_vec());
    let mut dropdowns = DropdownGroup::new();
    dropdowns.insert(topic_dropdown("topic", topics));

    session.next_card(&mut rng);

    loop {
        render(&session, framed);

        let input = read_line("\nкарточки [a ответ · n следующий · t тема · q назад]> ")?;
        match input.trim() {
            "q" => break,
            "a" => {
                if session.phase() == Phase::Ready {
                    session.toggle_answer();
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
    Ok(())
}

fn render(session: &Session<FlipState>, framed: bool) {
    println!();
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
}
