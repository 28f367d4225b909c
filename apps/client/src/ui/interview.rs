//! Interview mode driver: written answers, external grading, final verdict.

use std::io;

use colored::{ColoredString, Colorize};

use prepdeck_core::{
    Card, DropdownGroup, InterviewState, ScoreTier, Session, SubmitError, Verdict,
    GRADING_ERROR_FEEDBACK,
};

use crate::grading::GradingClient;

use super::{pick_from_dropdown, print_block, read_line, topic_dropdown, EMPTY_POOL_MESSAGE};

pub async fn run(
    cards: &[Card],
    topics: &[String],
    grading: &GradingClient,
    framed: bool,
) -> io::Result<()> {
    let mut rng = rand::rng();
    let mut session: Session<InterviewState> = Session::new(cards.to_vec());
    let mut dropdowns = DropdownGroup::new();
    dropdowns.insert(topic_dropdown("topic", topics));

    session.next_card(&mut rng);

    loop {
        render(&session, framed);

        let input = read_line("\nинтервью (текст ответа, или :n / :f / :t / :q)> ")?;
        let input = input.trim().to_string();
        match input.as_str() {
            ":q" => break,
            ":n" => {
                if session.is_finished() {
                    println!("Интервью завершено — :f начнёт новое");
                } else {
                    session.next_card(&mut rng);
                }
            }
            ":t" => {
                if let Some(topic) = pick_from_dropdown(&mut dropdowns, "topic")? {
                    session.set_topic(topic, &mut rng);
                }
            }
            ":f" => {
                if session.is_finished() {
                    session.reset(&mut rng);
                    println!("Начато новое интервью");
                } else if session.can_finish() {
                    let verdict = session.finish();
                    print_verdict(&verdict);
                } else {
                    println!("Завершить можно после 5 отвеченных вопросов");
                }
            }
            "" => {}
            _ => submit(&mut session, grading, &input).await?,
        }
    }
    Ok(())
}

async fn submit(
    session: &mut Session<InterviewState>,
    grading: &GradingClient,
    answer: &str,
) -> io::Result<()> {
    // Snapshot the card before the await: the grade must be recorded against
    // the card the user actually answered.
    let Some(card) = session.current().cloned() else {
        return Ok(());
    };
    let ticket = match session.begin_submission(answer) {
        Ok(ticket) => ticket,
        Err(SubmitError::AlreadyAnswered) => {
            println!("Этот вопрос уже отвечен — :n возьмёт следующий");
            return Ok(());
        }
        Err(SubmitError::Finished) => {
            println!("Интервью завершено — :f начнёт новое");
            return Ok(());
        }
        Err(_) => return Ok(()),
    };

    println!("Проверка...");
    let mut result = grading.grade(&card.question, &card.answer, answer).await;

    // One user-triggered retry before the failure is recorded.
    if let Err(e) = &result {
        tracing::warn!("Grading request failed: {e}");
        let again = read_line("Не удалось проверить ответ. Повторить запрос? (y/N): ")?;
        if matches!(again.trim(), "y" | "Y" | "д" | "Д") {
            println!("Проверка...");
            result = grading.grade(&card.question, &card.answer, answer).await;
        }
    }

    match result {
        Ok(grade) => {
            if session.record_score(ticket, grade.score) != prepdeck_core::RecordOutcome::Discarded
            {
                println!("Оценка: {}", colored_score(grade.score));
                println!("{}", grade.feedback);
            }
        }
        Err(e) => {
            tracing::warn!("Grading request failed: {e}");
            session.record_failure(ticket);
            println!("Оценка: {}", colored_score(0.0));
            println!("{GRADING_ERROR_FEEDBACK}");
        }
    }
    Ok(())
}

fn render(session: &Session<InterviewState>, framed: bool) {
    println!();
    let Some(card) = session.current() else {
        println!("{EMPTY_POOL_MESSAGE}");
        return;
    };

    print_block(&format!("ВОПРОС {}", session.display_index()), &card.question, framed);

    if session.is_finished() {
        println!("  [:f — новое интервью]");
    } else if session.can_finish() {
        println!("  [:f — завершить интервью]");
    }
}

fn print_verdict(verdict: &Verdict) {
    let average = tint(verdict.average_display(), ScoreTier::for_score(verdict.average));
    println!("\nСредняя оценка: {average}");
    println!("{}", verdict.message());
}

fn colored_score(score: f64) -> ColoredString {
    // Whole scores print without a trailing .0, matching the page display.
    let text = if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    };
    tint(text, ScoreTier::for_score(score))
}

fn tint(text: String, tier: ScoreTier) -> ColoredString {
    match tier {
        ScoreTier::High => text.as_str().green(),
        ScoreTier::Medium => text.as_str().yellow(),
        ScoreTier::Low => text.as_str().red(),
        ScoreTier::Zero => text.as_str().white(),
    }
}
