//! Terminal rendering and input helpers shared by the mode drivers.
//!
//! Question and answer bodies are Markdown+LaTeX and are printed as-is;
//! rendering rich text is outside this crate's scope.

pub mod blitz;
pub mod catalog;
pub mod flip;
pub mod interview;

use std::io::{self, Write};

use prepdeck_core::{Card, Dropdown, DropdownGroup, DropdownOption, Level, ALL};

/// Placeholder shown when the filtered pool has no cards.
pub const EMPTY_POOL_MESSAGE: &str = "Нет карточек для выбранной темы";

/// Prompt for one line of input.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Topic dropdown: «Все темы» first, then the topic list in order.
pub fn topic_dropdown(id: &str, topics: &[String]) -> Dropdown {
    let mut options = vec![DropdownOption::new(ALL, "Все темы")];
    options.extend(
        topics
            .iter()
            .map(|t| DropdownOption::new(t.clone(), t.clone())),
    );
    Dropdown::new(id, options)
}

/// Level dropdown: «Все уровни» plus the three tiers.
pub fn level_dropdown(id: &str) -> Dropdown {
    let mut options = vec![DropdownOption::new(ALL, "Все уровни")];
    options.extend(
        Level::ALL_LEVELS
            .iter()
            .map(|l| DropdownOption::new(l.as_str(), l.label())),
    );
    Dropdown::new(id, options)
}

/// Drive one open/select round of a dropdown.
///
/// Opening closes the siblings; an empty line acts like Escape and a bad
/// number like an outside click. Returns the newly selected value so the
/// caller can react to the change.
pub fn pick_from_dropdown(group: &mut DropdownGroup, id: &str) -> io::Result<Option<String>> {
    group.toggle(id);
    let Some(dropdown) = group.get(id) else {
        return Ok(None);
    };
    if !dropdown.is_open() {
        return Ok(None);
    }

    for (i, option) in dropdown.options().iter().enumerate() {
        let marker = if i == dropdown.selected_index() { ">" } else { " " };
        println!("  {marker} {}. {}", i + 1, option.label);
    }

    let input = read_line("Номер варианта (Enter — отмена): ")?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        group.handle_escape();
        return Ok(None);
    }

    let index = match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => {
            group.close_all();
            return Ok(None);
        }
    };
    let Some(value) = group
        .get(id)
        .and_then(|d| d.options().get(index))
        .map(|o| o.value.clone())
    else {
        group.close_all();
        return Ok(None);
    };
    Ok(group.select(id, &value))
}

/// Print a titled text block, optionally inside a decorated frame
/// (the cosmetic "glass" toggle).
pub fn print_block(title: &str, body: &str, framed: bool) {
    if framed {
        println!("┌── {title}");
        for line in body.lines() {
            println!("│ {line}");
        }
        println!("└──");
    } else {
        println!("{title}");
        println!("{body}");
    }
}

/// One-line card metadata: id, topic, level label.
pub fn card_meta_line(card: &Card) -> String {
    let topic = card.topic.as_ref().and_then(|t| t.primary()).unwrap_or("—");
    let level = card.level.map(|l| l.label()).unwrap_or("—");
    format!("{} · {topic} · {level}", card.display_id())
}
