//! Dropdown widget state: a styled list bound to a selection value.
//!
//! Pure UI state, no business logic. A [`DropdownGroup`] enforces the
//! at-most-one-open rule across sibling dropdowns; closing on outside click
//! and Escape is modeled by [`DropdownGroup::close_all`] and
//! [`DropdownGroup::handle_escape`].

/// One selectable entry: the bound value plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// State of a single dropdown: its options, the selected item and whether
/// the list is open.
#[derive(Debug, Clone)]
pub struct Dropdown {
    id: String,
    options: Vec<DropdownOption>,
    selected: usize,
    open: bool,
}

impl Dropdown {
    /// Create a dropdown whose list mirrors `options` 1:1, in order.
    /// The first option starts selected.
    pub fn new(id: impl Into<String>, options: Vec<DropdownOption>) -> Self {
        Self {
            id: id.into(),
            options,
            selected: 0,
            open: false,
        }
    }

    /// Create a dropdown where each value doubles as its label.
    pub fn from_values<I, S>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                DropdownOption::new(v.clone(), v)
            })
            .collect();
        Self::new(id, options)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    /// Currently selected value, or empty when there are no options.
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// Label of the selected item, for the collapsed button text.
    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    /// Index of the visually highlighted (selected) item.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

/// A set of sibling dropdowns with at most one open at a time.
#[derive(Debug, Default)]
pub struct DropdownGroup {
    dropdowns: Vec<Dropdown>,
}

impl DropdownGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dropdown to the group.
    pub fn insert(&mut self, dropdown: Dropdown) {
        self.dropdowns.push(dropdown);
    }

    pub fn get(&self, id: &str) -> Option<&Dropdown> {
        self.dropdowns.iter().find(|d| d.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Dropdown> {
        self.dropdowns.iter_mut().find(|d| d.id == id)
    }

    /// Id of the open dropdown, if any.
    pub fn open_id(&self) -> Option<&str> {
        self.dropdowns
            .iter()
            .find(|d| d.open)
            .map(|d| d.id.as_str())
    }

    /// Toggle a dropdown. Opening one closes every sibling.
    pub fn toggle(&mut self, id: &str) {
        let was_open = self.get(id).map(|d| d.open).unwrap_or(false);
        for d in &mut self.dropdowns {
            d.open = false;
        }
        if !was_open {
            if let Some(d) = self.get_mut(id) {
                d.open = true;
            }
        }
    }

    /// Select a value in a dropdown: updates the bound value and the
    /// highlighted item, closes the dropdown, and returns the new value so
    /// the caller can fire its change callback. Unknown ids or values are
    /// no-ops.
    pub fn select(&mut self, id: &str, value: &str) -> Option<String> {
        let dropdown = self.get_mut(id)?;
        if !dropdown.select_value(value) {
            return None;
        }
        dropdown.open = false;
        Some(value.to_string())
    }

    /// Close every dropdown (outside click).
    pub fn close_all(&mut self) {
        for d in &mut self.dropdowns {
            d.open = false;
        }
    }

    /// Close the open dropdown, if any (Escape key).
    pub fn handle_escape(&mut self) {
        self.close_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn topic_group() -> DropdownGroup {
        let mut group = DropdownGroup::new();
        group.insert(Dropdown::new(
            "topic",
            vec![
                DropdownOption::new("all", "Все темы"),
                DropdownOption::new("SQL", "SQL"),
                DropdownOption::new("Python", "Python"),
            ],
        ));
        group.insert(Dropdown::from_values("level", ["all", "lvl_1", "lvl_2"]));
        group
    }

    #[test]
    fn test_first_option_starts_selected() {
        let group = topic_group();
        let topic = group.get("topic").unwrap();
        assert_eq!(topic.value(), "all");
        assert_eq!(topic.selected_label(), "Все темы");
        assert!(!topic.is_open());
    }

    #[test]
    fn test_opening_one_closes_siblings() {
        let mut group = topic_group();
        group.toggle("topic");
        assert_eq!(group.open_id(), Some("topic"));

        group.toggle("level");
        assert_eq!(group.open_id(), Some("level"));
        assert!(!group.get("topic").unwrap().is_open());
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut group = topic_group();
        group.toggle("topic");
        group.toggle("topic");
        assert_eq!(group.open_id(), None);
    }

    #[test]
    fn test_select_updates_value_and_closes() {
        let mut group = topic_group();
        group.toggle("topic");

        let changed = group.select("topic", "SQL");
        assert_eq!(changed.as_deref(), Some("SQL"));

        let topic = group.get("topic").unwrap();
        assert_eq!(topic.value(), "SQL");
        assert_eq!(topic.selected_index(), 1);
        assert!(!topic.is_open());
    }

    #[test]
    fn test_select_unknown_value_is_noop() {
        let mut group = topic_group();
        assert_eq!(group.select("topic", "Rust"), None);
        assert_eq!(group.get("topic").unwrap().value(), "all");
    }

    #[test]
    fn test_escape_closes_open_dropdown() {
        let mut group = topic_group();
        group.toggle("level");
        group.handle_escape();
        assert_eq!(group.open_id(), None);
    }

    #[test]
    fn test_outside_click_closes_all() {
        let mut group = topic_group();
        group.toggle("level");
        group.close_all();
        assert_eq!(group.open_id(), None);
    }

    #[test]
    fn test_empty_dropdown_value_is_empty() {
        let dropdown = Dropdown::new("empty", Vec::new());
        assert_eq!(dropdown.value(), "");
        assert_eq!(dropdown.selected_label(), "");
    }
}
