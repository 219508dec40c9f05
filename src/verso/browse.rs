//! State machine behind the interactive browse session.
//!
//! The machine is pure: one key in, one state change out, no terminal
//! access. The binary owns the event loop and rendering around it.

use console::Key;

use crate::filter::TagFilter;

/// Which pane has the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    List,
    Detail,
}

/// Interactive session state.
#[derive(Debug, Default)]
pub struct BrowseState {
    pub pane: Pane,
    pub query: String,
    /// 0 selects no tag; 1..=N selects the Nth catalog tag.
    pub tag_cursor: usize,
    /// Position in the filtered list.
    pub selected: usize,
    /// Id of the poem open in the detail pane.
    pub open: Option<String>,
    pub quit: bool,
}

impl BrowseState {
    /// The tag filter the cursor currently points at.
    pub fn tag_filter(&self, tags: &[String]) -> TagFilter {
        match self.tag_cursor.checked_sub(1).and_then(|i| tags.get(i)) {
            Some(tag) => TagFilter::Tag(tag.clone()),
            None => TagFilter::All,
        }
    }

    /// Feeds one key press. `filtered_ids` is the filtered list the user is
    /// looking at, `tag_count` the number of catalog tags.
    ///
    /// Query and tag keys always edit the pending filter, even while the
    /// detail pane is open; the open poem changes only through Enter and
    /// Escape.
    pub fn handle(&mut self, key: Key, tag_count: usize, filtered_ids: &[String]) {
        match key {
            Key::Char(c) if !c.is_control() => self.query.push(c),
            Key::Backspace => {
                self.query.pop();
            }
            Key::Tab => self.tag_cursor = (self.tag_cursor + 1) % (tag_count + 1),
            Key::ArrowUp => self.selected = self.selected.saturating_sub(1),
            Key::ArrowDown => {
                if self.selected + 1 < filtered_ids.len() {
                    self.selected += 1;
                }
            }
            Key::Enter => {
                if self.pane == Pane::List {
                    if let Some(id) = filtered_ids.get(self.selected) {
                        self.open = Some(id.clone());
                        self.pane = Pane::Detail;
                    }
                }
            }
            Key::Escape => match self.pane {
                Pane::Detail => {
                    self.open = None;
                    self.pane = Pane::List;
                }
                Pane::List => self.quit = true,
            },
            _ => {}
        }
    }

    /// Clamps the selection into a filtered list of `visible` entries.
    /// Called after every re-filter so a shrinking list cannot strand the
    /// cursor.
    pub fn clamp_selection(&mut self, visible: usize) {
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn catalog_tags() -> Vec<String> {
        vec!["fog".to_string(), "rain".to_string()]
    }

    #[test]
    fn test_enter_opens_detail_for_selected() {
        let mut state = BrowseState::default();
        let list = ids(&["a", "b"]);
        state.handle(Key::ArrowDown, 0, &list);
        state.handle(Key::Enter, 0, &list);
        assert_eq!(state.pane, Pane::Detail);
        assert_eq!(state.open.as_deref(), Some("b"));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut state = BrowseState::default();
        state.handle(Key::Enter, 0, &[]);
        assert_eq!(state.pane, Pane::List);
        assert!(state.open.is_none());
    }

    #[test]
    fn test_escape_in_detail_returns_to_list() {
        let mut state = BrowseState::default();
        let list = ids(&["a"]);
        state.handle(Key::Enter, 0, &list);
        state.handle(Key::Escape, 0, &list);
        assert_eq!(state.pane, Pane::List);
        assert!(state.open.is_none());
        assert!(!state.quit);
    }

    #[test]
    fn test_escape_in_list_quits() {
        let mut state = BrowseState::default();
        state.handle(Key::Escape, 0, &ids(&["a"]));
        assert!(state.quit);
    }

    #[test]
    fn test_typing_builds_the_query() {
        let mut state = BrowseState::default();
        let list = ids(&["a"]);
        state.handle(Key::Char('r'), 0, &list);
        state.handle(Key::Char('a'), 0, &list);
        assert_eq!(state.query, "ra");
        state.handle(Key::Backspace, 0, &list);
        assert_eq!(state.query, "r");
    }

    #[test]
    fn test_typing_while_detail_open_keeps_it_open() {
        let mut state = BrowseState::default();
        let list = ids(&["a"]);
        state.handle(Key::Enter, 0, &list);
        state.handle(Key::Char('x'), 0, &list);
        state.handle(Key::Tab, 2, &list);
        assert_eq!(state.pane, Pane::Detail);
        assert_eq!(state.open.as_deref(), Some("a"));
        assert_eq!(state.query, "x");
        assert_eq!(state.tag_cursor, 1);
    }

    #[test]
    fn test_tab_cycles_tags_and_wraps_to_all() {
        let mut state = BrowseState::default();
        let tags = catalog_tags();
        let list = ids(&["a"]);
        assert_eq!(state.tag_filter(&tags), TagFilter::All);
        state.handle(Key::Tab, 2, &list);
        assert_eq!(state.tag_filter(&tags), TagFilter::Tag("fog".into()));
        state.handle(Key::Tab, 2, &list);
        assert_eq!(state.tag_filter(&tags), TagFilter::Tag("rain".into()));
        state.handle(Key::Tab, 2, &list);
        assert_eq!(state.tag_filter(&tags), TagFilter::All);
    }

    #[test]
    fn test_tab_with_no_tags_stays_on_all() {
        let mut state = BrowseState::default();
        state.handle(Key::Tab, 0, &ids(&["a"]));
        assert_eq!(state.tag_filter(&[]), TagFilter::All);
    }

    #[test]
    fn test_arrows_stay_in_bounds() {
        let mut state = BrowseState::default();
        let list = ids(&["a", "b"]);
        state.handle(Key::ArrowUp, 0, &list);
        assert_eq!(state.selected, 0);
        state.handle(Key::ArrowDown, 0, &list);
        state.handle(Key::ArrowDown, 0, &list);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_selection_clamps_when_list_shrinks() {
        let mut state = BrowseState::default();
        state.selected = 4;
        state.clamp_selection(2);
        assert_eq!(state.selected, 1);
        state.clamp_selection(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_control_characters_never_reach_the_query() {
        let mut state = BrowseState::default();
        state.handle(Key::Char('\u{3}'), 0, &ids(&["a"]));
        assert!(state.query.is_empty());
    }
}
