//! Hover and selection state for the diagram view.

/// Discrete interaction event reported to the hosting page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramEvent {
	HoverChanged(Option<String>),
	SelectionChanged(Option<String>),
}

/// Process-local UI state. Both fields reset when the view remounts and
/// are never persisted.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
	hovered: Option<String>,
	selected: Option<String>,
}

impl SelectionState {
	pub fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Pointer entered a node. The last-entered node wins under rapid
	/// movement; re-entering the current node emits nothing.
	pub fn pointer_enter(&mut self, id: &str) -> Option<DiagramEvent> {
		if self.hovered.as_deref() == Some(id) {
			return None;
		}
		self.hovered = Some(id.to_string());
		Some(DiagramEvent::HoverChanged(self.hovered.clone()))
	}

	/// Pointer left a node. Only clears when the leaving node is still
	/// the hovered one, so a stale leave cannot undo a later enter.
	pub fn pointer_leave(&mut self, id: &str) -> Option<DiagramEvent> {
		if self.hovered.as_deref() != Some(id) {
			return None;
		}
		self.hovered = None;
		Some(DiagramEvent::HoverChanged(None))
	}

	/// A node was clicked. The selection always moves to the clicked
	/// node; re-clicking the selected node keeps it selected.
	pub fn click(&mut self, id: &str) -> DiagramEvent {
		self.selected = Some(id.to_string());
		DiagramEvent::SelectionChanged(self.selected.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_with_nothing_hovered_or_selected() {
		let state = SelectionState::default();
		assert_eq!(state.hovered(), None);
		assert_eq!(state.selected(), None);
	}

	#[test]
	fn last_click_wins() {
		let mut state = SelectionState::default();
		state.click("a");
		let event = state.click("b");
		assert_eq!(state.selected(), Some("b"));
		assert_eq!(event, DiagramEvent::SelectionChanged(Some("b".into())));
	}

	#[test]
	fn reclick_keeps_selection_and_still_notifies() {
		let mut state = SelectionState::default();
		state.click("a");
		let event = state.click("a");
		assert_eq!(state.selected(), Some("a"));
		assert_eq!(event, DiagramEvent::SelectionChanged(Some("a".into())));
	}

	#[test]
	fn enter_supersedes_prior_hover() {
		let mut state = SelectionState::default();
		state.pointer_enter("a");
		state.pointer_enter("b");
		assert_eq!(state.hovered(), Some("b"));
	}

	#[test]
	fn stale_leave_is_ignored() {
		let mut state = SelectionState::default();
		state.pointer_enter("a");
		state.pointer_enter("b");
		// Leave for "a" arrives after the pointer already entered "b"
		assert_eq!(state.pointer_leave("a"), None);
		assert_eq!(state.hovered(), Some("b"));
	}

	#[test]
	fn leave_clears_current_hover() {
		let mut state = SelectionState::default();
		state.pointer_enter("a");
		let event = state.pointer_leave("a");
		assert_eq!(state.hovered(), None);
		assert_eq!(event, Some(DiagramEvent::HoverChanged(None)));
	}

	#[test]
	fn reentering_current_node_emits_nothing() {
		let mut state = SelectionState::default();
		assert!(state.pointer_enter("a").is_some());
		assert!(state.pointer_enter("a").is_none());
	}

	#[test]
	fn hover_does_not_touch_selection() {
		let mut state = SelectionState::default();
		state.click("a");
		state.pointer_enter("b");
		state.pointer_leave("b");
		assert_eq!(state.selected(), Some("a"));
	}
}
