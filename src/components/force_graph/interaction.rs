use super::config::Slider;
use super::types::Author;

/// Shown in place of a missing affiliation.
pub const AFFILIATION_FALLBACK: &str = "Not provided";

/// Offset of the tooltip from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET: f64 = 5.0;

/// Opacity of nodes outside the hovered node's country.
pub const DIMMED_OPACITY: f64 = 0.2;

/// Pointer location in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	pub page_x: f64,
	pub page_y: f64,
}

/// What the tooltip is currently describing.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipContent {
	/// Hover summary.
	Summary {
		name: String,
		country: String,
		degree: u32,
	},
	/// Click details.
	Detail {
		name: String,
		country: String,
		affiliation: Option<String>,
	},
}

impl TooltipContent {
	pub fn summary(author: &Author) -> Self {
		Self::Summary {
			name: author.name.clone(),
			country: author.country.clone(),
			degree: author.degree,
		}
	}

	pub fn detail(author: &Author) -> Self {
		Self::Detail {
			name: author.name.clone(),
			country: author.country.clone(),
			affiliation: author.affiliation.clone(),
		}
	}

	pub fn title(&self) -> &str {
		match self {
			Self::Summary { name, .. } | Self::Detail { name, .. } => name,
		}
	}

	/// Body lines under the title.
	pub fn lines(&self) -> Vec<String> {
		match self {
			Self::Summary {
				country, degree, ..
			} => vec![
				format!("Country: {country}"),
				format!("Connections: {degree}"),
			],
			Self::Detail {
				country,
				affiliation,
				..
			} => vec![
				format!("Country: {country}"),
				format!(
					"Affiliation: {}",
					affiliation
						.as_deref()
						.filter(|a| !a.is_empty())
						.unwrap_or(AFFILIATION_FALLBACK)
				),
			],
		}
	}
}

/// Floating tooltip: hidden while `content` is `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
	pub content: Option<TooltipContent>,
	pub left: f64,
	pub top: f64,
}

impl Tooltip {
	pub fn is_visible(&self) -> bool {
		self.content.is_some()
	}

	pub fn show(&mut self, content: TooltipContent) {
		self.content = Some(content);
	}

	pub fn follow(&mut self, pointer: Pointer) {
		self.left = pointer.page_x + TOOLTIP_OFFSET;
		self.top = pointer.page_y + TOOLTIP_OFFSET;
	}

	pub fn hide(&mut self) {
		self.content = None;
	}
}

/// Everything the canvas forwards from the DOM. Node arguments are
/// indices into the loaded author list; unknown indices are ignored.
pub trait InteractionHandler {
	/// Pointer entered `node`.
	fn on_hover(&mut self, node: usize, pointer: Pointer);
	/// Pointer moved anywhere over the canvas.
	fn on_pointer_move(&mut self, pointer: Pointer);
	/// Pointer left the hovered node.
	fn on_hover_end(&mut self);
	/// `node` was clicked without being dragged.
	fn on_click(&mut self, node: usize, pointer: Pointer);
	/// Pointer pressed on `node` at graph position `(x, y)`.
	fn on_drag_start(&mut self, node: usize, x: f64, y: f64);
	/// Dragged node follows the pointer, in graph coordinates, keeping the
	/// offset it had from the pointer when pressed.
	fn on_drag_move(&mut self, x: f64, y: f64);
	/// Pointer released.
	fn on_drag_end(&mut self);
	/// A force slider moved to `value`.
	fn on_slider_change(&mut self, slider: Slider, value: f64);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn author(affiliation: Option<&str>) -> Author {
		Author {
			name: "m. curie".into(),
			country: "France".into(),
			affiliation: affiliation.map(Into::into),
			degree: 3,
		}
	}

	#[test]
	fn summary_lists_country_and_connections() {
		let content = TooltipContent::summary(&author(None));
		assert_eq!(content.title(), "m. curie");
		assert_eq!(content.lines(), vec!["Country: France", "Connections: 3"]);
	}

	#[test]
	fn detail_falls_back_when_affiliation_missing() {
		let lines = TooltipContent::detail(&author(None)).lines();
		assert_eq!(lines[1], "Affiliation: Not provided");
		let lines = TooltipContent::detail(&author(Some(""))).lines();
		assert_eq!(lines[1], "Affiliation: Not provided");
		let lines = TooltipContent::detail(&author(Some("Sorbonne, Paris, France"))).lines();
		assert_eq!(lines[1], "Affiliation: Sorbonne, Paris, France");
	}

	#[test]
	fn tooltip_follows_pointer_with_offset() {
		let mut tooltip = Tooltip::default();
		tooltip.follow(Pointer {
			page_x: 10.0,
			page_y: 20.0,
		});
		assert_eq!((tooltip.left, tooltip.top), (15.0, 25.0));
		assert!(!tooltip.is_visible());
	}
}
