use super::scale::SizeScale;
use super::simulation::{CenterForce, ChargeForce, CollideForce, Force, LinkForce, Simulation};
use super::types::Author;

pub const LINK: &str = "link";
pub const CHARGE: &str = "charge";
pub const CENTER: &str = "center";
pub const COLLIDE: &str = "collide";

/// Tunable force parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
	pub charge_strength: f64,
	pub link_strength: f64,
	pub link_distance: f64,
	pub collision_padding: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			charge_strength: -30.0,
			link_strength: 0.5,
			link_distance: 30.0,
			collision_padding: 2.0,
		}
	}
}

/// The three live controls below the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
	ForceStrength,
	CollisionRadius,
	LinkStrength,
}

/// Range input description for a [`Slider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
	pub slider: Slider,
	pub id: &'static str,
	pub label: &'static str,
	pub min: f64,
	pub max: f64,
	pub step: f64,
}

impl SliderSpec {
	/// Initial slider value, taken from the default configuration.
	pub fn initial(&self, config: &SimulationConfig) -> f64 {
		match self.slider {
			Slider::ForceStrength => config.charge_strength,
			Slider::CollisionRadius => config.collision_padding,
			Slider::LinkStrength => config.link_strength,
		}
	}
}

pub const SLIDERS: [SliderSpec; 3] = [
	SliderSpec {
		slider: Slider::ForceStrength,
		id: "force-strength",
		label: "Force strength",
		min: -100.0,
		max: 0.0,
		step: 1.0,
	},
	SliderSpec {
		slider: Slider::CollisionRadius,
		id: "collision-radius",
		label: "Collision radius",
		min: 0.0,
		max: 20.0,
		step: 1.0,
	},
	SliderSpec {
		slider: Slider::LinkStrength,
		id: "link-strength",
		label: "Link strength",
		min: 0.0,
		max: 1.0,
		step: 0.05,
	},
];

/// Collision radius per author: visual radius plus padding.
pub fn collision_radii(authors: &[Author], size: &SizeScale, padding: f64) -> Vec<f64> {
	authors
		.iter()
		.map(|a| size.radius(a.degree) + padding)
		.collect()
}

/// Build the simulation for a loaded graph: link, charge, center and
/// collide forces, registered in that order.
pub fn configure(
	authors: &[Author],
	links: Vec<(usize, usize)>,
	size: &SizeScale,
	config: &SimulationConfig,
	width: f64,
	height: f64,
) -> Simulation {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let link = LinkForce::new(
		links,
		authors.len(),
		config.link_strength,
		config.link_distance,
	);
	Simulation::new(authors.len(), cx, cy)
		.with_force(LINK, Force::Link(link))
		.with_force(CHARGE, Force::Charge(ChargeForce::new(config.charge_strength)))
		.with_force(CENTER, Force::Center(CenterForce::new(cx, cy)))
		.with_force(
			COLLIDE,
			Force::Collide(CollideForce::new(collision_radii(
				authors,
				size,
				config.collision_padding,
			))),
		)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn author(name: &str, degree: u32) -> Author {
		Author {
			name: name.into(),
			country: "FR".into(),
			affiliation: None,
			degree,
		}
	}

	#[test]
	fn configure_registers_four_forces() {
		let authors = vec![author("a", 1), author("b", 1)];
		let size = SizeScale::from_degrees([1]);
		let sim = configure(
			&authors,
			vec![(0, 1)],
			&size,
			&SimulationConfig::default(),
			800.0,
			600.0,
		);
		assert!(matches!(sim.force(LINK), Some(Force::Link(l)) if l.strength == 0.5));
		assert!(matches!(sim.force(CHARGE), Some(Force::Charge(c)) if c.strength == -30.0));
		assert!(
			matches!(sim.force(CENTER), Some(Force::Center(c)) if c.x == 400.0 && c.y == 300.0)
		);
		match sim.force(COLLIDE) {
			Some(Force::Collide(c)) => assert_eq!(c.radii, vec![9.5, 9.5]),
			other => panic!("unexpected collide force: {other:?}"),
		}
	}

	#[test]
	fn collision_radius_adds_padding_to_visual_radius() {
		let authors = vec![author("a", 1), author("b", 4)];
		let size = SizeScale::from_degrees([1, 4]);
		assert_eq!(collision_radii(&authors, &size, 5.0), vec![8.0, 17.0]);
	}

	#[test]
	fn slider_ids_match_the_page_controls() {
		let ids: Vec<&str> = SLIDERS.iter().map(|s| s.id).collect();
		assert_eq!(ids, vec!["force-strength", "collision-radius", "link-strength"]);
		assert_eq!(SLIDERS[1].slider, Slider::CollisionRadius);
	}

	#[test]
	fn slider_defaults_match_config() {
		let config = SimulationConfig::default();
		let initial: Vec<f64> = SLIDERS.iter().map(|s| s.initial(&config)).collect();
		assert_eq!(initial, vec![-30.0, 2.0, 0.5]);
		assert!(SLIDERS.iter().all(|s| s.min <= s.initial(&config) && s.initial(&config) <= s.max));
	}
}
