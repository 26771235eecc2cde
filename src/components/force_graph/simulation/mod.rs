//! Velocity-Verlet force layout with an alpha energy schedule.
//!
//! Each tick cools `alpha` toward `alpha_target`, lets every registered
//! force nudge node velocities, then integrates positions. Pinned nodes
//! (`fx`/`fy`) are held in place. The simulation reports itself stopped
//! once `alpha` drops below `alpha_min`; raising alpha or the target and
//! calling [`Simulation::restart`] wakes it again.

mod forces;
mod quadtree;

use std::f64::consts::PI;

pub use forces::{CenterForce, ChargeForce, CollideForce, Force, LinkForce};

pub const ALPHA_MIN: f64 = 0.001;
pub const VELOCITY_DECAY: f64 = 0.4;
const INITIAL_RADIUS: f64 = 10.0;

/// Decay that takes alpha from 1 to `ALPHA_MIN` in 300 ticks.
pub fn default_alpha_decay() -> f64 {
	1.0 - ALPHA_MIN.powf(1.0 / 300.0)
}

/// Simulated body. Position and velocity belong to the engine; `fx`/`fy`
/// override the position while set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimNode {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fx: Option<f64>,
	pub fy: Option<f64>,
}

/// Linear congruential source for separating coincident nodes.
#[derive(Clone, Debug)]
pub struct Jiggle {
	state: u64,
}

impl Default for Jiggle {
	fn default() -> Self {
		Self { state: 1 }
	}
}

impl Jiggle {
	const A: u64 = 1_664_525;
	const C: u64 = 1_013_904_223;
	const M: u64 = 1 << 32;

	fn uniform(&mut self) -> f64 {
		self.state = (Self::A * self.state + Self::C) % Self::M;
		self.state as f64 / Self::M as f64
	}

	/// A tiny signed offset, well below a pixel.
	pub fn sample(&mut self) -> f64 {
		(self.uniform() - 0.5) * 1e-6
	}
}

pub struct Simulation {
	nodes: Vec<SimNode>,
	forces: Vec<(&'static str, Force)>,
	alpha: f64,
	alpha_min: f64,
	alpha_decay: f64,
	alpha_target: f64,
	velocity_decay: f64,
	running: bool,
	jiggle: Jiggle,
}

impl Simulation {
	/// Start a simulation over `count` nodes laid out on a phyllotaxis
	/// spiral around `(cx, cy)`.
	pub fn new(count: usize, cx: f64, cy: f64) -> Self {
		let nodes = (0..count)
			.map(|i| {
				let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
				let angle = i as f64 * PI * (3.0 - 5f64.sqrt());
				SimNode {
					x: cx + radius * angle.cos(),
					y: cy + radius * angle.sin(),
					..SimNode::default()
				}
			})
			.collect();
		Self {
			nodes,
			forces: Vec::new(),
			alpha: 1.0,
			alpha_min: ALPHA_MIN,
			alpha_decay: default_alpha_decay(),
			alpha_target: 0.0,
			velocity_decay: VELOCITY_DECAY,
			running: true,
			jiggle: Jiggle::default(),
		}
	}

	/// Register `force` under `name`, replacing any force already there.
	pub fn with_force(mut self, name: &'static str, force: Force) -> Self {
		self.set_force(name, force);
		self
	}

	pub fn set_force(&mut self, name: &'static str, force: Force) {
		match self.forces.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = force,
			None => self.forces.push((name, force)),
		}
	}

	pub fn force(&self, name: &str) -> Option<&Force> {
		self.forces.iter().find(|(n, _)| *n == name).map(|(_, f)| f)
	}

	pub fn force_mut(&mut self, name: &str) -> Option<&mut Force> {
		self.forces
			.iter_mut()
			.find(|(n, _)| *n == name)
			.map(|(_, f)| f)
	}

	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	pub fn node(&self, idx: usize) -> Option<&SimNode> {
		self.nodes.get(idx)
	}

	pub fn node_mut(&mut self, idx: usize) -> Option<&mut SimNode> {
		self.nodes.get_mut(idx)
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn set_alpha(&mut self, alpha: f64) {
		self.alpha = alpha;
	}

	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn restart(&mut self) {
		self.running = true;
	}

	/// Advance one iteration regardless of the running flag.
	pub fn tick(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

		for (_, force) in &self.forces {
			force.apply(&mut self.nodes, self.alpha, &mut self.jiggle);
		}

		let keep = 1.0 - self.velocity_decay;
		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= keep;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= keep;
					node.y += node.vy;
				}
			}
		}
	}

	/// One animation-frame step: tick while running, stop once cooled.
	pub fn step(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.tick();
		if self.alpha < self.alpha_min {
			self.running = false;
		}
		true
	}
}
