use super::quadtree::QuadNode;
use super::{Jiggle, SimNode};

/// Spring between linked nodes, pulling them toward `distance`.
#[derive(Clone, Debug)]
pub struct LinkForce {
	links: Vec<(usize, usize)>,
	bias: Vec<f64>,
	pub strength: f64,
	pub distance: f64,
}

impl LinkForce {
	pub fn new(links: Vec<(usize, usize)>, node_count: usize, strength: f64, distance: f64) -> Self {
		let mut count = vec![0u32; node_count];
		for &(s, t) in &links {
			count[s] += 1;
			count[t] += 1;
		}
		let bias = links
			.iter()
			.map(|&(s, t)| count[s] as f64 / (count[s] + count[t]) as f64)
			.collect();
		Self {
			links,
			bias,
			strength,
			distance,
		}
	}

	pub fn links(&self) -> &[(usize, usize)] {
		&self.links
	}

	fn apply(&self, nodes: &mut [SimNode], alpha: f64, jiggle: &mut Jiggle) {
		for (&(s, t), &b) in self.links.iter().zip(&self.bias) {
			let (src, tgt) = (nodes[s], nodes[t]);
			let mut x = tgt.x + tgt.vx - src.x - src.vx;
			let mut y = tgt.y + tgt.vy - src.y - src.vy;
			if x == 0.0 {
				x = jiggle.sample();
			}
			if y == 0.0 {
				y = jiggle.sample();
			}
			let len = (x * x + y * y).sqrt();
			let l = (len - self.distance) / len * alpha * self.strength;
			x *= l;
			y *= l;
			nodes[t].vx -= x * b;
			nodes[t].vy -= y * b;
			nodes[s].vx += x * (1.0 - b);
			nodes[s].vy += y * (1.0 - b);
		}
	}
}

/// Many-body charge; negative strength repels. Distant groups of nodes
/// are approximated by their quadtree cell once `side / distance` falls
/// below `theta`, so a `theta` of zero sums every pair exactly.
#[derive(Clone, Debug)]
pub struct ChargeForce {
	pub strength: f64,
	pub distance_min2: f64,
	pub theta: f64,
}

impl ChargeForce {
	pub fn new(strength: f64) -> Self {
		Self {
			strength,
			distance_min2: 1.0,
			theta: 0.9,
		}
	}

	fn apply(&self, nodes: &mut [SimNode], alpha: f64, jiggle: &mut Jiggle) {
		let Some(tree) = QuadNode::build(nodes) else {
			return;
		};
		let theta2 = self.theta * self.theta;
		for i in 0..nodes.len() {
			let mut dv = (0.0, 0.0);
			self.accumulate(&tree, i, nodes, alpha * self.strength, theta2, jiggle, &mut dv);
			nodes[i].vx += dv.0;
			nodes[i].vy += dv.1;
		}
	}

	#[allow(clippy::too_many_arguments)]
	fn accumulate(
		&self,
		quad: &QuadNode,
		i: usize,
		nodes: &[SimNode],
		weight: f64,
		theta2: f64,
		jiggle: &mut Jiggle,
		dv: &mut (f64, f64),
	) {
		let (px, py) = (nodes[i].x, nodes[i].y);
		if quad.is_leaf() {
			for &j in quad.indices.iter().filter(|&&j| j != i) {
				self.pull(nodes[j].x - px, nodes[j].y - py, weight, jiggle, dv);
			}
			return;
		}

		let (x, y) = (quad.x - px, quad.y - py);
		let side = quad.bounds.side();
		if !quad.bounds.contains(px, py) && side * side < theta2 * (x * x + y * y) {
			self.pull(x, y, weight * quad.mass, jiggle, dv);
			return;
		}
		for child in quad.children.iter().flatten() {
			self.accumulate(child, i, nodes, weight, theta2, jiggle, dv);
		}
	}

	fn pull(&self, mut x: f64, mut y: f64, weight: f64, jiggle: &mut Jiggle, dv: &mut (f64, f64)) {
		let mut l = x * x + y * y;
		if x == 0.0 {
			x = jiggle.sample();
			l += x * x;
		}
		if y == 0.0 {
			y = jiggle.sample();
			l += y * y;
		}
		if l < self.distance_min2 {
			l = (self.distance_min2 * l).sqrt();
		}
		let w = weight / l;
		dv.0 += x * w;
		dv.1 += y * w;
	}
}

/// Translates the whole layout so its mean sits on `(x, y)`.
#[derive(Clone, Debug)]
pub struct CenterForce {
	pub x: f64,
	pub y: f64,
	pub strength: f64,
}

impl CenterForce {
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			strength: 1.0,
		}
	}

	fn apply(&self, nodes: &mut [SimNode]) {
		if nodes.is_empty() {
			return;
		}
		let n = nodes.len() as f64;
		let (sx, sy) = nodes
			.iter()
			.fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
		let (dx, dy) = (
			(sx / n - self.x) * self.strength,
			(sy / n - self.y) * self.strength,
		);
		for node in nodes.iter_mut() {
			node.x -= dx;
			node.y -= dy;
		}
	}
}

/// Keeps circles of per-node radius from overlapping.
#[derive(Clone, Debug)]
pub struct CollideForce {
	pub radii: Vec<f64>,
	pub strength: f64,
}

impl CollideForce {
	pub fn new(radii: Vec<f64>) -> Self {
		Self {
			radii,
			strength: 1.0,
		}
	}

	fn apply(&self, nodes: &mut [SimNode], jiggle: &mut Jiggle) {
		let n = nodes.len().min(self.radii.len());
		for i in 0..n {
			let ri = self.radii[i];
			let ri2 = ri * ri;
			let xi = nodes[i].x + nodes[i].vx;
			let yi = nodes[i].y + nodes[i].vy;
			for j in (i + 1)..n {
				let rj = self.radii[j];
				let r = ri + rj;
				let mut x = xi - nodes[j].x - nodes[j].vx;
				let mut y = yi - nodes[j].y - nodes[j].vy;
				let mut l = x * x + y * y;
				if l >= r * r {
					continue;
				}
				if x == 0.0 {
					x = jiggle.sample();
					l += x * x;
				}
				if y == 0.0 {
					y = jiggle.sample();
					l += y * y;
				}
				let dist = l.sqrt();
				let push = (r - dist) / dist * self.strength;
				let rj2 = rj * rj;
				let k = rj2 / (ri2 + rj2);
				x *= push;
				y *= push;
				nodes[i].vx += x * k;
				nodes[i].vy += y * k;
				nodes[j].vx -= x * (1.0 - k);
				nodes[j].vy -= y * (1.0 - k);
			}
		}
	}
}

/// A named force registered on the simulation.
#[derive(Clone, Debug)]
pub enum Force {
	Link(LinkForce),
	Charge(ChargeForce),
	Center(CenterForce),
	Collide(CollideForce),
}

impl Force {
	pub(super) fn apply(&self, nodes: &mut [SimNode], alpha: f64, jiggle: &mut Jiggle) {
		match self {
			Self::Link(f) => f.apply(nodes, alpha, jiggle),
			Self::Charge(f) => f.apply(nodes, alpha, jiggle),
			Self::Center(f) => f.apply(nodes),
			Self::Collide(f) => f.apply(nodes, jiggle),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(x: f64, y: f64) -> SimNode {
		SimNode {
			x,
			y,
			..SimNode::default()
		}
	}

	#[test]
	fn link_pulls_distant_nodes_together() {
		let mut nodes = vec![at(0.0, 0.0), at(100.0, 0.0)];
		let force = LinkForce::new(vec![(0, 1)], 2, 0.5, 30.0);
		force.apply(&mut nodes, 1.0, &mut Jiggle::default());
		assert!(nodes[0].vx > 0.0);
		assert!(nodes[1].vx < 0.0);
		assert!((nodes[0].vx + nodes[1].vx).abs() < 1e-9);
	}

	#[test]
	fn link_bias_favours_the_busier_endpoint() {
		// node 0 has three links, node 1 only one: node 1 moves more
		let mut nodes = vec![at(0.0, 0.0), at(100.0, 0.0), at(0.0, 50.0), at(0.0, -50.0)];
		let force = LinkForce::new(vec![(0, 1), (0, 2), (0, 3)], 4, 1.0, 30.0);
		assert_eq!(force.bias[0], 0.75);
		force.apply(&mut nodes, 1.0, &mut Jiggle::default());
		assert!(nodes[1].vx.abs() > nodes[0].vx.abs());
	}

	#[test]
	fn negative_charge_repels() {
		let mut nodes = vec![at(0.0, 0.0), at(10.0, 0.0)];
		ChargeForce::new(-30.0).apply(&mut nodes, 1.0, &mut Jiggle::default());
		assert!(nodes[0].vx < 0.0);
		assert!(nodes[1].vx > 0.0);
		assert!((nodes[0].vx + 3.0).abs() < 1e-6);
	}

	#[test]
	fn far_cluster_is_approximated_by_its_centre() {
		let mut cluster: Vec<SimNode> = (0..48)
			.map(|i| at(1000.0 + (i % 7) as f64, 1000.0 + (i / 7) as f64))
			.collect();
		cluster.push(at(0.0, 0.0));
		let mut approx = cluster.clone();
		let mut exact = cluster;

		ChargeForce::new(-30.0).apply(&mut approx, 1.0, &mut Jiggle::default());
		let pairwise = ChargeForce {
			theta: 0.0,
			..ChargeForce::new(-30.0)
		};
		pairwise.apply(&mut exact, 1.0, &mut Jiggle::default());

		let (a, e) = (approx[48], exact[48]);
		assert!(e.vx < 0.0 && e.vy < 0.0);
		assert!(((a.vx - e.vx) / e.vx).abs() < 1e-3);
		assert!(((a.vy - e.vy) / e.vy).abs() < 1e-3);
	}

	#[test]
	fn center_moves_mean_onto_target() {
		let mut nodes = vec![at(0.0, 0.0), at(10.0, 20.0)];
		CenterForce::new(100.0, 100.0).apply(&mut nodes);
		let mean_x = (nodes[0].x + nodes[1].x) / 2.0;
		let mean_y = (nodes[0].y + nodes[1].y) / 2.0;
		assert!((mean_x - 100.0).abs() < 1e-9);
		assert!((mean_y - 100.0).abs() < 1e-9);
	}

	#[test]
	fn collide_separates_overlapping_circles() {
		let mut nodes = vec![at(0.0, 0.0), at(4.0, 0.0)];
		CollideForce::new(vec![5.0, 5.0]).apply(&mut nodes, &mut Jiggle::default());
		assert!((nodes[0].vx + 3.0).abs() < 1e-6);
		assert!((nodes[1].vx - 3.0).abs() < 1e-6);
	}

	#[test]
	fn collide_ignores_distant_circles() {
		let mut nodes = vec![at(0.0, 0.0), at(40.0, 0.0)];
		CollideForce::new(vec![5.0, 5.0]).apply(&mut nodes, &mut Jiggle::default());
		assert_eq!(nodes[0].vx, 0.0);
		assert_eq!(nodes[1].vx, 0.0);
	}
}
