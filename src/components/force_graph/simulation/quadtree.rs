use super::SimNode;

const LEAF_CAPACITY: usize = 12;
const MAX_DEPTH: usize = 10;

#[derive(Clone, Copy, Debug)]
pub(super) struct QuadBounds {
	cx: f64,
	cy: f64,
	half_extent: f64,
}

impl QuadBounds {
	fn around(nodes: &[SimNode]) -> Option<Self> {
		let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
		let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
		for node in nodes {
			min_x = min_x.min(node.x);
			min_y = min_y.min(node.y);
			max_x = max_x.max(node.x);
			max_y = max_y.max(node.y);
		}
		if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
			return None;
		}

		let span = (max_x - min_x).max(max_y - min_y).max(1.0);
		Some(Self {
			cx: (min_x + max_x) * 0.5,
			cy: (min_y + max_y) * 0.5,
			half_extent: span * 0.5 + 1.0,
		})
	}

	pub(super) fn contains(self, x: f64, y: f64) -> bool {
		(x - self.cx).abs() <= self.half_extent && (y - self.cy).abs() <= self.half_extent
	}

	pub(super) fn side(self) -> f64 {
		self.half_extent * 2.0
	}

	fn child(self, quadrant: usize) -> Self {
		let quarter = self.half_extent * 0.5;
		let (ox, oy) = match quadrant {
			0 => (-quarter, -quarter),
			1 => (quarter, -quarter),
			2 => (-quarter, quarter),
			_ => (quarter, quarter),
		};
		Self {
			cx: self.cx + ox,
			cy: self.cy + oy,
			half_extent: quarter,
		}
	}

	fn quadrant_for(self, x: f64, y: f64) -> usize {
		match (x >= self.cx, y >= self.cy) {
			(false, false) => 0,
			(true, false) => 1,
			(false, true) => 2,
			(true, true) => 3,
		}
	}
}

/// Barnes-Hut cell: bounds, node count and mean position of everything
/// below it. Only leaves keep their node indices.
pub(super) struct QuadNode {
	pub(super) bounds: QuadBounds,
	pub(super) x: f64,
	pub(super) y: f64,
	pub(super) mass: f64,
	pub(super) indices: Vec<usize>,
	pub(super) children: [Option<Box<QuadNode>>; 4],
}

impl QuadNode {
	pub(super) fn build(nodes: &[SimNode]) -> Option<Self> {
		let bounds = QuadBounds::around(nodes)?;
		Some(Self::build_node(bounds, (0..nodes.len()).collect(), nodes, 0))
	}

	fn build_node(bounds: QuadBounds, indices: Vec<usize>, nodes: &[SimNode], depth: usize) -> Self {
		let (sx, sy) = indices
			.iter()
			.fold((0.0, 0.0), |(sx, sy), &i| (sx + nodes[i].x, sy + nodes[i].y));
		let mass = indices.len() as f64;
		let (x, y) = if mass > 0.0 {
			(sx / mass, sy / mass)
		} else {
			(bounds.cx, bounds.cy)
		};

		let mut quad = Self {
			bounds,
			x,
			y,
			mass,
			indices,
			children: std::array::from_fn(|_| None),
		};
		if depth >= MAX_DEPTH || quad.indices.len() <= LEAF_CAPACITY {
			return quad;
		}

		// coincident points never split
		let first = nodes[quad.indices[0]];
		if quad
			.indices
			.iter()
			.all(|&i| nodes[i].x == first.x && nodes[i].y == first.y)
		{
			return quad;
		}

		let mut buckets = std::array::from_fn::<_, 4, _>(|_| Vec::new());
		for &i in &quad.indices {
			buckets[bounds.quadrant_for(nodes[i].x, nodes[i].y)].push(i);
		}

		for (quadrant, bucket) in buckets.into_iter().enumerate() {
			if bucket.is_empty() {
				continue;
			}
			quad.children[quadrant] = Some(Box::new(Self::build_node(
				bounds.child(quadrant),
				bucket,
				nodes,
				depth + 1,
			)));
		}
		quad.indices.clear();
		quad
	}

	pub(super) fn is_leaf(&self) -> bool {
		self.children.iter().all(Option::is_none)
	}
}
