//! Visual scales: node radius from degree, fill color from country.

/// The ten category colors, in assignment order.
pub const CATEGORY10: [&str; 10] = [
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Legend swatch for the catch-all country bucket.
pub const OTHER_COUNTRY: &str = "Other";
pub const OTHER_LEGEND_COLOR: &str = "#A9A9A9";

pub const MIN_RADIUS: f64 = 3.0;
pub const MAX_RADIUS: f64 = 12.0;

/// Square-root scale from a degree extent onto `[MIN_RADIUS, MAX_RADIUS]`,
/// so node area grows linearly with degree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl SizeScale {
	pub fn new(min: u32, max: u32) -> Self {
		Self {
			domain: ((min as f64).sqrt(), (max as f64).sqrt()),
			range: (MIN_RADIUS, MAX_RADIUS),
		}
	}

	/// Build from observed degrees. No degrees yields the extent `[0, 0]`.
	pub fn from_degrees(degrees: impl IntoIterator<Item = u32>) -> Self {
		let extent = degrees.into_iter().fold(None, |acc, d| match acc {
			None => Some((d, d)),
			Some((lo, hi)) => Some((u32::min(lo, d), u32::max(hi, d))),
		});
		let (min, max) = extent.unwrap_or((0, 0));
		Self::new(min, max)
	}

	pub fn radius(&self, degree: u32) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let span = d1 - d0;
		// degenerate extent: every value lands mid-range
		let t = if span == 0.0 {
			0.5
		} else {
			((degree as f64).sqrt() - d0) / span
		};
		r0 + t * (r1 - r0)
	}
}

/// Ordinal mapping from country to a category color, assigned in
/// first-seen order and cycling after ten.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorScale {
	domain: Vec<String>,
}

impl ColorScale {
	pub fn from_countries<'a>(countries: impl IntoIterator<Item = &'a str>) -> Self {
		let mut scale = Self::default();
		for country in countries {
			scale.extend(country);
		}
		scale
	}

	/// Append `country` to the domain if it is new, returning its slot.
	pub fn extend(&mut self, country: &str) -> usize {
		match self.position(country) {
			Some(i) => i,
			None => {
				self.domain.push(country.to_string());
				self.domain.len() - 1
			}
		}
	}

	/// Distinct countries in assignment order.
	pub fn domain(&self) -> &[String] {
		&self.domain
	}

	/// Fill color for `country`. A country outside the domain gets the
	/// color it would receive if appended next.
	pub fn color(&self, country: &str) -> &'static str {
		let slot = self.position(country).unwrap_or(self.domain.len());
		CATEGORY10[slot % CATEGORY10.len()]
	}

	/// Swatch color shown in the legend.
	pub fn legend_color(&self, country: &str) -> &'static str {
		if country == OTHER_COUNTRY {
			OTHER_LEGEND_COLOR
		} else {
			self.color(country)
		}
	}

	fn position(&self, country: &str) -> Option<usize> {
		self.domain.iter().position(|c| c == country)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn size_scale_maps_extent_to_range() {
		let scale = SizeScale::from_degrees([1, 4, 9, 16]);
		assert_eq!(scale.radius(1), MIN_RADIUS);
		assert_eq!(scale.radius(16), MAX_RADIUS);
		// sqrt(9) = 3 is two thirds of the way from 1 to 4
		assert!((scale.radius(9) - 9.0).abs() < 1e-9);
	}

	#[test]
	fn size_scale_is_monotonic() {
		let scale = SizeScale::from_degrees([0, 50]);
		let radii: Vec<f64> = (0..=50).map(|d| scale.radius(d)).collect();
		assert!(radii.windows(2).all(|w| w[0] <= w[1]));
		assert_eq!(radii[0], 3.0);
		assert_eq!(radii[50], 12.0);
	}

	#[test]
	fn degenerate_extent_uses_mid_range() {
		assert_eq!(SizeScale::from_degrees([4, 4]).radius(4), 7.5);
		assert_eq!(SizeScale::from_degrees(std::iter::empty()).radius(0), 7.5);
	}

	#[test]
	fn colors_follow_first_seen_order() {
		let scale = ColorScale::from_countries(["FR", "DE", "FR", "US"]);
		assert_eq!(scale.domain(), ["FR", "DE", "US"]);
		assert_eq!(scale.color("FR"), CATEGORY10[0]);
		assert_eq!(scale.color("DE"), CATEGORY10[1]);
		assert_eq!(scale.color("US"), CATEGORY10[2]);
	}

	#[test]
	fn colors_cycle_after_ten() {
		let names: Vec<String> = (0..12).map(|i| format!("C{i}")).collect();
		let scale = ColorScale::from_countries(names.iter().map(String::as_str));
		assert_eq!(scale.color("C10"), scale.color("C0"));
		assert_eq!(scale.color("C11"), scale.color("C1"));
	}

	#[test]
	fn color_is_stable_for_a_country() {
		let scale = ColorScale::from_countries(["IN", "CN"]);
		assert_eq!(scale.color("CN"), scale.color("CN"));
		assert_eq!(scale.color("BR"), CATEGORY10[2]);
	}

	#[test]
	fn other_is_gray_in_legend_only() {
		let scale = ColorScale::from_countries(["FR", "Other"]);
		assert_eq!(scale.legend_color("Other"), OTHER_LEGEND_COLOR);
		assert_eq!(scale.color("Other"), CATEGORY10[1]);
		assert_eq!(scale.legend_color("FR"), CATEGORY10[0]);
	}
}
