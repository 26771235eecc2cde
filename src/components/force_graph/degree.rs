use std::collections::HashMap;

use super::types::GraphLink;

/// Count link endpoints per identifier. Both roles count, so a self-link
/// adds two.
pub fn compute_degrees(links: &[GraphLink]) -> HashMap<String, u32> {
	let mut counts: HashMap<String, u32> = HashMap::new();
	for link in links {
		*counts.entry(link.source.clone()).or_default() += 1;
		*counts.entry(link.target.clone()).or_default() += 1;
	}
	counts
}

/// Degree of `name`, zero when it never appears in a link.
pub fn degree_of(counts: &HashMap<String, u32>, name: &str) -> u32 {
	counts.get(name).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn link(s: &str, t: &str) -> GraphLink {
		GraphLink {
			source: s.into(),
			target: t.into(),
		}
	}

	#[test]
	fn counts_both_endpoints() {
		let counts = compute_degrees(&[link("A", "B"), link("A", "C")]);
		assert_eq!(degree_of(&counts, "A"), 2);
		assert_eq!(degree_of(&counts, "B"), 1);
		assert_eq!(degree_of(&counts, "C"), 1);
	}

	#[test]
	fn isolated_node_has_zero_degree() {
		let counts = compute_degrees(&[link("A", "B")]);
		assert_eq!(degree_of(&counts, "D"), 0);
		assert_eq!(degree_of(&compute_degrees(&[]), "A"), 0);
	}

	#[test]
	fn source_and_target_roles_add_up() {
		let counts = compute_degrees(&[link("A", "B"), link("C", "A"), link("A", "A")]);
		assert_eq!(degree_of(&counts, "A"), 4);
		assert_eq!(degree_of(&counts, "C"), 1);
	}

	#[test]
	fn dangling_endpoints_are_counted_but_harmless() {
		let counts = compute_degrees(&[link("A", "ghost")]);
		assert_eq!(degree_of(&counts, "ghost"), 1);
		assert_eq!(degree_of(&counts, "A"), 1);
	}

	#[test]
	fn total_equals_twice_the_link_count() {
		let links = vec![link("A", "B"), link("B", "C"), link("C", "D"), link("D", "A")];
		let counts = compute_degrees(&links);
		assert_eq!(counts.values().sum::<u32>(), 2 * links.len() as u32);
	}
}
