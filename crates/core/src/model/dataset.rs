use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::Country;

/// The full set of playable countries, in the order rounds are played.
///
/// The order is fixed once at load time; rounds walk it cyclically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    countries: Vec<Country>,
}

impl Dataset {
    /// Keep the given order as-is.
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Permute the countries uniformly (Fisher–Yates) before play starts.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut countries: Vec<Country>, rng: &mut R) -> Self {
        countries.shuffle(rng);
        Self { countries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(Country::name)
    }

    /// Index of the round after `index`, wrapping to the start.
    ///
    /// Returns `None` for an empty dataset.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.countries.is_empty() {
            return None;
        }
        Some((index + 1) % self.countries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn country(name: &str) -> Country {
        Country::new(name, vec![name.to_string()], format!("https://flags.example/{name}.svg"))
            .unwrap()
    }

    #[test]
    fn next_index_wraps_around() {
        let dataset = Dataset::new(vec![country("A"), country("B"), country("C")]);
        assert_eq!(dataset.next_index(0), Some(1));
        assert_eq!(dataset.next_index(2), Some(0));
        assert_eq!(Dataset::default().next_index(0), None);
    }

    #[test]
    fn shuffle_keeps_every_country() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let countries = names.iter().map(|n| country(n)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = Dataset::shuffled(countries, &mut rng);

        let mut shuffled: Vec<_> = dataset.names().collect();
        shuffled.sort_unstable();
        assert_eq!(shuffled, names);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let build = || (0..20).map(|i| country(&format!("C{i}"))).collect::<Vec<_>>();
        let first = Dataset::shuffled(build(), &mut StdRng::seed_from_u64(42));
        let second = Dataset::shuffled(build(), &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
