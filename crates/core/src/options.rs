//! Multiple-choice option generation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Country, Dataset};

/// Number of answer choices shown per round.
pub const OPTION_COUNT: usize = 4;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Build the answer choices for `current`.
///
/// The correct name plus three distractors sampled uniformly from the other
/// names in `dataset`, then shuffled so the answer lands in any slot with
/// equal probability.
///
/// Returns an empty list when the dataset has fewer than `OPTION_COUNT`
/// countries or not enough distinct names to fill the distractor slots.
#[must_use]
pub fn generate_options<R: Rng + ?Sized>(
    dataset: &Dataset,
    current: &Country,
    rng: &mut R,
) -> Vec<String> {
    if dataset.len() < OPTION_COUNT {
        return Vec::new();
    }

    let correct = current.name();
    let pool: Vec<&str> = dataset.names().collect();
    if distinct_distractors(&pool, correct) < DISTRACTOR_COUNT {
        return Vec::new();
    }

    let mut distractors: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT);
    while distractors.len() < DISTRACTOR_COUNT {
        let candidate = pool[rng.random_range(0..pool.len())];
        if candidate != correct && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }

    let mut options: Vec<String> = std::iter::once(correct)
        .chain(distractors)
        .map(str::to_string)
        .collect();
    options.shuffle(rng);
    options
}

fn distinct_distractors(pool: &[&str], correct: &str) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for &name in pool {
        if name != correct && !seen.contains(&name) {
            seen.push(name);
            if seen.len() >= DISTRACTOR_COUNT {
                break;
            }
        }
    }
    seen.len()
}
