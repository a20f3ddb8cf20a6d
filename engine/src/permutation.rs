use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffled lookup table selecting a gradient direction per grid corner.
///
/// Holds `2 * border` entries, each in `[0, border)`: a uniform shuffle of
/// the identity sequence followed by an exact copy of itself. The doubled
/// tail keeps `grid_x + 1` lookups in bounds without a modulo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: Vec<usize>,
    border: usize,
}

impl PermutationTable {
    /// Builds the table for a field that tiles every `border` cells.
    ///
    /// The RNG is a locally owned instance: a given seed always yields the
    /// same table for a given `border`, and no process-wide state is
    /// touched. Without a seed the shuffle runs on OS entropy.
    pub fn build(border: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut values: Vec<usize> = (0..border).collect();
        values.shuffle(&mut rng);
        values.extend_from_within(..);

        Self { values, border }
    }

    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.values[index]
    }

    pub fn border(&self) -> usize {
        self.border
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
