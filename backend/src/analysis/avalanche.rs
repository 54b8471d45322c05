//! Avalanche analysis of 64-bit mixing functions
//!
//! For every sample input and every input bit, the input is flipped at that
//! bit and both outputs are compared. A good mixer flips each output bit
//! with probability close to one half, independent of which input bit was
//! flipped.

/// Per-(input bit, output bit) flip counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvalancheReport {
    /// `flips[i][j]`: how often output bit `j` changed when input bit `i` was flipped
    flips: Box<[[u64; 64]; 64]>,
    samples: u64,
}

impl AvalancheReport {
    /// Number of sample inputs
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Raw flip count for input bit `input_bit` and output bit `output_bit`
    ///
    /// # Panics
    /// Panics if either bit index is 64 or more.
    pub fn flip_count(&self, input_bit: usize, output_bit: usize) -> u64 {
        self.flips[input_bit][output_bit]
    }

    /// Fraction of samples where flipping `input_bit` changed `output_bit`
    ///
    /// Zero when there are no samples.
    pub fn flip_probability(&self, input_bit: usize, output_bit: usize) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.flip_count(input_bit, output_bit) as f64 / self.samples as f64
    }

    /// Average number of output bits changed by flipping `input_bit` (ideal: 32)
    pub fn mean_flipped_bits(&self, input_bit: usize) -> f64 {
        (0..64)
            .map(|output_bit| self.flip_probability(input_bit, output_bit))
            .sum()
    }

    /// Largest deviation of any flip probability from one half
    pub fn max_bias(&self) -> f64 {
        (0..64)
            .flat_map(|i| (0..64).map(move |j| (i, j)))
            .map(|(i, j)| (self.flip_probability(i, j) - 0.5).abs())
            .fold(0.0, f64::max)
    }
}

/// Measure the avalanche behaviour of `mix` over `inputs`
///
/// # Example
/// ```
/// use weylmix_core_rs::analysis::avalanche;
///
/// // the identity only ever flips the bit that was flipped
/// let report = avalanche([1, 2, 3], |x| x);
/// assert_eq!(report.samples(), 3);
/// assert_eq!(report.mean_flipped_bits(0), 1.0);
/// assert_eq!(report.max_bias(), 0.5);
/// ```
pub fn avalanche<I, F>(inputs: I, mix: F) -> AvalancheReport
where
    I: IntoIterator<Item = u64>,
    F: Fn(u64) -> u64,
{
    let mut flips = Box::new([[0u64; 64]; 64]);
    let mut samples = 0u64;

    for x in inputs {
        let origin = mix(x);

        for (input_bit, row) in flips.iter_mut().enumerate() {
            let mut diff = origin ^ mix(x ^ (1u64 << input_bit));
            while diff != 0 {
                row[diff.trailing_zeros() as usize] += 1;
                diff &= diff - 1;
            }
        }

        samples += 1;
    }

    AvalancheReport { flips, samples }
}
