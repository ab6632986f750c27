use super::errors::SimulationError;
use super::source::RewardSource;
use crate::rng::MaybeSeededRng;
use crate::strategies::Strategy;

use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub struct SourcePool {
    sources: Vec<RewardSource>,
    thrown: Vec<u64>,
    returned: Vec<u64>,
    tot_thrown: u64,
    tot_returned: u64,
    rng: MaybeSeededRng,
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub rates: Vec<f64>,
    pub thrown: Vec<u64>,
    pub returned: Vec<u64>,
    pub tot_thrown: u64,
    pub tot_returned: u64,
}

impl SourcePool {
    pub fn new(
        n_sources: usize,
        rates: Option<Vec<f64>>,
        balanced: bool,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        if n_sources == 0 {
            return Err(SimulationError::NoSources);
        }

        let mut rng = MaybeSeededRng::new(seed);
        let mut rates = match rates {
            Some(rates) => {
                if rates.len() != n_sources {
                    return Err(SimulationError::RateCountMismatch {
                        expected: n_sources,
                        actual: rates.len(),
                    });
                }
                rates
            }
            None => (0..n_sources).map(|_| rng.get_rng().random::<f64>()).collect(),
        };

        if balanced {
            // rescale so the rates sum to n_sources / 2, keeping proportions
            let sum: f64 = rates.iter().sum();
            if sum <= 0.0 {
                return Err(SimulationError::UnbalanceableRates(sum));
            }
            let scale = n_sources as f64 / (2.0 * sum);
            rates.iter_mut().for_each(|rate| *rate *= scale);
        }

        let sources = rates
            .into_iter()
            .map(|rate| RewardSource::new(Some(rate), rng.get_rng()))
            .collect();

        let mut pool = Self {
            sources,
            thrown: Vec::new(),
            returned: Vec::new(),
            tot_thrown: 0,
            tot_returned: 0,
            rng,
        };
        pool.reset();

        Ok(pool)
    }

    pub fn reset(&mut self) {
        self.tot_thrown = 0;
        self.tot_returned = 0;
        self.thrown = vec![0; self.sources.len()];
        self.returned = vec![0; self.sources.len()];
    }

    // Runs n sequential trials, letting the strategy pick a source for each one
    // from the counters accumulated so far. Returns the running total of successes.
    pub fn throw(&mut self, strategy: &mut dyn Strategy, n: u64) -> Result<u64, SimulationError> {
        for _ in 0..n {
            let b = strategy.choose(&self.thrown, &self.returned)?;
            if b >= self.sources.len() {
                return Err(SimulationError::SourceOutOfRange {
                    index: b,
                    n_sources: self.sources.len(),
                });
            }

            let r = self.sources[b].trial(1, self.rng.get_rng());
            self.returned[b] += r;
            self.thrown[b] += 1;
            self.tot_returned += r;
            self.tot_thrown += 1;
        }

        Ok(self.tot_returned)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn thrown(&self) -> &[u64] {
        &self.thrown
    }

    pub fn returned(&self) -> &[u64] {
        &self.returned
    }

    pub fn tot_thrown(&self) -> u64 {
        self.tot_thrown
    }

    pub fn tot_returned(&self) -> u64 {
        self.tot_returned
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            rates: self.sources.iter().map(|source| source.rate()).collect(),
            thrown: self.thrown.clone(),
            returned: self.returned.clone(),
            tot_thrown: self.tot_thrown,
            tot_returned: self.tot_returned,
        }
    }
}

impl fmt::Display for SourcePool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sources = self
            .sources
            .iter()
            .map(|source| source.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "[{}]", sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::errors::StrategyError;
    use crate::strategies::{PosteriorSampling, StickyRandom};

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn reject_empty_pool() {
        assert!(matches!(
            SourcePool::new(0, None, false, SEED),
            Err(SimulationError::NoSources)
        ));
    }

    #[test]
    fn reject_rate_count_mismatch() {
        assert!(matches!(
            SourcePool::new(3, Some(vec![0.1, 0.2]), false, SEED),
            Err(SimulationError::RateCountMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn balanced_rates_sum_to_half_the_sources() {
        let pool = SourcePool::new(3, Some(vec![0.2, 0.4, 0.4]), true, SEED).unwrap();
        let rates = pool.stats().rates;

        let sum: f64 = rates.iter().sum();
        assert!((sum - 1.5).abs() < 1e-12);
        // proportions are preserved
        assert!((rates[1] - 2.0 * rates[0]).abs() < 1e-12);
        assert!((rates[2] - rates[1]).abs() < 1e-12);
    }

    #[test]
    fn reject_unbalanceable_rates() {
        assert!(matches!(
            SourcePool::new(2, Some(vec![0.0, 0.0]), true, SEED),
            Err(SimulationError::UnbalanceableRates(_))
        ));
    }

    #[test]
    fn throw_keeps_counters_consistent() {
        let mut pool = SourcePool::new(3, Some(vec![0.2, 0.5, 0.8]), false, SEED).unwrap();
        let mut strategy = StickyRandom::new(3, SEED);

        let tot_returned = pool.throw(&mut strategy, 100).unwrap();

        assert_eq!(pool.tot_thrown(), 100);
        assert_eq!(pool.thrown().iter().sum::<u64>(), 100);
        assert_eq!(pool.returned().iter().sum::<u64>(), tot_returned);
        assert_eq!(pool.tot_returned(), tot_returned);
        for i in 0..pool.len() {
            assert!(pool.returned()[i] <= pool.thrown()[i]);
            assert!(pool.thrown()[i] <= pool.tot_thrown());
        }
    }

    #[test]
    fn reset_restores_a_fresh_pool() {
        let mut pool = SourcePool::new(2, Some(vec![0.5, 0.5]), false, SEED).unwrap();
        let mut strategy = PosteriorSampling::new(2, None, SEED);

        pool.throw(&mut strategy, 50).unwrap();
        pool.reset();

        assert_eq!(pool.tot_thrown(), 0);
        assert_eq!(pool.tot_returned(), 0);
        assert_eq!(pool.thrown(), &[0, 0]);
        assert_eq!(pool.returned(), &[0, 0]);

        pool.throw(&mut strategy, 30).unwrap();
        assert_eq!(pool.tot_thrown(), 30);
        assert_eq!(pool.thrown().iter().sum::<u64>(), 30);
    }

    struct Overreach;

    impl Strategy for Overreach {
        fn choose(&mut self, _thrown: &[u64], _returned: &[u64]) -> Result<usize, StrategyError> {
            Ok(99)
        }
    }

    #[test]
    fn out_of_range_choice_fails_fast() {
        let mut pool = SourcePool::new(2, Some(vec![0.5, 0.5]), false, SEED).unwrap();
        let before = pool.tot_thrown();

        assert!(matches!(
            pool.throw(&mut Overreach, 1),
            Err(SimulationError::SourceOutOfRange {
                index: 99,
                n_sources: 2
            })
        ));
        assert_eq!(pool.tot_thrown(), before);
    }

    #[test]
    fn certain_and_dud_sources_with_sticky_random() {
        let mut pool = SourcePool::new(2, Some(vec![1.0, 0.0]), false, SEED).unwrap();
        let mut strategy = StickyRandom::new(2, SEED);

        pool.throw(&mut strategy, 50).unwrap();

        assert_eq!(pool.tot_thrown(), 50);
        assert_eq!(pool.tot_returned(), pool.thrown()[0]);
        assert_eq!(pool.returned()[1], 0);
    }

    #[test]
    fn certain_and_dud_sources_with_posterior_sampling() {
        let mut pool = SourcePool::new(2, Some(vec![1.0, 0.0]), false, SEED).unwrap();
        let mut strategy = PosteriorSampling::new(2, None, SEED);

        pool.throw(&mut strategy, 50).unwrap();

        assert_eq!(pool.tot_thrown(), 50);
        assert_eq!(pool.tot_returned(), pool.thrown()[0]);
        assert_eq!(pool.returned()[1], 0);
    }

    #[test]
    fn display_lists_the_sources() {
        let pool = SourcePool::new(2, Some(vec![1.0, 0.0]), false, SEED).unwrap();
        assert_eq!(pool.to_string(), "[B(1.000),B(0.000)]");
    }
}
