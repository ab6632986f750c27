use rand::Rng;
use std::fmt;

#[derive(Clone, Debug)]
pub struct RewardSource {
    rate: f64,
}

impl RewardSource {
    // A missing or negative rate is replaced by a uniform draw from [0, 1)
    pub fn new<R: Rng + ?Sized>(rate: Option<f64>, rng: &mut R) -> Self {
        let rate = match rate {
            Some(rate) if rate >= 0.0 => rate,
            _ => rng.random::<f64>(),
        };

        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn trial<R: Rng + ?Sized>(&self, n: u64, rng: &mut R) -> u64 {
        (0..n).filter(|_| rng.random::<f64>() <= self.rate).count() as u64
    }
}

impl fmt::Display for RewardSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "B({:.3})", self.rate)
    }
}
