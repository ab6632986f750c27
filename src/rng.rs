use rand::{rngs::SmallRng, SeedableRng};

#[derive(Debug, Clone)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_rngs_agree() {
        let mut a = MaybeSeededRng::new(Some(1234));
        let mut b = MaybeSeededRng::new(Some(1234));

        for _ in 0..10 {
            assert_eq!(a.get_rng().random::<u64>(), b.get_rng().random::<u64>());
        }
    }
}
