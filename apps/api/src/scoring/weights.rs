/// Fixed dimension weights for the overall compatibility score.
/// Skill overlap dominates, experience second; industry and location are
/// secondary signals.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skill: 0.40,
    experience: 0.30,
    industry: 0.20,
    location: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skill: f64,
    pub experience: f64,
    pub industry: f64,
    pub location: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.industry + self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
