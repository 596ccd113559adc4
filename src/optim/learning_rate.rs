//! Learning rate slot of an optimizer

/// Anything that carries an adjustable learning rate
///
/// This is the only part of an optimizer a scheduler needs to touch.
pub trait LearningRate {
    /// Get learning rate
    fn lr(&self) -> f64;

    /// Set learning rate
    fn set_lr(&mut self, lr: f64);
}

impl LearningRate for f64 {
    fn lr(&self) -> f64 {
        *self
    }

    fn set_lr(&mut self, lr: f64) {
        *self = lr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal optimizer implementation for testing
    struct TestOptimizer {
        learning_rate: f64,
    }

    impl LearningRate for TestOptimizer {
        fn lr(&self) -> f64 {
            self.learning_rate
        }

        fn set_lr(&mut self, lr: f64) {
            self.learning_rate = lr;
        }
    }

    #[test]
    fn test_optimizer_set_lr() {
        let mut opt = TestOptimizer { learning_rate: 0.1 };
        assert_eq!(opt.lr(), 0.1);

        opt.set_lr(0.01);
        assert_eq!(opt.lr(), 0.01);
    }

    #[test]
    fn test_f64_slot() {
        let mut lr = 0.5_f64;
        lr.set_lr(0.25);
        assert_eq!(LearningRate::lr(&lr), 0.25);
    }
}
