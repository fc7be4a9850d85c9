use serde::{Deserialize, Serialize};

use crate::common::types::Direction;
use crate::error::{PathfindingError, Result};

/// Per-step movement costs.
///
/// `diagonal_cost` is only paid under 8-connected movement; it is
/// conventionally `sqrt(2) * straight_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCosts {
    /// Cost of an axis-aligned step
    #[serde(default = "default_straight_cost")]
    pub straight_cost: f64,

    /// Cost of a diagonal step
    #[serde(default = "default_diagonal_cost")]
    pub diagonal_cost: f64,
}

fn default_straight_cost() -> f64 {
    1.0
}

fn default_diagonal_cost() -> f64 {
    std::f64::consts::SQRT_2
}

impl Default for StepCosts {
    fn default() -> Self {
        Self {
            straight_cost: default_straight_cost(),
            diagonal_cost: default_diagonal_cost(),
        }
    }
}

impl StepCosts {
    pub const fn new(straight_cost: f64, diagonal_cost: f64) -> Self {
        Self {
            straight_cost,
            diagonal_cost,
        }
    }

    /// Costs scaled from a single straight-step cost, with diagonal steps
    /// costing `sqrt(2)` times as much.
    pub fn scaled(straight_cost: f64) -> Self {
        Self::new(straight_cost, straight_cost * std::f64::consts::SQRT_2)
    }

    /// Checks that both costs are finite and strictly positive, and that
    /// the octile terms built from them stay finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("straight_cost", self.straight_cost),
            ("diagonal_cost", self.diagonal_cost),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PathfindingError::InvalidStepCost { name, value });
            }
        }

        let double_straight = 2.0 * self.straight_cost;
        if !double_straight.is_finite() || !(self.diagonal_cost - double_straight).is_finite() {
            return Err(PathfindingError::StepCostOverflow {
                straight_cost: self.straight_cost,
                diagonal_cost: self.diagonal_cost,
            });
        }
        Ok(())
    }

    /// Cost of a single step in `direction`.
    pub fn step_cost(&self, direction: Direction) -> f64 {
        if direction.is_diagonal() {
            self.diagonal_cost
        } else {
            self.straight_cost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_costs_are_unit_and_sqrt2() {
        let costs = StepCosts::default();
        assert_eq!(costs.straight_cost, 1.0);
        assert_eq!(costs.diagonal_cost, std::f64::consts::SQRT_2);
        assert!(costs.validate().is_ok());
    }

    #[test]
    fn step_cost_depends_on_direction() {
        let costs = StepCosts::new(2.0, 3.0);
        assert_eq!(costs.step_cost(Direction::Left), 2.0);
        assert_eq!(costs.step_cost(Direction::Bottom), 2.0);
        assert_eq!(costs.step_cost(Direction::TopLeft), 3.0);
        assert_eq!(costs.step_cost(Direction::BottomRight), 3.0);
    }

    #[test]
    fn validate_rejects_non_positive_and_non_finite_costs() {
        for (straight, diagonal) in [
            (0.0, 1.0),
            (-1.0, 1.0),
            (f64::NAN, 1.0),
            (1.0, f64::INFINITY),
            (1.0, 0.0),
        ] {
            let res = StepCosts::new(straight, diagonal).validate();
            assert!(
                matches!(res, Err(PathfindingError::InvalidStepCost { .. })),
                "straight: {straight}, diagonal: {diagonal}"
            );
        }
    }

    #[test]
    fn validate_rejects_costs_that_overflow() {
        for (straight, diagonal) in [(1e308, 1.0), (f64::MAX, f64::MAX), (1.0e308, 1.5e308)] {
            let res = StepCosts::new(straight, diagonal).validate();
            assert!(
                matches!(res, Err(PathfindingError::StepCostOverflow { .. })),
                "straight: {straight}, diagonal: {diagonal}"
            );
        }

        // Large but representable costs are still accepted
        assert!(StepCosts::new(1e300, 1.0).validate().is_ok());
    }

    #[test]
    fn scaled_keeps_sqrt2_ratio() {
        let costs = StepCosts::scaled(10.0);
        assert_eq!(costs.straight_cost, 10.0);
        assert!((costs.diagonal_cost - 14.142135623730951).abs() < 1e-12);
    }
}
