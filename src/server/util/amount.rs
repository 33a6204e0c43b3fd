//! Money arithmetic used by budget utilization.

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Budget utilization derived from an effective amount and the total spent against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    /// Revised amount if present, planned amount otherwise.
    pub effective_amount: f64,
    pub spent: f64,
    pub remaining: f64,
    /// `spent / effective_amount * 100`, rounded to 2 decimals; 0 when nothing is budgeted.
    pub percentage: f64,
}

impl Utilization {
    pub fn calculate(amount_planned: f64, amount_revised: Option<f64>, spent: f64) -> Self {
        let effective_amount = amount_revised.unwrap_or(amount_planned);

        let percentage = if effective_amount > 0.0 {
            round2(spent / effective_amount * 100.0)
        } else {
            0.0
        };

        Self {
            effective_amount,
            spent,
            remaining: effective_amount - spent,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(round2(0.0), 0.0);
    }

    /// Expected: revised amount wins over planned when present
    #[test]
    fn uses_revised_amount_as_effective() {
        let utilization = Utilization::calculate(1_000.0, Some(500.0), 250.0);

        assert_eq!(utilization.effective_amount, 500.0);
        assert_eq!(utilization.remaining, 250.0);
        assert_eq!(utilization.percentage, 50.0);
    }

    #[test]
    fn falls_back_to_planned_amount() {
        let utilization = Utilization::calculate(300.0, None, 100.0);

        assert_eq!(utilization.effective_amount, 300.0);
        assert_eq!(utilization.remaining, 200.0);
        assert_eq!(utilization.percentage, 33.33);
    }

    /// Expected: overspending yields negative remaining and more than 100 percent
    #[test]
    fn reports_overspend() {
        let utilization = Utilization::calculate(100.0, None, 150.0);

        assert_eq!(utilization.remaining, -50.0);
        assert_eq!(utilization.percentage, 150.0);
    }

    #[test]
    fn zero_effective_amount_has_zero_percentage() {
        let utilization = Utilization::calculate(0.0, None, 10.0);

        assert_eq!(utilization.percentage, 0.0);
    }

    /// Expected: percentage never decreases as spending grows
    #[test]
    fn percentage_is_monotonic_in_spent() {
        let mut previous = f64::MIN;
        for step in 0..=2_000 {
            let spent = step as f64 * 0.37;
            let utilization = Utilization::calculate(123.45, None, spent);
            assert!(
                utilization.percentage >= previous,
                "percentage dropped at spent={}",
                spent
            );
            previous = utilization.percentage;
        }
    }
}
