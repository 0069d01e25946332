use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::EscapeTimeError;

/// Magnitude beyond which an orbit is declared divergent.
pub const ESCAPE_RADIUS: f64 = 4.0;
/// The bound check runs against the squared magnitude, which skips the
/// square root without changing any classification.
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

pub const DEFAULT_ITERATION_BUDGET: u32 = 200;

/// Escape-time membership test for the Mandelbrot set: iterate `z = z² + c`
/// from zero and watch whether the orbit leaves the escape radius before
/// the budget runs out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTime {
    iteration_budget: u32,
}

impl EscapeTime {
    pub fn new(iteration_budget: u32) -> Result<Self, EscapeTimeError> {
        if iteration_budget == 0 {
            return Err(EscapeTimeError::ZeroIterationBudget);
        }

        Ok(Self { iteration_budget })
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    /// Fraction of the budget consumed before the orbit escaped: 0.0 means
    /// it left on the first step, 1.0 means it never left and the point is
    /// classified as in the set.
    #[must_use]
    pub fn escape_fraction(&self, c: Complex) -> f64 {
        let mut z = Complex::ZERO;

        for step in 0..self.iteration_budget {
            z = z.square() + c;

            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return f64::from(step) / f64::from(self.iteration_budget);
            }
        }

        1.0
    }

    #[must_use]
    pub fn contains(&self, c: Complex) -> bool {
        self.escape_fraction(c) == 1.0
    }
}

impl Default for EscapeTime {
    fn default() -> Self {
        Self {
            iteration_budget: DEFAULT_ITERATION_BUDGET,
        }
    }
}
