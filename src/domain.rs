use crate::error::QuadratureError;

/// One-dimensional integration domain `(a, b)`.
///
/// `a > b` is allowed; every rule then returns the negated integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub a: f64,
    pub b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Signed length `b - a`.
    pub fn length(&self) -> f64 {
        self.b - self.a
    }

    /// Point at fraction `t` of the way from `a` to `b`.
    pub fn node(&self, t: f64) -> f64 {
        self.a + t * self.length()
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Splits the interval into `panels` adjacent sub-intervals of equal length,
    /// preserving orientation. Zero panels yields the interval itself.
    pub fn split(self, panels: usize) -> impl Iterator<Item = Interval> {
        let panels = panels.max(1);

        (0..panels).map(move |i| {
            let a = self.node(i as f64 / panels as f64);
            let b = if i + 1 == panels {
                self.b
            } else {
                self.node((i + 1) as f64 / panels as f64)
            };

            Interval { a, b }
        })
    }

    /// Bounds ordered low to high, suitable for uniform sampling.
    pub(crate) fn sampling_bounds(&self) -> Result<(f64, f64), QuadratureError> {
        let Interval { a, b } = *self;

        if !(b - a).is_finite() {
            return Err(QuadratureError::InvalidDomain {
                reason: format!("interval ({a}, {b}) must have a finite length"),
            });
        }

        Ok((a.min(b), a.max(b)))
    }
}

impl From<(f64, f64)> for Interval {
    fn from((a, b): (f64, f64)) -> Self {
        Interval { a, b }
    }
}

impl From<[f64; 2]> for Interval {
    fn from([a, b]: [f64; 2]) -> Self {
        Interval { a, b }
    }
}

/// Axis-aligned box spanned by two corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl Rectangle {
    pub fn new(min: (f64, f64), max: (f64, f64)) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> f64 {
        self.max.1 - self.min.1
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn x_range(&self) -> Interval {
        Interval::new(self.min.0, self.max.0)
    }

    pub fn y_range(&self) -> Interval {
        Interval::new(self.min.1, self.max.1)
    }

    pub(crate) fn validate(&self) -> Result<(), QuadratureError> {
        let Rectangle {
            min: (x_min, y_min),
            max: (x_max, y_max),
        } = *self;

        let finite = self.width().is_finite() && self.height().is_finite();

        // negated comparisons so NaN corners fail too
        if !finite || !(x_min < x_max) || !(y_min < y_max) {
            return Err(QuadratureError::InvalidDomain {
                reason: format!(
                    "box must satisfy min < max on both axes, got ({x_min}, {y_min}) .. ({x_max}, {y_max})"
                ),
            });
        }

        Ok(())
    }
}

impl From<[(f64, f64); 2]> for Rectangle {
    fn from([min, max]: [(f64, f64); 2]) -> Self {
        Rectangle { min, max }
    }
}

impl From<[[f64; 2]; 2]> for Rectangle {
    fn from([[x_min, y_min], [x_max, y_max]]: [[f64; 2]; 2]) -> Self {
        Rectangle {
            min: (x_min, y_min),
            max: (x_max, y_max),
        }
    }
}
