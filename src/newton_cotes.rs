//! Closed Newton-Cotes rules on a single panel.
//!
//! Every rule evaluates `f` at a fixed set of equally spaced nodes of the
//! domain, endpoints included, and combines the samples with interpolation
//! weights. Nothing is validated: `f` must be defined at every node.

use serde::Deserialize;

use crate::domain::Interval;

/// Trapezoidal rule, exact for polynomials up to degree 1.
pub fn trapz<F>(domain: impl Into<Interval>, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let Interval { a, b } = domain.into();

    let ya = f(a);
    let yb = f(b);

    (b - a) * (ya + yb) / 2.
}

/// Simpson's rule, exact for polynomials up to degree 3.
pub fn simpson<F>(domain: impl Into<Interval>, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let Interval { a, b } = domain.into();

    let ya = f(a);
    let ym = f((a + b) / 2.);
    let yb = f(b);

    (b - a) * (ya + 4. * ym + yb) / 6.
}

/// Simpson's 3/8 rule, exact for polynomials up to degree 3.
pub fn simpson3_8<F>(domain: impl Into<Interval>, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let Interval { a, b } = domain.into();

    let ya = f(a);
    let y1 = f((2. * a + b) / 3.);
    let y2 = f((a + 2. * b) / 3.);
    let yb = f(b);

    (b - a) * (ya + 3. * (y1 + y2) + yb) / 8.
}

/// Boole's rule, exact for polynomials up to degree 5.
pub fn boole<F>(domain: impl Into<Interval>, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let Interval { a, b } = domain.into();

    let ya = f(a);
    let y1 = f((3. * a + b) / 4.);
    let y2 = f((a + b) / 2.);
    let y3 = f((a + 3. * b) / 4.);
    let yb = f(b);

    // 2h/45 with h = (b - a) / 4
    (b - a) * (7. * (ya + yb) + 32. * (y1 + y3) + 12. * y2) / 90.
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewtonCotesRule {
    Trapezoid,
    Simpson,
    #[serde(rename = "simpson3_8")]
    Simpson38,
    Boole,
}

impl NewtonCotesRule {
    pub const ALL: [NewtonCotesRule; 4] = [
        NewtonCotesRule::Trapezoid,
        NewtonCotesRule::Simpson,
        NewtonCotesRule::Simpson38,
        NewtonCotesRule::Boole,
    ];

    pub fn apply<F>(&self, domain: impl Into<Interval>, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            NewtonCotesRule::Trapezoid => trapz(domain, f),
            NewtonCotesRule::Simpson => simpson(domain, f),
            NewtonCotesRule::Simpson38 => simpson3_8(domain, f),
            NewtonCotesRule::Boole => boole(domain, f),
        }
    }

    /// Highest polynomial degree the rule integrates exactly.
    pub fn degree_of_exactness(&self) -> u32 {
        match self {
            NewtonCotesRule::Trapezoid => 1,
            NewtonCotesRule::Simpson | NewtonCotesRule::Simpson38 => 3,
            NewtonCotesRule::Boole => 5,
        }
    }

    /// Number of function evaluations per panel.
    pub fn points(&self) -> usize {
        match self {
            NewtonCotesRule::Trapezoid => 2,
            NewtonCotesRule::Simpson => 3,
            NewtonCotesRule::Simpson38 => 4,
            NewtonCotesRule::Boole => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde::de::value::{Error as ValueError, StrDeserializer};
    use serde::de::IntoDeserializer;
    use std::cell::Cell;

    fn monomial_integral(k: i32, Interval { a, b }: Interval) -> f64 {
        (b.powi(k + 1) - a.powi(k + 1)) / (k + 1) as f64
    }

    #[test]
    fn test_trapz_linear() {
        assert_eq!(trapz((0., 10.), |x| 3. * x), 150.);
    }

    #[test]
    fn test_simpson_quadratic() {
        assert_eq!(simpson((0., 3.), |x| x.powi(2)), 9.);
    }

    #[test]
    fn test_boole_constant() {
        assert_eq!(boole((0., 1.), |_| 1.), 1.);
    }

    #[test]
    fn test_constants_are_exact() {
        let domains = [(0., 1.), (-2., 5.), (1.5, 3.5), (4., -4.)];

        for rule in NewtonCotesRule::ALL {
            for domain in domains {
                let interval = Interval::from(domain);
                let expected = 2.5 * interval.length();

                assert_eq!(rule.apply(interval, |_| 2.5), expected, "{rule:?} on {domain:?}");
            }
        }
    }

    #[test]
    fn test_degree_of_exactness() {
        let interval = Interval::new(-0.5, 2.);

        for rule in NewtonCotesRule::ALL {
            let degree = rule.degree_of_exactness() as i32;

            for k in 0..=degree {
                let result = rule.apply(interval, |x| x.powi(k));

                assert_relative_eq!(
                    result,
                    monomial_integral(k, interval),
                    max_relative = 1e-12
                );
            }

            let k = degree + 1;
            let result = rule.apply(interval, |x| x.powi(k));

            assert!(
                (result - monomial_integral(k, interval)).abs() > 1e-6,
                "{rule:?} should not be exact for degree {k}"
            );
        }
    }

    #[test]
    fn test_trapz_antisymmetric() {
        let f = |x: f64| x.sin() + 2. * x;
        let interval = Interval::new(0.3, 2.1);

        assert_eq!(trapz(interval, f), -trapz(interval.reversed(), f));
    }

    #[test]
    fn test_reversed_domain_negates() {
        let f = |x: f64| (-x * x).exp();
        let interval = Interval::new(-1., 1.5);

        for rule in NewtonCotesRule::ALL {
            assert_relative_eq!(
                rule.apply(interval, f),
                -rule.apply(interval.reversed(), f),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_degenerate_domain_is_zero() {
        for rule in NewtonCotesRule::ALL {
            assert_eq!(rule.apply((2., 2.), |x| x * x), 0.);
        }
    }

    #[test]
    fn test_evaluation_count_matches_points() {
        for rule in NewtonCotesRule::ALL {
            let calls = Cell::new(0);

            rule.apply((0., 1.), |x| {
                calls.set(calls.get() + 1);
                x
            });

            assert_eq!(calls.get(), rule.points());
        }
    }

    #[test]
    fn test_higher_order_rule_is_closer_on_smooth_function() {
        let interval = Interval::new(0., 1.);
        let exact = std::f64::consts::E - 1.;

        let errors: Vec<f64> = NewtonCotesRule::ALL
            .iter()
            .map(|rule| (rule.apply(interval, f64::exp) - exact).abs())
            .collect();

        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
        assert!(errors[2] > errors[3]);
    }

    #[test]
    fn test_rule_deserializes_from_name() {
        let deserializer: StrDeserializer<ValueError> = "simpson3_8".into_deserializer();
        let rule = NewtonCotesRule::deserialize(deserializer).unwrap();

        assert_eq!(rule, NewtonCotesRule::Simpson38);
    }
}
