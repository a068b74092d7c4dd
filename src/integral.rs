use log::trace;
use peroxide::numerical::integral::newton_cotes_quadrature;

use crate::domain::Interval;
use crate::newton_cotes::NewtonCotesRule;

pub trait Integral {
    fn integrate<F>(&self, f: F, domain: Interval) -> f64
    where
        F: Fn(f64) -> f64;
}

impl Integral for NewtonCotesRule {
    fn integrate<F>(&self, f: F, domain: Interval) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.apply(domain, f)
    }
}

/// A Newton-Cotes rule repeated over `panels` equal sub-intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite {
    pub rule: NewtonCotesRule,
    pub panels: usize,
}

impl Integral for Composite {
    fn integrate<F>(&self, f: F, domain: Interval) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut sum = 0f64;
        for panel in domain.split(self.panels) {
            let contribution = self.rule.apply(panel, &f);
            trace!(
                "{:?} panel [{}, {}] -> {}",
                self.rule,
                panel.a,
                panel.b,
                contribution
            );
            sum += contribution;
        }
        sum
    }
}

/// Closed Newton-Cotes rule of arbitrary order, built from the Lagrange
/// interpolant over `n` equal intervals.
pub struct NewtonCotesQuadrature {
    pub n: usize,
}

impl Integral for NewtonCotesQuadrature {
    fn integrate<F>(&self, f: F, domain: Interval) -> f64
    where
        F: Fn(f64) -> f64,
    {
        newton_cotes_quadrature(f, self.n, (domain.a, domain.b))
    }
}
