//! Numerical quadrature with closed Newton-Cotes rules and Monte Carlo sampling.
//!
//! ```
//! use quadrature::{boole, monte_2d, region, simpson, trapz};
//! use ndarray::{Array1, ArrayView2};
//!
//! assert_eq!(trapz((0., 10.), |x| 3. * x), 150.);
//! assert_eq!(simpson((0., 3.), |x| x * x), 9.);
//! assert_eq!(boole((0., 1.), |_| 1.), 1.);
//!
//! let disk = region(|x, y| x * x + y * y <= 1.);
//! let ones = |points: ArrayView2<f64>| Array1::<f64>::ones(points.nrows());
//! let area = monte_2d(disk, ones, [(-1., -1.), (1., 1.)], 100_000).unwrap();
//! assert!((area - std::f64::consts::PI).abs() < 0.1);
//! ```

pub mod domain;
pub mod error;
pub mod integral;
pub mod monte_carlo;
pub mod newton_cotes;

pub use domain::{Interval, Rectangle};
pub use error::{QuadratureError, Result};
pub use integral::{Composite, Integral, NewtonCotesQuadrature};
pub use monte_carlo::{
    monte_1d, monte_1d_with_rng, monte_2d, monte_2d_with_rng, pointwise, pointwise_2d, region,
    MonteCarlo, MonteCarloConfig, VolumeEvaluation,
};
pub use newton_cotes::{boole, simpson, simpson3_8, trapz, NewtonCotesRule};
