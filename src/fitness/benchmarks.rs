//! Objective functions
//!
//! Objectives are minimized. They are pure functions of the coordinates and
//! know nothing about the internal maximization score; that conversion lives
//! in [`crate::fitness::evaluator`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A cost function to be minimized
pub trait Objective: Send + Sync {
    /// Name of the function, used in logs and reports
    fn name(&self) -> &'static str;

    /// Dimensionality of the problem
    fn dimension(&self) -> usize;

    /// Evaluate the function (returns value to be MINIMIZED)
    fn evaluate_raw(&self, x: &[f64]) -> f64;
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Sphere {
    dimension: usize,
}

impl Sphere {
    /// Create a new Sphere function
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Objective for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

/// Generalized Rastrigin function: f(x) = A·n + Σ(xᵢ² - A·cos(2πxᵢ))
///
/// Highly multimodal with many local minima. Optimum 0 at the origin, and
/// non-negative everywhere.
#[derive(Clone, Debug)]
pub struct Rastrigin {
    dimension: usize,
    amplitude: f64,
}

impl Rastrigin {
    /// Create a new Rastrigin function with the customary `A = 10`
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            amplitude: 10.0,
        }
    }

    /// Override the amplitude `A`
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }
}

impl Objective for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let a = self.amplitude;
        let n = x.len() as f64;
        a * n
            + x.iter()
                .map(|xi| xi * xi - a * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

/// Ackley function
///
/// Nearly flat outer region with many local minima. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Ackley {
    dimension: usize,
    a: f64,
    b: f64,
    c: f64,
}

impl Ackley {
    /// Create a new Ackley function with default parameters
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            a: 20.0,
            b: 0.2,
            c: 2.0 * PI,
        }
    }
}

impl Objective for Ackley {
    fn name(&self) -> &'static str {
        "Ackley"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        let sum_sq = x.iter().map(|xi| xi * xi).sum::<f64>();
        let sum_cos = x.iter().map(|xi| (self.c * xi).cos()).sum::<f64>();

        -self.a * (-self.b * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
            + self.a
            + std::f64::consts::E
    }
}

/// Objective backed by a closure
pub struct FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    dimension: usize,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Wrap a closure as a `dimension`-dimensional objective
    pub fn new(dimension: usize, f: F) -> Self {
        Self { dimension, f }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &'static str {
        "custom"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        (self.f)(x)
    }
}

/// Which built-in benchmark a configuration selects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    #[default]
    Rastrigin,
    Sphere,
    Ackley,
}

/// A built-in benchmark chosen at runtime
#[derive(Clone, Debug)]
pub enum Benchmark {
    Rastrigin(Rastrigin),
    Sphere(Sphere),
    Ackley(Ackley),
}

impl Benchmark {
    /// Instantiate the benchmark for the given dimensionality
    pub fn new(kind: ObjectiveKind, dimension: usize) -> Self {
        match kind {
            ObjectiveKind::Rastrigin => Self::Rastrigin(Rastrigin::new(dimension)),
            ObjectiveKind::Sphere => Self::Sphere(Sphere::new(dimension)),
            ObjectiveKind::Ackley => Self::Ackley(Ackley::new(dimension)),
        }
    }

    fn inner(&self) -> &dyn Objective {
        match self {
            Self::Rastrigin(f) => f,
            Self::Sphere(f) => f,
            Self::Ackley(f) => f,
        }
    }
}

impl Objective for Benchmark {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn dimension(&self) -> usize {
        self.inner().dimension()
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        self.inner().evaluate_raw(x)
    }
}
