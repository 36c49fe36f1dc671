/// A sampled point of `f(x) - target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,

    /// Raw function output `f(x)`.
    pub(crate) output: f64,

    /// Signed residual `f(x) - target`.
    pub(crate) residual: f64,
}

impl Point {
    pub(crate) fn eval<F>(f: &F, target: f64, x: f64) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let output = f(x);
        Self {
            x,
            output,
            residual: output - target,
        }
    }

    /// Returns `|residual|`.
    pub(crate) fn error(&self) -> f64 {
        self.residual.abs()
    }
}
