use std::{iter::Copied, slice::Iter};

/// A `Vec<f64>` of non-negative strain values.
#[derive(Clone, Debug, Default)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.inner.push(value);
    }

    pub fn sort_desc(&mut self) {
        self.inner.sort_by(|a, b| b.total_cmp(a));
    }

    pub fn retain_non_zero(&mut self) {
        self.inner.retain(|&a| a > 0.0);
    }

    pub fn retain_non_zero_and_sort(&mut self) {
        self.retain_non_zero();
        self.sort_desc();
    }

    pub fn sorted_non_zero_iter(&mut self) -> Copied<Iter<'_, f64>> {
        self.retain_non_zero_and_sort();

        self.iter()
    }

    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.inner
    }
}
