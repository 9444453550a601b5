//! Fixed-size Fibonacci sequence generation.
//!
//! Terms are stored as `i32` and summed with two's-complement wrapping, so the
//! output matches a program that uses native 32-bit signed integers. The first
//! term that no longer equals the mathematical Fibonacci number is F(47).

use std::slice;

/// Ordered Fibonacci terms F(0)..=F(upper_index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    terms: Vec<i32>,
    first_wrapped: Option<usize>,
}

impl Sequence {
    /// Highest index held by this sequence.
    pub fn upper_index(&self) -> usize {
        self.terms.len() - 1
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; a sequence holds at least F(0).
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.terms.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.terms
    }

    pub fn iter(&self) -> slice::Iter<'_, i32> {
        self.terms.iter()
    }

    /// Index of the first term whose 32-bit sum wrapped, if any did.
    pub fn first_wrapped_index(&self) -> Option<usize> {
        self.first_wrapped
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build F(0)..=F(upper_index) in a single forward pass.
///
/// `generate(0)` yields just `[0]`.
pub fn generate(upper_index: usize) -> Sequence {
    let mut terms = vec![0i32; upper_index + 1];
    let mut first_wrapped = None;

    if upper_index >= 1 {
        terms[1] = 1;
    }

    for i in 2..=upper_index {
        let (sum, wrapped) = terms[i - 1].overflowing_add(terms[i - 2]);
        if wrapped && first_wrapped.is_none() {
            first_wrapped = Some(i);
        }
        terms[i] = sum;
    }

    Sequence {
        terms,
        first_wrapped,
    }
}
