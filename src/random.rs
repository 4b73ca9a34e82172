//! Uniform sampling of scalars and arrays
//!
//! A sampler owns its generator. There is no process-wide state: create one
//! per process, per thread or per test, seeded when the draws must be
//! reproducible.

use crate::error::{ArrayError, Result};
use crate::types::{Column, DType, TypedArray, Value};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Source of uniform draws
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Sampler seeded from the operating system
    pub fn new() -> Self {
        debug!("seeding sampler from OS entropy");
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sampler: equal seeds give equal draw sequences
    pub fn seeded(seed: u64) -> Self {
        debug!("seeding sampler with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an existing generator
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// One integer from `[0, low]`, or from `[low, high]` when `high` is given
    pub fn random_int(&mut self, low: i64, high: Option<i64>) -> Result<i64> {
        let (low, high) = bounds(low, high)?;
        Ok(self.rng.random_range(low..=high))
    }

    /// `size` independent integers over the same range as [`random_int`](Self::random_int)
    pub fn random_ints(&mut self, low: i64, high: Option<i64>, size: usize) -> Result<TypedArray> {
        let (low, high) = bounds(low, high)?;
        let draws = (0..size)
            .map(|_| self.rng.random_range(low..=high))
            .collect::<Vec<_>>();
        Ok(TypedArray::from_column(Column::Int(draws)))
    }

    /// One float from `[0, 1)`
    pub fn random_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// `size` independent floats from `[0, 1)`
    pub fn random_floats(&mut self, size: usize) -> TypedArray {
        let draws = (0..size).map(|_| self.rng.random::<f64>()).collect::<Vec<_>>();
        TypedArray::from_column(Column::Float(draws))
    }

    /// One member of `collection`, uniformly
    pub fn choice(&mut self, collection: &[Value]) -> Result<Value> {
        collection
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ArrayError::EmptyCollection)
    }

    /// `size` independent picks from `collection`, with replacement
    ///
    /// The dtype follows the first member of the collection.
    pub fn choices(&mut self, collection: &[Value], size: usize) -> Result<TypedArray> {
        let first = collection.first().ok_or(ArrayError::EmptyCollection)?;
        let dtype = infer_dtype(first);
        let picks = (0..size)
            .map(|_| self.choice(collection))
            .collect::<Result<Vec<_>>>()?;
        TypedArray::new(Value::List(picks), dtype)
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn bounds(low: i64, high: Option<i64>) -> Result<(i64, i64)> {
    let (low, high) = match high {
        Some(high) => (low, high),
        None => (0, low),
    };
    if low > high {
        return Err(ArrayError::EmptyRange { low, high });
    }
    Ok((low, high))
}

fn infer_dtype(value: &Value) -> DType {
    match value {
        Value::Null | Value::Int(_) => DType::Int,
        Value::Float(_) => DType::Float,
        Value::String(_) => DType::Str,
        Value::Bool(_) => DType::Bool,
        Value::List(_) | Value::Object(_) => value
            .members()
            .and_then(|m| m.first().map(|v| infer_dtype(v)))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_int_default_low() {
        let mut sampler = RandomSampler::seeded(7);
        for _ in 0..200 {
            let x = sampler.random_int(10, None).unwrap();
            assert!((0..=10).contains(&x));
        }
    }

    #[test]
    fn test_random_int_degenerate_range() {
        let mut sampler = RandomSampler::seeded(1);
        assert_eq!(sampler.random_int(4, Some(4)).unwrap(), 4);
        assert_eq!(sampler.random_int(0, None).unwrap(), 0);
    }

    #[test]
    fn test_empty_range() {
        let mut sampler = RandomSampler::seeded(1);
        assert!(matches!(
            sampler.random_int(100, Some(5)),
            Err(ArrayError::EmptyRange { low: 100, high: 5 })
        ));
        assert!(sampler.random_ints(-3, None, 2).is_err());
    }

    #[test]
    fn test_choice_empty() {
        let mut sampler = RandomSampler::seeded(1);
        assert!(matches!(sampler.choice(&[]), Err(ArrayError::EmptyCollection)));
        assert!(matches!(
            sampler.choices(&[], 3),
            Err(ArrayError::EmptyCollection)
        ));
    }

    #[test]
    fn test_infer_dtype() {
        assert_eq!(infer_dtype(&Value::Float(1.0)), DType::Float);
        assert_eq!(infer_dtype(&Value::from(vec!["a"])), DType::Str);
        assert_eq!(infer_dtype(&Value::List(vec![])), DType::Int);
    }
}
