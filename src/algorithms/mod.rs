//! Sorting algorithm registry
//!
//! Every algorithm shares one contract, [`SortFn`]: it receives the dataset
//! by mutable reference and leaves it in non-decreasing order, or reports a
//! [`SortError`]. The registry maps stable names to those functions and is
//! resolved once per benchmark invocation, before any trial runs.

pub mod bubble;
pub mod counting;
pub mod heapsort;
pub mod insertion;
pub mod mergesort;
pub mod quicksort;
pub mod radix;

use std::collections::HashMap;

use crate::{
    constants::algorithms,
    error::{AppError, AppResult},
};

/// Signature every registered algorithm satisfies
pub type SortFn = fn(&mut Vec<u32>) -> Result<(), SortError>;

/// Failure reported by an algorithm for a particular input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Range too large for counting sort: {0}")]
    RangeTooLarge(u64),

    #[error("{0}")]
    Failed(String),
}

/// Name to algorithm lookup table
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, SortFn>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in algorithm
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(algorithms::BUBBLE, bubble::sort);
        registry.register(algorithms::INSERTION, insertion::sort);
        registry.register(algorithms::QUICKSORT, quicksort::sort);
        registry.register(algorithms::MERGESORT, mergesort::sort);
        registry.register(algorithms::HEAPSORT, heapsort::sort);
        registry.register(algorithms::RADIX, radix::sort);
        registry.register(algorithms::COUNTING, counting::sort);
        registry.register(algorithms::STD, std_sort);

        registry
    }

    /// Register an algorithm, replacing any previous entry with the same name
    pub fn register(&mut self, name: impl Into<String>, sort: SortFn) {
        self.algorithms.insert(name.into(), sort);
    }

    /// Check if an algorithm is registered
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// List all registered names, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up a single algorithm
    pub fn get(&self, name: &str) -> AppResult<SortFn> {
        self.algorithms.get(name).copied().ok_or_else(|| {
            AppError::UnknownAlgorithm(format!(
                "'{}' (available: {})",
                name,
                self.list().join(", ")
            ))
        })
    }

    /// Resolve a requested list of names, in request order.
    ///
    /// Fails on the first unknown name, on duplicates, and on an empty
    /// request, so a bad configuration is reported before any work starts.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> AppResult<Vec<(String, SortFn)>> {
        if names.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one algorithm must be requested".to_string(),
            ));
        }

        let mut resolved: Vec<(String, SortFn)> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if resolved.iter().any(|(existing, _)| existing == name) {
                return Err(AppError::InvalidInput(format!(
                    "algorithm '{}' requested more than once",
                    name
                )));
            }
            resolved.push((name.to_string(), self.get(name)?));
        }

        Ok(resolved)
    }
}

/// The standard library's stable sort, as a baseline
pub fn std_sort(data: &mut Vec<u32>) -> Result<(), SortError> {
    data.sort();
    Ok(())
}

#[cfg(test)]
pub(crate) fn is_non_decreasing(data: &[u32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_fails(_: &mut Vec<u32>) -> Result<(), SortError> {
        Err(SortError::Failed("nope".into()))
    }

    #[test]
    fn test_builtin_registry_contents() {
        let registry = AlgorithmRegistry::builtin();

        for name in algorithms::ALL {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert!(!registry.contains("shellsort"));
        assert_eq!(registry.list().len(), algorithms::ALL.len());
    }

    #[test]
    fn test_every_builtin_sorts() {
        let registry = AlgorithmRegistry::builtin();
        let input: Vec<u32> = vec![5, 3, 9, 1, 1, 0, 42, 7, 3, 8];
        let mut expected = input.clone();
        expected.sort();

        for name in registry.list() {
            let sort = registry.get(name).unwrap();
            let mut data = input.clone();
            sort(&mut data).unwrap();
            assert_eq!(data, expected, "{} produced wrong output", name);

            let mut empty = Vec::new();
            sort(&mut empty).unwrap();
            assert!(empty.is_empty());
        }
    }

    #[test]
    fn test_resolve_preserves_order() {
        let registry = AlgorithmRegistry::builtin();
        let resolved = registry.resolve(&["radix", "heapsort", "std"]).unwrap();
        let names: Vec<&str> = resolved.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["radix", "heapsort", "std"]);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_duplicates() {
        let registry = AlgorithmRegistry::builtin();

        let err = registry.resolve(&["radix", "shellsort"]).unwrap_err();
        assert!(matches!(err, AppError::UnknownAlgorithm(ref msg) if msg.contains("shellsort")));

        let err = registry.resolve(&["radix", "radix"]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let empty: [&str; 0] = [];
        assert!(registry.resolve(&empty).is_err());
    }

    #[test]
    fn test_register_custom_algorithm() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("broken", always_fails);

        let sort = registry.get("broken").unwrap();
        assert_eq!(sort(&mut vec![1]), Err(SortError::Failed("nope".into())));
    }
}
