//! Benchmark result models

/// Outcome of a single trial
///
/// A trial either completed, with a wall-clock time and optionally a memory
/// delta, or failed with a message. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialResult {
    Completed {
        /// Wall clock time in seconds
        time_s: f64,
        /// Resident memory after minus before, in bytes
        memory_delta: Option<i64>,
    },
    Failed {
        error: String,
    },
}

impl TrialResult {
    /// Create a completed trial
    pub fn completed(time_s: f64, memory_delta: Option<i64>) -> Self {
        Self::Completed {
            time_s,
            memory_delta,
        }
    }

    /// Create a failed trial
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn time(&self) -> Option<f64> {
        match self {
            Self::Completed { time_s, .. } => Some(*time_s),
            Self::Failed { .. } => None,
        }
    }

    pub fn memory_delta(&self) -> Option<i64> {
        match self {
            Self::Completed { memory_delta, .. } => *memory_delta,
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Completed { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Aggregated results of one algorithm across the requested sizes
///
/// The four sequences are index-aligned: position `i` of each describes
/// `sizes[i]`. Entries are only added through [`AlgorithmResult::push`],
/// which keeps them aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmResult {
    sizes: Vec<usize>,
    times: Vec<Option<f64>>,
    mems: Vec<Option<f64>>,
    errors: Vec<Option<Vec<String>>>,
}

impl AlgorithmResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            sizes: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
            mems: Vec::with_capacity(capacity),
            errors: Vec::with_capacity(capacity),
        }
    }

    /// Append one size entry. An empty error list is stored as absent.
    pub(crate) fn push(
        &mut self,
        size: usize,
        avg_time: Option<f64>,
        avg_mem: Option<f64>,
        errors: Vec<String>,
    ) {
        self.sizes.push(size);
        self.times.push(avg_time);
        self.mems.push(avg_mem);
        self.errors
            .push(if errors.is_empty() { None } else { Some(errors) });
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Mean time in seconds per size
    pub fn times(&self) -> &[Option<f64>] {
        &self.times
    }

    /// Mean memory delta in bytes per size
    pub fn mems(&self) -> &[Option<f64>] {
        &self.mems
    }

    pub fn errors(&self) -> &[Option<Vec<String>>] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate rows as `(size, time, mem, errors)`
    pub fn rows(&self) -> impl Iterator<Item = ResultRow<'_>> + '_ {
        self.sizes
            .iter()
            .zip(&self.times)
            .zip(&self.mems)
            .zip(&self.errors)
            .map(|(((size, time), mem), errors)| ResultRow {
                size: *size,
                time_s: *time,
                mem_bytes: *mem,
                errors: errors.as_deref(),
            })
    }
}

/// One (size, metrics) row borrowed from an [`AlgorithmResult`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow<'a> {
    pub size: usize,
    pub time_s: Option<f64>,
    pub mem_bytes: Option<f64>,
    pub errors: Option<&'a [String]>,
}

impl ResultRow<'_> {
    pub fn error_count(&self) -> usize {
        self.errors.map_or(0, <[String]>::len)
    }
}

/// Results of one benchmark invocation, keyed by algorithm name
///
/// Algorithms keep the order in which they were requested. A result set has
/// no public mutators; it is built by the aggregator (or reloaded from an
/// export) and handed off whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, AlgorithmResult)>,
}

impl ResultSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the result for `name`
    pub(crate) fn insert(&mut self, name: impl Into<String>, result: AlgorithmResult) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = result,
            None => self.entries.push((name, result)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmResult> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, result)| result)
    }

    /// Algorithm names in insertion order
    pub fn algorithms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AlgorithmResult)> + '_ {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
