//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SIZE ESTIMATION FALLBACKS
// =============================================================================

/// Dataset size returned when no host memory probe succeeds
pub const DEFAULT_MEMORY_DERIVED_SIZE: usize = 10_000;

/// Dataset size returned when no process-count probe succeeds
pub const DEFAULT_PROCESS_DERIVED_SIZE: usize = 1_000;

/// Bytes assumed per dataset element (one `u32`)
pub const DEFAULT_BYTES_PER_ITEM: u64 = 4;

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default dataset sizes when none are configured
pub const DEFAULT_SIZES: &[usize] = &[1_000, 5_000, 10_000];

/// Default number of repeats per (algorithm, size) cell
pub const DEFAULT_REPEATS: u32 = 3;

/// Default fraction of total host memory used in `memory` sizing mode
pub const DEFAULT_MEMORY_FRACTION: f64 = 0.001;

/// Default multiplier applied to the process count in `processes` sizing mode
pub const DEFAULT_PROCESS_MULTIPLIER: usize = 10;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// ALGORITHM LIMITS
// =============================================================================

/// Largest value range counting sort accepts before refusing the input
pub const COUNTING_SORT_MAX_RANGE: u64 = 1_000_000;

// =============================================================================
// ALGORITHM NAMES
// =============================================================================

pub mod algorithms {
    pub const BUBBLE: &str = "bubble";
    pub const INSERTION: &str = "insertion";
    pub const QUICKSORT: &str = "quicksort";
    pub const MERGESORT: &str = "mergesort";
    pub const HEAPSORT: &str = "heapsort";
    pub const RADIX: &str = "radix";
    pub const COUNTING: &str = "counting";
    pub const STD: &str = "std";

    /// Every built-in algorithm, in registration order
    pub const ALL: &[&str] = &[
        BUBBLE, INSERTION, QUICKSORT, MERGESORT, HEAPSORT, RADIX, COUNTING, STD,
    ];

    /// Algorithms run when none are configured (the quadratic ones are opt-in)
    pub const DEFAULT: &[&str] = &[QUICKSORT, MERGESORT, HEAPSORT, RADIX, COUNTING, STD];
}

// =============================================================================
// DATASET CASES
// =============================================================================

pub mod cases {
    pub const RANDOM: &str = "random";
    pub const SORTED: &str = "sorted";
    pub const REVERSED: &str = "reversed";

    pub const ALL: &[&str] = &[RANDOM, SORTED, REVERSED];
}

// =============================================================================
// SIZING MODES
// =============================================================================

pub mod size_modes {
    pub const EXPLICIT: &str = "explicit";
    pub const MEMORY: &str = "memory";
    pub const PROCESSES: &str = "processes";

    pub const ALL: &[&str] = &[EXPLICIT, MEMORY, PROCESSES];
}

// =============================================================================
// EXPORT FORMAT
// =============================================================================

/// CSV header, in column order
pub const CSV_HEADER: &[&str] = &["algorithm", "size", "time_s", "mem_bytes", "errors"];

/// Separator used when several error messages share one CSV field
pub const CSV_ERROR_SEPARATOR: &str = "; ";
