//! Host resource probes

use std::fs;
use std::path::Path;

use sysinfo::{ProcessesToUpdate, System};

/// One host-introspection strategy
pub type Probe = fn() -> Option<u64>;

/// Total host memory in bytes, most direct source first
pub const TOTAL_MEMORY_PROBES: &[Probe] = &[proc_meminfo_total_bytes, sysinfo_total_memory_bytes];

/// Number of live processes, most direct source first
pub const PROCESS_COUNT_PROBES: &[Probe] = &[proc_process_count, sysinfo_process_count];

/// Resident memory of this process in bytes, most direct source first
pub const RESIDENT_MEMORY_PROBES: &[Probe] = &[proc_self_rss_bytes, sysinfo_self_rss_bytes];

/// Run probes in order and return the first value produced
pub fn first_available(what: &str, probes: &[Probe]) -> Option<u64> {
    for (index, probe) in probes.iter().enumerate() {
        if let Some(value) = probe() {
            tracing::trace!(probe = index, value, "{} probe succeeded", what);
            return Some(value);
        }
        tracing::debug!(probe = index, "{} probe unavailable, trying next", what);
    }
    None
}

/// Resident memory of the current process, if any probe can tell
pub fn resident_memory_bytes() -> Option<u64> {
    first_available("resident memory", RESIDENT_MEMORY_PROBES)
}

// =============================================================================
// /proc probes
// =============================================================================

/// `MemTotal` from `/proc/meminfo`
pub fn proc_meminfo_total_bytes() -> Option<u64> {
    let text = fs::read_to_string("/proc/meminfo").ok()?;
    parse_kb_field(&text, "MemTotal:").map(|kb| kb.saturating_mul(1024))
}

/// Numeric entries under `/proc`
pub fn proc_process_count() -> Option<u64> {
    count_process_entries(Path::new("/proc"))
}

/// `VmRSS` from `/proc/self/status`
pub fn proc_self_rss_bytes() -> Option<u64> {
    let text = fs::read_to_string("/proc/self/status").ok()?;
    parse_kb_field(&text, "VmRSS:").map(|kb| kb.saturating_mul(1024))
}

/// Parse a `Key:   <n> kB` line, as found in `/proc/meminfo` and
/// `/proc/<pid>/status`
pub fn parse_kb_field(text: &str, key: &str) -> Option<u64> {
    text.lines()
        .find_map(|line| line.strip_prefix(key))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.parse().ok())
}

/// Count directory entries whose names are all digits (process ids).
/// An unreadable directory or zero matches yields `None`.
pub fn count_process_entries(dir: &Path) -> Option<u64> {
    let count = fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
        })
        .count() as u64;

    (count > 0).then_some(count)
}

/// Count `processor` lines in `/proc/cpuinfo`-formatted text
pub fn count_cpuinfo_processors(text: &str) -> usize {
    text.lines()
        .filter(|line| line.starts_with("processor"))
        .count()
}

// =============================================================================
// sysinfo fallbacks
// =============================================================================

pub fn sysinfo_total_memory_bytes() -> Option<u64> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return None;
    }
    let mut sys = System::new();
    sys.refresh_memory();
    let total = sys.total_memory();
    (total > 0).then_some(total)
}

pub fn sysinfo_process_count() -> Option<u64> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return None;
    }
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);
    let count = sys.processes().len() as u64;
    (count > 0).then_some(count)
}

pub fn sysinfo_self_rss_bytes() -> Option<u64> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return None;
    }
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    sys.process(pid).map(|process| process.memory())
}

// =============================================================================
// Host summary
// =============================================================================

/// Number of logical CPUs: `/proc/cpuinfo`, then the standard library, then 1
pub fn cpu_count() -> usize {
    fs::read_to_string("/proc/cpuinfo")
        .ok()
        .map(|text| count_cpuinfo_processors(&text))
        .filter(|&count| count > 0)
        .or_else(|| std::thread::available_parallelism().ok().map(usize::from))
        .unwrap_or(1)
}

/// Snapshot of the host signals used for sizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub total_memory_bytes: Option<u64>,
    pub process_count: Option<u64>,
    pub cpu_count: usize,
}

impl HostInfo {
    pub fn probe() -> Self {
        Self {
            total_memory_bytes: first_available("total memory", TOTAL_MEMORY_PROBES),
            process_count: first_available("process count", PROCESS_COUNT_PROBES),
            cpu_count: cpu_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:       16318412 kB\nMemFree:         1024000 kB\nMemAvailable:    8123456 kB\n";

    const STATUS: &str = "Name:\tsortbench\nVmPeak:\t  20000 kB\nVmRSS:\t    5120 kB\nThreads:\t1\n";

    #[test]
    fn test_parse_meminfo_total() {
        assert_eq!(parse_kb_field(MEMINFO, "MemTotal:"), Some(16_318_412));
        assert_eq!(parse_kb_field(MEMINFO, "SwapTotal:"), None);
        assert_eq!(parse_kb_field("MemTotal: lots kB", "MemTotal:"), None);
    }

    #[test]
    fn test_parse_status_rss() {
        assert_eq!(parse_kb_field(STATUS, "VmRSS:"), Some(5120));
    }

    #[test]
    fn test_count_process_entries() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1", "42", "1337"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("self")).unwrap();
        fs::write(dir.path().join("meminfo"), MEMINFO).unwrap();

        assert_eq!(count_process_entries(dir.path()), Some(3));
    }

    #[test]
    fn test_count_process_entries_empty_or_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_process_entries(dir.path()), None);
        assert_eq!(count_process_entries(&dir.path().join("missing")), None);
    }

    #[test]
    fn test_count_cpuinfo_processors() {
        let text = "processor\t: 0\nmodel name\t: x\n\nprocessor\t: 1\nmodel name\t: x\n";
        assert_eq!(count_cpuinfo_processors(text), 2);
        assert_eq!(count_cpuinfo_processors(""), 0);
    }

    #[test]
    fn test_first_available_order() {
        fn none() -> Option<u64> {
            None
        }
        fn seven() -> Option<u64> {
            Some(7)
        }
        fn nine() -> Option<u64> {
            Some(9)
        }

        assert_eq!(first_available("test", &[none, seven, nine]), Some(7));
        assert_eq!(first_available("test", &[none, none]), None);
        assert_eq!(first_available("test", &[]), None);
    }

    #[test]
    fn test_cpu_count_positive() {
        assert!(cpu_count() >= 1);
    }
}
