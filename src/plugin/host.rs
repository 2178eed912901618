//! Host CPU query for live mode

/// Something that can report a logical processor count
pub trait CpuSource {
    fn logical_cpus(&self) -> usize;
}

/// The running host, queried through `num_cpus`
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCpus;

impl CpuSource for HostCpus {
    fn logical_cpus(&self) -> usize {
        num_cpus::get()
    }
}

/// Fixed count standing in for the host in tests
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedCpus(pub usize);

#[cfg(test)]
impl CpuSource for FixedCpus {
    fn logical_cpus(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_reports_at_least_one() {
        assert!(HostCpus.logical_cpus() >= 1);
    }

    #[test]
    fn test_fixed_count() {
        assert_eq!(FixedCpus(8).logical_cpus(), 8);
    }
}
