//! CPU pinning for the measuring thread.
//!
//! A method's whole digit sweep runs on one core so that migrations do not
//! land inside a timed trial. Linux uses `sched_setaffinity` through libc;
//! other platforms get a guard that does nothing.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    pub type Affinity = libc::cpu_set_t;

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn get_affinity() -> Option<Affinity> {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            (libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn set_affinity(set: &Affinity) -> bool {
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    pub fn single_core(core_id: usize) -> Affinity {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            set
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Affinity = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn get_affinity() -> Option<Affinity> {
        None
    }

    pub fn set_affinity(_set: &Affinity) -> bool {
        false
    }

    pub fn single_core(_core_id: usize) -> Affinity {}
}

/// RAII guard: pins the thread to its current core, restores the previous
/// affinity mask on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    original: Option<platform::Affinity>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let original = platform::get_affinity();
        let pinned_core = match (&original, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::set_affinity(&platform::single_core(core)) => {
                tracing::debug!(core, "pinned measuring thread");
                Some(core)
            }
            _ => None,
        };
        Self {
            pinned_core,
            original,
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_none() {
            return;
        }
        if let Some(original) = &self.original {
            if !platform::set_affinity(original) {
                tracing::warn!("failed to restore CPU affinity");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_affinity_restored_after_drop() {
        let before = platform::get_affinity().map(|set| unsafe { libc::CPU_COUNT(&set) });
        {
            let _guard = CpuPinGuard::new();
        }
        let after = platform::get_affinity().map(|set| unsafe { libc::CPU_COUNT(&set) });
        assert_eq!(before, after);
    }
}
