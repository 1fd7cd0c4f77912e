//! Hardware acceleration detection
//!
//! The capability flag is the only process-wide state in the crate. It is computed lazily on
//! first use and stored in an atomic; concurrent first callers may each run detection, which
//! is deterministic, so the redundant stores are harmless and no lock is needed.
//!
//! # Platform Behavior
//! - **x86_64**: SSE4.1 + SSSE3 via CPUID (`cpufeatures`) with the `runtime-dispatch` feature,
//!   otherwise only the compile-time `target_feature`s count
//! - **aarch64**: NEON is architecturally present
//! - **other targets, big-endian targets, `force-scalar`**: scalar fallback only

use core::sync::atomic::{AtomicU8, Ordering};

/// CPU features relevant to the 64-bit kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// SSE4.1 (x86_64)
    pub has_sse41: bool,

    /// SSSE3 (x86_64)
    pub has_ssse3: bool,

    /// Advanced SIMD (aarch64)
    pub has_neon: bool,
}

impl CpuFeatures {
    /// Detect CPU features of the running machine.
    ///
    /// The first CPUID query is cached by `cpufeatures`; later calls are near free.
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "runtime-dispatch"))]
        {
            cpufeatures::new!(cpuid_sse41, "sse4.1");
            cpufeatures::new!(cpuid_ssse3, "ssse3");

            Self {
                has_sse41: cpuid_sse41::get(),
                has_ssse3: cpuid_ssse3::get(),
                has_neon: false,
            }
        }

        #[cfg(not(all(target_arch = "x86_64", feature = "runtime-dispatch")))]
        {
            Self {
                has_sse41: cfg!(target_feature = "sse4.1"),
                has_ssse3: cfg!(target_feature = "ssse3"),
                has_neon: cfg!(all(target_arch = "aarch64", target_feature = "neon")),
            }
        }
    }
}

/// Acceleration level selected for the native backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Acceleration {
    /// Scalar fallback (no kernels, always available)
    Scalar = 1,

    /// SSE2/SSSE3/SSE4.1 kernels on the low half of an XMM register (x86_64)
    Sse41 = 2,

    /// NEON kernels on 64-bit D registers (aarch64)
    Neon = 3,
}

const UNINITIALIZED: u8 = 0;

static ACCELERATION: AtomicU8 = AtomicU8::new(UNINITIALIZED);

impl Acceleration {
    /// Pick the acceleration level for a set of CPU features.
    ///
    /// Kernels exist only for little-endian x86_64 and aarch64 and are compiled out entirely
    /// by the `force-scalar` feature.
    pub fn select(features: CpuFeatures) -> Self {
        if cfg!(feature = "force-scalar") || !cfg!(target_endian = "little") {
            return Acceleration::Scalar;
        }

        if cfg!(target_arch = "x86_64") && features.has_sse41 && features.has_ssse3 {
            return Acceleration::Sse41;
        }

        if cfg!(target_arch = "aarch64") && features.has_neon {
            return Acceleration::Neon;
        }

        Acceleration::Scalar
    }

    /// The cached level for this process, detected on first use.
    #[inline(always)]
    pub fn current() -> Self {
        match ACCELERATION.load(Ordering::Relaxed) {
            2 => Acceleration::Sse41,
            3 => Acceleration::Neon,
            1 => Acceleration::Scalar,
            _ => Self::initialize(),
        }
    }

    #[cold]
    fn initialize() -> Self {
        let features = CpuFeatures::detect();
        let level = Self::select(features);

        tracing::debug!(
            target: "vector64::dispatch",
            sse41 = features.has_sse41,
            ssse3 = features.has_ssse3,
            neon = features.has_neon,
            acceleration = level.name(),
            "selected vector acceleration"
        );

        ACCELERATION.store(level as u8, Ordering::Relaxed);
        level
    }

    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Acceleration::Scalar => "scalar",
            Acceleration::Sse41 => "sse4.1",
            Acceleration::Neon => "neon",
        }
    }

    /// True unless this is [`Acceleration::Scalar`]
    pub const fn is_accelerated(self) -> bool {
        !matches!(self, Acceleration::Scalar)
    }
}

/// Whether vector operations run on platform kernels in this process.
///
/// Results are identical either way; this only reports which path produces them.
#[inline]
pub fn is_hardware_accelerated() -> bool {
    Acceleration::current().is_accelerated()
}
