//! Engine configuration

use crate::kernels::KernelStrategy;

/// Default cut-off below which `render` omits a basis state
pub const DEFAULT_PRINT_THRESHOLD: f64 = 1e-6;

/// Configuration for [`StateVectorEngine`](crate::StateVectorEngine)
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Smallest amplitude magnitude shown by `render_default`
    ///
    /// Presentation only; has no effect on the simulated state.
    ///
    /// Default: 1e-6
    pub print_threshold: f64,

    /// Kernel used when `apply` is called without an explicit strategy
    ///
    /// Both strategies produce identical amplitudes; insertion visits half
    /// as many indices for one-qubit gates.
    ///
    /// Default: `KernelStrategy::Insertion`
    pub kernel: KernelStrategy,

    /// Reject gates whose matrix is not unitary
    ///
    /// Off by default: the engine applies any matrix as an opaque linear
    /// map. Turning this on never renormalizes the state.
    ///
    /// Default: false
    pub validate_unitarity: bool,

    /// Per-entry tolerance of the unitarity check on `M·M†`
    ///
    /// Default: 1e-10
    pub unitarity_tolerance: f64,

    /// Widest register the engine will allocate
    ///
    /// Default: 30 (16 GiB per amplitude array)
    pub max_qubits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            print_threshold: DEFAULT_PRINT_THRESHOLD,
            kernel: KernelStrategy::Insertion,
            validate_unitarity: false,
            unitarity_tolerance: 1e-10,
            max_qubits: 30,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference configuration: direct kernels, no validation
    pub fn reference() -> Self {
        Self {
            kernel: KernelStrategy::Direct,
            ..Default::default()
        }
    }

    /// Insertion kernels with the unitarity check enabled
    pub fn strict() -> Self {
        Self {
            validate_unitarity: true,
            ..Default::default()
        }
    }

    pub fn with_print_threshold(mut self, threshold: f64) -> Self {
        self.print_threshold = threshold;
        self
    }

    pub fn with_kernel(mut self, kernel: KernelStrategy) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_unitarity_check(mut self, enabled: bool) -> Self {
        self.validate_unitarity = enabled;
        self
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.print_threshold.is_finite() && self.print_threshold > 0.0) {
            return Err(format!(
                "print_threshold must be a positive finite number, got {}",
                self.print_threshold
            ));
        }

        if !(self.unitarity_tolerance.is_finite() && self.unitarity_tolerance >= 0.0) {
            return Err(format!(
                "unitarity_tolerance must be finite and >= 0, got {}",
                self.unitarity_tolerance
            ));
        }

        if self.max_qubits == 0 || self.max_qubits > svsim_state::MAX_QUBITS {
            return Err(format!(
                "max_qubits must be in 1..={}, got {}",
                svsim_state::MAX_QUBITS,
                self.max_qubits
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.print_threshold, 1e-6);
        assert_eq!(config.kernel, KernelStrategy::Insertion);
        assert!(!config.validate_unitarity);
        assert_eq!(config.max_qubits, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::reference().kernel, KernelStrategy::Direct);
        assert!(EngineConfig::strict().validate_unitarity);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::new()
            .with_print_threshold(1e-3)
            .with_kernel(KernelStrategy::Direct)
            .with_unitarity_check(true)
            .with_max_qubits(12);

        assert_eq!(config.print_threshold, 1e-3);
        assert_eq!(config.kernel, KernelStrategy::Direct);
        assert!(config.validate_unitarity);
        assert_eq!(config.max_qubits, 12);
    }

    #[test]
    fn test_validate() {
        for threshold in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let invalid = EngineConfig::default().with_print_threshold(threshold);
            assert!(invalid.validate().is_err());
        }

        assert!(EngineConfig::default().with_max_qubits(0).validate().is_err());

        let invalid = EngineConfig {
            unitarity_tolerance: -1.0,
            ..Default::default()
        };
        assert!(invalid.validate().is_err());
    }
}
