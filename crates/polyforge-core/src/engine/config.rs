use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Bounds of the uniform random draw used by the self-avoiding walk, one
/// `(min, max)` pair per Cartesian axis. The z draw is additionally scaled
/// by the per-monomer bias (see [`GenerationConfig::damping_factor`]), which
/// turns the walk into a z-biased chain growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Default for ShiftBounds {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
            z_min: -1.0,
            z_max: 1.0,
        }
    }
}

impl ShiftBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let axes = [
            ("shift.x", self.x_min, self.x_max),
            ("shift.y", self.y_min, self.y_max),
            ("shift.z", self.z_min, self.z_max),
        ];
        for (name, min, max) in axes {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: "bounds must be finite".to_string(),
                });
            }
            if min > max {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: format!("lower bound {min} exceeds upper bound {max}"),
                });
            }
        }
        Ok(())
    }
}

/// Tunable parameters of a structure generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Minimum allowed distance between a candidate monomer's atoms and all
    /// previously placed atoms. Placements at exactly this distance are
    /// accepted.
    pub min_distance: f64,
    /// Multiplied by the monomer's atom count to produce the z-axis bias of
    /// the random draw; bulkier units are pushed farther along the growth
    /// axis.
    pub damping_factor: f64,
    /// Per-axis bounds of the random draw.
    pub shift: ShiftBounds,
    /// Random draws attempted per placement before the attempt is abandoned.
    pub max_iterations: usize,
    /// Whole-structure generation attempts before giving up.
    pub max_cycles: usize,
    /// Record explicit intra-residue bonds in addition to the chain bonds.
    pub explicit_bonds: bool,
    /// Drop bond records whose unordered endpoint pair was already recorded.
    pub dedup_bonds: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            damping_factor: 0.5,
            shift: ShiftBounds::default(),
            max_iterations: 1000,
            max_cycles: 100,
            explicit_bonds: false,
            dedup_bonds: true,
        }
    }
}

/// Builder for [`GenerationConfig`]; unset fields fall back to the defaults.
#[derive(Debug, Default)]
pub struct GenerationConfigBuilder {
    min_distance: Option<f64>,
    damping_factor: Option<f64>,
    shift: Option<ShiftBounds>,
    max_iterations: Option<usize>,
    max_cycles: Option<usize>,
    explicit_bonds: Option<bool>,
    dedup_bonds: Option<bool>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_distance(mut self, value: f64) -> Self {
        self.min_distance = Some(value);
        self
    }
    pub fn damping_factor(mut self, value: f64) -> Self {
        self.damping_factor = Some(value);
        self
    }
    pub fn shift(mut self, bounds: ShiftBounds) -> Self {
        self.shift = Some(bounds);
        self
    }
    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }
    pub fn max_cycles(mut self, value: usize) -> Self {
        self.max_cycles = Some(value);
        self
    }
    pub fn explicit_bonds(mut self, value: bool) -> Self {
        self.explicit_bonds = Some(value);
        self
    }
    pub fn dedup_bonds(mut self, value: bool) -> Self {
        self.dedup_bonds = Some(value);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let defaults = GenerationConfig::default();
        let config = GenerationConfig {
            min_distance: self.min_distance.unwrap_or(defaults.min_distance),
            damping_factor: self.damping_factor.unwrap_or(defaults.damping_factor),
            shift: self.shift.unwrap_or(defaults.shift),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            max_cycles: self.max_cycles.unwrap_or(defaults.max_cycles),
            explicit_bonds: self.explicit_bonds.unwrap_or(defaults.explicit_bonds),
            dedup_bonds: self.dedup_bonds.unwrap_or(defaults.dedup_bonds),
        };

        if !(config.min_distance.is_finite() && config.min_distance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "min_distance",
                reason: format!("must be a positive finite number, got {}", config.min_distance),
            });
        }
        if !(config.damping_factor.is_finite() && config.damping_factor >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "damping_factor",
                reason: format!(
                    "must be a non-negative finite number, got {}",
                    config.damping_factor
                ),
            });
        }
        config.shift.validate()?;
        if config.max_iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_iterations",
                reason: "at least one draw per placement is required".to_string(),
            });
        }
        if config.max_cycles == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_cycles",
                reason: "at least one generation cycle is required".to_string(),
            });
        }

        Ok(config)
    }
}
