use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A two-dimensional quantity: weight in kg and volume in m³.
/// Used both for the demand of a request and the capacity of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Load {
    pub weight: f64,
    pub volume: f64,
}

impl Load {
    pub const ZERO: Load = Load {
        weight: 0.0,
        volume: 0.0,
    };

    pub fn new(weight: f64, volume: f64) -> Self {
        Self { weight, volume }
    }

    /// Both dimensions are smaller than or equal to those of `capacity`
    pub fn fits_within(&self, capacity: &Load) -> bool {
        self.weight <= capacity.weight && self.volume <= capacity.volume
    }

    /// Per dimension amount by which `self` exceeds `capacity`, zero where it fits
    pub fn excess_over(&self, capacity: &Load) -> Load {
        Load {
            weight: (self.weight - capacity.weight).max(0.0),
            volume: (self.volume - capacity.volume).max(0.0),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.volume.is_finite()
    }

    pub fn is_non_negative(&self) -> bool {
        self.weight >= 0.0 && self.volume >= 0.0
    }
}

impl Add for Load {
    type Output = Load;

    fn add(self, rhs: Load) -> Load {
        Load {
            weight: self.weight + rhs.weight,
            volume: self.volume + rhs.volume,
        }
    }
}

impl Sub for Load {
    type Output = Load;

    fn sub(self, rhs: Load) -> Load {
        Load {
            weight: self.weight - rhs.weight,
            volume: self.volume - rhs.volume,
        }
    }
}

impl Sum for Load {
    fn sum<I: Iterator<Item = Load>>(iter: I) -> Load {
        iter.fold(Load::ZERO, |acc, l| acc + l)
    }
}

impl<'a> Sum<&'a Load> for Load {
    fn sum<I: Iterator<Item = &'a Load>>(iter: I) -> Load {
        iter.copied().sum()
    }
}

impl Display for Load {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kg / {} m³", self.weight, self.volume)
    }
}

/// Share of a vehicle's capacity consumed by its allocation, in whole percent per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Utilization {
    pub weight_pct: u32,
    pub volume_pct: u32,
}

impl Utilization {
    pub fn new(used: &Load, capacity: &Load) -> Self {
        Self {
            weight_pct: round_pct(used.weight, capacity.weight),
            volume_pct: round_pct(used.volume, capacity.volume),
        }
    }
}

/// `round(100 * used / capacity)`, ties rounded away from zero.
/// Zero when nothing is used.
pub fn round_pct(used: f64, capacity: f64) -> u32 {
    if used <= 0.0 || capacity <= 0.0 {
        return 0;
    }
    (100.0 * used / capacity).round() as u32
}
