//! Physical constants and the defaults of the reference scenario (SI units)

/// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

/// Floor on the separation used by the force law, in meters
pub const SOFTENING_DISTANCE: f64 = 1e9;

/// One hour, the default fixed step
pub const TIMESTEP: f64 = 3600.0;

pub const SOLAR_MASS: f64 = 1.98892e30;
pub const EARTH_MASS: f64 = 5.9722e24;
