// mf-core/src/units.rs
//
// The hydraulic core works in foot-pound-second units: lengths in ft,
// discharge in cfs, velocity in ft/s. uom is used to convert reported values
// to SI and to keep the two hard-coded constants honest.

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, Length as UomLength,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type Length = UomLength;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn ft2(v: f64) -> Area {
    use uom::si::area::square_foot;
    Area::new::<square_foot>(v)
}

#[inline]
pub fn fps(v: f64) -> Velocity {
    use uom::si::velocity::foot_per_second;
    Velocity::new::<foot_per_second>(v)
}

#[inline]
pub fn cfs(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_foot_per_second;
    VolumeRate::new::<cubic_foot_per_second>(v)
}

pub mod constants {
    use super::*;

    /// Manning unit constant for ft and s (1.49 in many texts).
    pub const MANNING_K: f64 = 1.486;

    /// Standard gravity in ft/s².
    pub const GRAVITY: f64 = 32.174;

    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }

    /// Manning constant implied by the metre-to-foot conversion, (m/ft)^(1/3).
    pub fn manning_k_from_si() -> f64 {
        use uom::si::length::{foot, meter};
        Length::new::<meter>(1.0).get::<foot>().cbrt()
    }
}
