/// Full charge, in hundredths of a percent.
const FULL_CHARGE: i32 = 10_000;

/// Drain per tick, in hundredths of a percent. At 0.05 percent per tick
/// a full battery lasts exactly 2000 ticks.
const DRAIN_PER_TICK: i32 = 5;

/// Battery charge, tick-counted rather than wall-clock driven.
///
/// Stored in hundredths of a percent so that repeated draining stays
/// exact; the float accessors are for display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Battery {
    charge: i32,
}

impl Battery {
    #[must_use]
    pub fn new() -> Self {
        Self {
            charge: FULL_CHARGE,
        }
    }

    pub fn drain(&mut self) {
        self.charge = (self.charge - DRAIN_PER_TICK).max(0);
    }

    pub fn reset(&mut self) {
        self.charge = FULL_CHARGE;
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.charge <= 0
    }

    /// Remaining charge in percent, `0.0..=100.0`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "charge fits in a mantissa")]
    pub fn percent(&self) -> f32 {
        self.charge as f32 / 100.0
    }

    /// Remaining charge as a fraction of a full battery, `0.0..=1.0`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "charge fits in a mantissa")]
    pub fn fraction(&self) -> f32 {
        self.charge as f32 / FULL_CHARGE as f32
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::new()
    }
}
