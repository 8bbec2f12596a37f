use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Fold a textual seed (for example a host-provided hash string) into a `u64` seed.
pub fn seed_from_text(text: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(text.as_bytes());
    h.finish()
}

/// Linearly re-map `value` from `[in_start, in_end]` onto `[out_start, out_end]`.
pub(crate) fn map_range(
    value: f64,
    in_start: f64,
    in_end: f64,
    out_start: f64,
    out_end: f64,
) -> f64 {
    out_start + (value - in_start) / (in_end - in_start) * (out_end - out_start)
}

/// Angular sweep from `from` to `to`: the unsigned gap modulo a full turn, taken the long way
/// around when `to < from`.
pub(crate) fn arc_sweep(from: f64, to: f64) -> f64 {
    let dist = (from - to).abs() % TAU;
    if to < from { TAU - dist } else { dist }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
