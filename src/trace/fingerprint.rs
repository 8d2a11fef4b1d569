use xxhash_rust::xxh3::Xxh3;

use crate::trace::step::Step;

const XXH3_SEED: u64 = 0x5eed_a190_7ace_0001;

/// Stable 128-bit content fingerprint of a trace.
///
/// Two traces fingerprint equal iff their serialized steps are byte-identical, which makes this a
/// cheap determinism check for generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for TraceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash `steps` in order, each one length-prefixed.
///
/// Serializing a [`Step`] cannot fail: every snapshot and tag type derives `Serialize`, holds only
/// ordered containers, and keys its maps by integers or strings. The empty fallback is unreachable.
pub(crate) fn fingerprint_steps(steps: &[Step]) -> TraceFingerprint {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&(steps.len() as u64).to_le_bytes());
    for step in steps {
        let bytes = serde_json::to_vec(step).unwrap_or_default();
        h.update(&(bytes.len() as u64).to_le_bytes());
        h.update(&bytes);
    }
    let v = h.digest128();
    TraceFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/fingerprint.rs"]
mod tests;
