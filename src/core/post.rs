use super::params::Params;
use smallvec::SmallVec;

/// Post-processing passes in the order they are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    Bloom,
    Glitch,
    Film,
    Outline,
    Fxaa,
}

impl PassKind {
    pub const ORDER: [PassKind; 5] = [
        Self::Bloom,
        Self::Glitch,
        Self::Film,
        Self::Outline,
        Self::Fxaa,
    ];

    pub fn enabled(self, params: &Params) -> bool {
        match self {
            Self::Bloom => params.bloom,
            Self::Glitch => params.glitch,
            Self::Film => params.film,
            Self::Outline => params.outline,
            Self::Fxaa => params.fxaa,
        }
    }
}

pub type PassPlan = SmallVec<[PassKind; 5]>;

/// Enabled passes for this frame, in chain order. Disabled passes are absent.
pub fn pass_plan(params: &Params) -> PassPlan {
    PassKind::ORDER
        .iter()
        .copied()
        .filter(|p| p.enabled(params))
        .collect()
}
