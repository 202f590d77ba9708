use super::*;
use serde::Serialize;

/// A solved equilibrium: a strategy profile, whether it is pure, and a
/// human-readable label describing it.
///
/// Produced only by the solving scans and collected in scan order; the
/// order is part of the observable behavior and is preserved everywhere
/// downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    profile: Profile,
    pure: bool,
    label: String,
}

impl Equilibrium {
    /// A pure-strategy equilibrium.
    pub fn pure(profile: Profile, label: String) -> Self {
        Self {
            profile,
            pure: true,
            label,
        }
    }
    /// A mixed (or grid-point) equilibrium.
    pub fn mixed(profile: Profile, label: String) -> Self {
        Self {
            profile,
            pure: false,
            label,
        }
    }
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
    pub fn is_pure(&self) -> bool {
        self.pure
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
