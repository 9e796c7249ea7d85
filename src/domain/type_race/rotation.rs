//! Per-user type rotation.

use serde::Serialize;

use super::{Lcg, RotationEpoch};
use crate::domain::foundation::UserId;
use crate::domain::pokemon::PokemonType;

/// Suffix appended to the type currently assigned in the type war.
pub const ACTIVE_MARKER: &str = " [active]";

/// Ordered type schedule for one user within one epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeRotation(Vec<PokemonType>);

impl TypeRotation {
    /// Shuffles the type catalogue with a generator seeded by
    /// `user_id * epoch`.
    ///
    /// Fisher-Yates from the last index down to 1, drawing `j` from the
    /// inclusive range `0..=i`.
    pub fn for_user(user_id: UserId, epoch: RotationEpoch) -> Self {
        let seed = i64::from(user_id.value()) * epoch.value();
        let mut rng = Lcg::new(seed);
        let mut types = PokemonType::ALL.to_vec();

        for i in (1..types.len()).rev() {
            let j = rng.next_bounded(i as u32) as usize;
            types.swap(i, j);
        }

        Self(types)
    }

    pub fn types(&self) -> &[PokemonType] {
        &self.0
    }

    /// Type names in rotation order, with [`ACTIVE_MARKER`] appended to the
    /// entry equal to `active`. Unknown or absent values mark nothing.
    pub fn mark_active(&self, active: Option<&str>) -> Vec<String> {
        self.0
            .iter()
            .map(|ty| match active {
                Some(name) if name == ty.as_str() => format!("{}{}", ty, ACTIVE_MARKER),
                _ => ty.to_string(),
            })
            .collect()
    }
}
