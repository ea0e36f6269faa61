//! Static reference catalog of muscle groups and their exercises.
//!
//! The catalog is an external collaborator of the session machine: it is
//! handed in at construction and never mutated by a session. Sessions work
//! on copies of its exercises.

mod builtin;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lb => write!(f, "lb"),
        }
    }
}

/// A working weight with its unit. An exercise whose last-known weight is
/// absent (`None` on [`Exercise::last_weight`]) is bodyweight-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub amount: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn kg(amount: f64) -> Self {
        Weight {
            amount,
            unit: WeightUnit::Kg,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.amount, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub default_sets: u32,
    pub last_weight: Option<Weight>,
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight_str = self
            .last_weight
            .map(|w| format!(" @ {}", w))
            .unwrap_or_else(|| " (bodyweight)".to_string());
        write!(f, "{} x{} sets{}", self.name, self.default_sets, weight_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroup {
    pub id: String,
    pub name: String,
    /// Display label for when this group was last trained, e.g. "2 days ago".
    pub last_workout: String,
    /// Coaching line shown on the selection screen.
    pub next_suggestion: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<MuscleGroup>,
    /// Group id used by the "today's workout" shortcut.
    pub recommended: String,
}

impl Catalog {
    pub fn group(&self, group_id: &str) -> Option<&MuscleGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Loads a host-supplied catalog. The machine only depends on the
    /// `Catalog` shape, so a served or user-curated catalog can stand in
    /// for the built-in one.
    pub fn from_json(json: &str) -> Result<Catalog> {
        let catalog: Catalog = serde_json::from_str(json).context("malformed catalog JSON")?;
        if catalog.groups.is_empty() {
            bail!("catalog has no muscle groups");
        }
        if catalog.group(&catalog.recommended).is_none() {
            bail!(
                "recommended group {:?} does not exist in the catalog",
                catalog.recommended
            );
        }
        for group in &catalog.groups {
            if group.exercises.is_empty() {
                bail!("muscle group {:?} has no exercises", group.id);
            }
            for exercise in &group.exercises {
                if exercise.default_sets < 1 {
                    bail!("exercise {:?} has a zero set target", exercise.id);
                }
            }
        }
        Ok(catalog)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_round_trips_through_json() {
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        let loaded = Catalog::from_json(&json).unwrap();
        assert_eq!(loaded.groups.len(), Catalog::builtin().groups.len());
    }

    #[test]
    fn unknown_recommended_group_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.recommended = "neck".to_string();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(Catalog::from_json(&json).is_err());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(Catalog::from_json(r#"{"groups":[],"recommended":"chest"}"#).is_err());
    }
}
