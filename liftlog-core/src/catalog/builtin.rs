//! The shipped catalog: five muscle groups, four exercises each.

use super::{Catalog, Exercise, MuscleGroup, Weight};

fn exercise(
    id: &str,
    name: &str,
    instructions: &str,
    default_sets: u32,
    last_weight: Option<Weight>,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        instructions: instructions.to_string(),
        default_sets,
        last_weight,
    }
}

impl Catalog {
    /// The built-in reference catalog. A host may substitute its own
    /// catalog; the machine only relies on the `Catalog` shape.
    pub fn builtin() -> Self {
        let groups = vec![
            MuscleGroup {
                id: "chest".to_string(),
                name: "CHEST".to_string(),
                last_workout: "2 days ago".to_string(),
                next_suggestion: "Increase bench press by 2.5kg".to_string(),
                exercises: vec![
                    exercise(
                        "bench-press",
                        "Bench Press",
                        "Lower the bar to mid-chest, press up with elbows at ~45 degrees.",
                        4,
                        Some(Weight::kg(60.0)),
                    ),
                    exercise(
                        "incline-press",
                        "Incline Press",
                        "Bench at 30 degrees, touch the bar just below the collarbone.",
                        3,
                        Some(Weight::kg(45.0)),
                    ),
                    exercise(
                        "chest-fly",
                        "Chest Fly",
                        "Slight elbow bend, open wide, squeeze at the top.",
                        3,
                        Some(Weight::kg(14.0)),
                    ),
                    exercise(
                        "push-ups",
                        "Push-ups",
                        "Body in a straight line, chest to the floor each rep.",
                        3,
                        None,
                    ),
                ],
            },
            MuscleGroup {
                id: "back".to_string(),
                name: "BACK".to_string(),
                last_workout: "3 days ago".to_string(),
                next_suggestion: "Try adding 1 more pull-up rep".to_string(),
                exercises: vec![
                    exercise(
                        "pull-ups",
                        "Pull-ups",
                        "Dead hang to chin over the bar, no kipping.",
                        3,
                        None,
                    ),
                    exercise(
                        "barbell-rows",
                        "Barbell Rows",
                        "Hinge to ~45 degrees, pull the bar to the lower ribs.",
                        4,
                        Some(Weight::kg(70.0)),
                    ),
                    exercise(
                        "lat-pulldown",
                        "Lat Pulldown",
                        "Pull to the upper chest, elbows driving down and back.",
                        3,
                        Some(Weight::kg(55.0)),
                    ),
                    exercise(
                        "deadlifts",
                        "Deadlifts",
                        "Brace, push the floor away, lock out with the hips.",
                        3,
                        Some(Weight::kg(100.0)),
                    ),
                ],
            },
            MuscleGroup {
                id: "shoulders".to_string(),
                name: "SHOULDERS".to_string(),
                last_workout: "1 day ago".to_string(),
                next_suggestion: "Perfect form on lateral raises".to_string(),
                exercises: vec![
                    exercise(
                        "shoulder-press",
                        "Shoulder Press",
                        "Press overhead without flaring the ribs.",
                        4,
                        Some(Weight::kg(40.0)),
                    ),
                    exercise(
                        "lateral-raises",
                        "Lateral Raises",
                        "Raise to shoulder height, lead with the elbows.",
                        3,
                        Some(Weight::kg(8.0)),
                    ),
                    exercise(
                        "front-raises",
                        "Front Raises",
                        "Controlled raise to eye level, no swing.",
                        3,
                        Some(Weight::kg(8.0)),
                    ),
                    exercise(
                        "rear-delt-fly",
                        "Rear Delt Fly",
                        "Hinge forward, pull the dumbbells wide and back.",
                        3,
                        Some(Weight::kg(7.0)),
                    ),
                ],
            },
            MuscleGroup {
                id: "arms".to_string(),
                name: "ARMS".to_string(),
                last_workout: "2 days ago".to_string(),
                next_suggestion: "Increase curl weight by 1kg".to_string(),
                exercises: vec![
                    exercise(
                        "bicep-curls",
                        "Bicep Curls",
                        "Elbows pinned to the sides, full range of motion.",
                        3,
                        Some(Weight::kg(12.0)),
                    ),
                    exercise(
                        "tricep-dips",
                        "Tricep Dips",
                        "Shoulders down, descend until the upper arm is parallel.",
                        3,
                        None,
                    ),
                    exercise(
                        "hammer-curls",
                        "Hammer Curls",
                        "Neutral grip, squeeze at the top of each rep.",
                        3,
                        Some(Weight::kg(12.0)),
                    ),
                    exercise(
                        "close-grip-press",
                        "Close-Grip Press",
                        "Hands shoulder width, elbows tucked through the press.",
                        3,
                        Some(Weight::kg(45.0)),
                    ),
                ],
            },
            MuscleGroup {
                id: "legs".to_string(),
                name: "LEGS".to_string(),
                last_workout: "Today".to_string(),
                next_suggestion: "Add 5kg to squat next session".to_string(),
                exercises: vec![
                    exercise(
                        "squats",
                        "Squats",
                        "Brace, sit between the hips, drive up through mid-foot.",
                        4,
                        Some(Weight::kg(80.0)),
                    ),
                    exercise(
                        "leg-press",
                        "Leg Press",
                        "Feet shoulder width, lower until the knees reach ~90 degrees.",
                        3,
                        Some(Weight::kg(140.0)),
                    ),
                    exercise(
                        "lunges",
                        "Lunges",
                        "Long stride, rear knee just above the floor.",
                        3,
                        Some(Weight::kg(16.0)),
                    ),
                    exercise(
                        "calf-raises",
                        "Calf Raises",
                        "Full stretch at the bottom, pause at the top.",
                        3,
                        Some(Weight::kg(40.0)),
                    ),
                ],
            },
        ];

        Catalog {
            groups,
            // The home screen pitches chest as the next workout.
            recommended: "chest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.groups.len(), 5);
        assert!(catalog.group(&catalog.recommended).is_some());
        for group in &catalog.groups {
            assert_eq!(group.exercises.len(), 4);
            for ex in &group.exercises {
                assert!(ex.default_sets >= 1, "{} has no sets", ex.id);
            }
        }
    }

    #[test]
    fn bodyweight_exercises_have_no_weight() {
        let catalog = Catalog::builtin();
        let chest = catalog.group("chest").unwrap();
        let push_ups = chest.exercises.iter().find(|e| e.id == "push-ups").unwrap();
        assert!(push_ups.last_weight.is_none());
    }
}
