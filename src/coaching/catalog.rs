//! Fixed technique and practice plans shown next to the metric-driven advice.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechniqueTip {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub time_to_improve: &'static str,
    pub drills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TechniqueArea {
    pub category: &'static str,
    pub tips: &'static [TechniqueTip],
}

pub static TECHNIQUE_CATALOG: [TechniqueArea; 3] = [
    TechniqueArea {
        category: "Setup & Posture",
        tips: &[
            TechniqueTip {
                title: "Address Position",
                description: "Maintain athletic posture with slight knee flex and straight back",
                difficulty: Difficulty::Beginner,
                time_to_improve: "1-2 weeks",
                drills: &["Mirror work", "Wall drill for posture", "Setup routine practice"],
            },
            TechniqueTip {
                title: "Grip Fundamentals",
                description: "Ensure proper grip pressure and hand positioning",
                difficulty: Difficulty::Beginner,
                time_to_improve: "2-3 weeks",
                drills: &[
                    "Grip pressure drill",
                    "Alignment stick grip check",
                    "Towel under arms drill",
                ],
            },
        ],
    },
    TechniqueArea {
        category: "Backswing",
        tips: &[
            TechniqueTip {
                title: "Takeaway Path",
                description: "Keep club on plane during first 18 inches of backswing",
                difficulty: Difficulty::Intermediate,
                time_to_improve: "3-4 weeks",
                drills: &[
                    "Alignment stick plane drill",
                    "One-piece takeaway",
                    "Slow motion practice",
                ],
            },
            TechniqueTip {
                title: "Top Position",
                description: "Achieve proper shoulder turn and club position at top",
                difficulty: Difficulty::Intermediate,
                time_to_improve: "4-6 weeks",
                drills: &["Cross-armed drill", "Shoulder turn exercises", "Mirror feedback"],
            },
        ],
    },
    TechniqueArea {
        category: "Downswing & Impact",
        tips: &[
            TechniqueTip {
                title: "Weight Transfer",
                description: "Proper sequence from ground up through impact",
                difficulty: Difficulty::Advanced,
                time_to_improve: "6-8 weeks",
                drills: &["Step drill", "Pump drill", "Impact bag training"],
            },
            TechniqueTip {
                title: "Release Pattern",
                description: "Proper hand and wrist action through impact zone",
                difficulty: Difficulty::Advanced,
                time_to_improve: "8-12 weeks",
                drills: &["Towel drill", "Split grip drill", "Impact position holds"],
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeExercise {
    pub name: &'static str,
    pub duration: &'static str,
    pub reps: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeSession {
    pub day: &'static str,
    pub focus: &'static str,
    pub duration: &'static str,
}

pub const DAILY_ROUTINE_TITLE: &str = "Daily Practice Routine (15 minutes)";

pub const DAILY_ROUTINE: [PracticeExercise; 4] = [
    PracticeExercise {
        name: "Setup Position",
        duration: "3 minutes",
        reps: "10 setups",
    },
    PracticeExercise {
        name: "Slow Motion Swings",
        duration: "5 minutes",
        reps: "20 swings",
    },
    PracticeExercise {
        name: "Impact Position",
        duration: "4 minutes",
        reps: "15 holds",
    },
    PracticeExercise {
        name: "Tempo Training",
        duration: "3 minutes",
        reps: "10 swings",
    },
];

pub const WEEKLY_PLAN_TITLE: &str = "Weekly Practice Plan";

pub const WEEKLY_PLAN: [PracticeSession; 4] = [
    PracticeSession {
        day: "Monday",
        focus: "Setup & Posture",
        duration: "30 minutes",
    },
    PracticeSession {
        day: "Wednesday",
        focus: "Swing Plane & Path",
        duration: "45 minutes",
    },
    PracticeSession {
        day: "Friday",
        focus: "Tempo & Rhythm",
        duration: "30 minutes",
    },
    PracticeSession {
        day: "Saturday",
        focus: "On-Course Practice",
        duration: "2 hours",
    },
];

/// Tips at or below `level`, paired with their category.
pub fn tips_up_to(level: Difficulty) -> Vec<(&'static str, &'static TechniqueTip)> {
    TECHNIQUE_CATALOG
        .iter()
        .flat_map(|area| area.tips.iter().map(move |tip| (area.category, tip)))
        .filter(|(_, tip)| tip.difficulty <= level)
        .collect()
}
