//! Milestone catalog and metadata
//!
//! All milestones are defined here with their unlock conditions. The catalog
//! is fixed: it never grows or shrinks at runtime, and `CATALOG` order is the
//! order unlock notifications are emitted in.

use super::counters::Counters;

/// Unique identifier for each milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneId {
    FirstBlood,
    Worker,
    Psycho,
    Hoarder,
    Quitter,
    Anger,
    Liar,
}

impl MilestoneId {
    /// Get the string ID for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstBlood => "first_blood",
            Self::Worker => "worker",
            Self::Psycho => "psycho",
            Self::Hoarder => "hoarder",
            Self::Quitter => "quitter",
            Self::Anger => "anger",
            Self::Liar => "liar",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_blood" => Some(Self::FirstBlood),
            "worker" => Some(Self::Worker),
            "psycho" => Some(Self::Psycho),
            "hoarder" => Some(Self::Hoarder),
            "quitter" => Some(Self::Quitter),
            "anger" => Some(Self::Anger),
            "liar" => Some(Self::Liar),
            _ => None,
        }
    }

    /// Whether the unlock condition holds for the given state.
    ///
    /// `pending_tasks` is the count of not-yet-completed tasks, supplied by
    /// the caller because the task list lives outside the tracker.
    pub fn satisfied(&self, counters: &Counters, pending_tasks: usize) -> bool {
        match self {
            Self::FirstBlood => counters.tasks_completed >= 1,
            Self::Worker => counters.tasks_completed >= 5,
            Self::Psycho => counters.tasks_completed >= 20,
            Self::Hoarder => pending_tasks >= 10,
            Self::Quitter => counters.tasks_deleted >= 1,
            Self::Anger => counters.vent_clicks >= 50,
            Self::Liar => counters.excuses_used >= 3,
        }
    }
}

/// Symbolic icon identifier for a milestone
///
/// The UI layer owns the mapping from these to actual visual assets; the
/// catalog never references rendering types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneIcon {
    Suspect,
    Paperwork,
    Shield,
    Trophy,
    TrashBin,
    Lightning,
    Stamp,
}

/// Milestone definition with all metadata
#[derive(Debug, Clone)]
pub struct Milestone {
    pub id: MilestoneId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: MilestoneIcon,
}

/// All milestone definitions, in evaluation and notification order
pub static CATALOG: &[Milestone] = &[
    Milestone {
        id: MilestoneId::FirstBlood,
        title: "First Step",
        description: "Finished 1 task. Don't strain yourself.",
        icon: MilestoneIcon::Suspect,
    },
    Milestone {
        id: MilestoneId::Worker,
        title: "Office Plankton",
        description: "Finished 5 tasks. Nobody is paying you for this.",
        icon: MilestoneIcon::Paperwork,
    },
    Milestone {
        id: MilestoneId::Psycho,
        title: "Maniac",
        description: "Finished 20 tasks. Your doctor is concerned.",
        icon: MilestoneIcon::Shield,
    },
    Milestone {
        id: MilestoneId::Hoarder,
        title: "Hoarder",
        description: "Piled up 10 unfinished tasks.",
        icon: MilestoneIcon::Trophy,
    },
    Milestone {
        id: MilestoneId::Quitter,
        title: "Pushover",
        description: "Deleted a task instead of doing it.",
        icon: MilestoneIcon::TrashBin,
    },
    Milestone {
        id: MilestoneId::Anger,
        title: "Psychopath",
        description: "Mashed the vent button 50 times.",
        icon: MilestoneIcon::Lightning,
    },
    Milestone {
        id: MilestoneId::Liar,
        title: "Bureaucrat",
        description: "Used 3 excuses.",
        icon: MilestoneIcon::Stamp,
    },
];

impl Milestone {
    /// Get milestone definition by ID
    pub fn get(id: MilestoneId) -> &'static Milestone {
        CATALOG
            .iter()
            .find(|m| m.id == id)
            .expect("All milestones should be defined")
    }

    /// Get total number of milestones
    pub fn total_count() -> usize {
        CATALOG.len()
    }
}
