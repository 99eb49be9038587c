//! Sample tasks for populating an empty store.

use crate::task::domain::TaskStatus;

/// Title, description and status of one sample task.
pub(super) struct SampleTask {
    pub(super) title: &'static str,
    pub(super) description: &'static str,
    pub(super) status: TaskStatus,
}

pub(super) const SAMPLE_TASKS: [SampleTask; 8] = [
    SampleTask {
        title: "Complete project documentation",
        description: "Write comprehensive README and API documentation",
        status: TaskStatus::InProgress,
    },
    SampleTask {
        title: "Review pull requests",
        description: "Review and merge pending PRs from team members",
        status: TaskStatus::Todo,
    },
    SampleTask {
        title: "Fix authentication bug",
        description: "Resolve the JWT token expiration issue",
        status: TaskStatus::Done,
    },
    SampleTask {
        title: "Prepare demo presentation",
        description: "Create slides for stakeholder meeting",
        status: TaskStatus::InProgress,
    },
    SampleTask {
        title: "Update dependencies",
        description: "Update all crate dependencies to their latest stable versions",
        status: TaskStatus::Todo,
    },
    SampleTask {
        title: "Write unit tests",
        description: "Increase code coverage to 80%",
        status: TaskStatus::Todo,
    },
    SampleTask {
        title: "Deploy to staging",
        description: "Deploy latest build to staging environment",
        status: TaskStatus::Done,
    },
    SampleTask {
        title: "Design new feature mockups",
        description: "Create UI mockups for the new dashboard feature",
        status: TaskStatus::InProgress,
    },
];
