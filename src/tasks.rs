//! Maintenance task board.
//!
//! Overdue derivation compares ISO `YYYY-MM-DD` strings, which order the same
//! as the dates themselves. Every operation that depends on the current date
//! takes `today` as an argument so the logic stays clock-free and testable.

use crate::models::{MaintenanceTask, TaskCounts, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Overdue,
}

impl TaskFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskBoard {
    tasks: Vec<MaintenanceTask>,
    next_id: u64,
}

impl TaskBoard {
    pub fn new(tasks: Vec<MaintenanceTask>) -> Self {
        let next_id = tasks.len() as u64 + 1;
        Self { tasks, next_id }
    }

    /// Appends a new task. Status is always `pending` regardless of what the
    /// caller supplied; `last_completed` starts empty.
    pub fn add(
        &mut self,
        title: String,
        description: String,
        priority: TaskPriority,
        due_date: String,
        frequency: String,
        estimated_time: String,
        notes: Option<String>,
    ) -> &MaintenanceTask {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let ix = self.tasks.len();
        self.tasks.push(MaintenanceTask {
            id,
            title,
            description,
            priority,
            status: TaskStatus::Pending,
            due_date,
            last_completed: None,
            frequency,
            estimated_time,
            notes,
        });
        &self.tasks[ix]
    }

    /// Flips `completed <-> pending`. Completing stamps `last_completed` with
    /// `today`; reopening leaves the stamp from the previous completion.
    /// Returns `None` when the id is unknown.
    pub fn toggle(&mut self, id: &str, today: &str) -> Option<&MaintenanceTask> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        if task.status == TaskStatus::Completed {
            task.status = TaskStatus::Pending;
        } else {
            task.status = TaskStatus::Completed;
            task.last_completed = Some(today.to_string());
        }
        Some(task)
    }

    pub fn filtered(&self, filter: TaskFilter, today: &str) -> Vec<MaintenanceTask> {
        self.tasks
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => task.status == TaskStatus::Pending,
                TaskFilter::Overdue => is_overdue(task, today),
            })
            .cloned()
            .collect()
    }

    pub fn counts(&self, today: &str) -> TaskCounts {
        TaskCounts {
            total: self.tasks.len(),
            pending: self
                .tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Pending)
                .count(),
            overdue: self
                .tasks
                .iter()
                .filter(|task| is_overdue(task, today))
                .count(),
            completed: self
                .tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Completed)
                .count(),
        }
    }

    pub fn speech(&self, today: &str) -> String {
        let counts = self.counts(today);
        format!(
            "You have {} pending maintenance tasks, with {} overdue.",
            counts.pending, counts.overdue
        )
    }
}

fn is_overdue(task: &MaintenanceTask, today: &str) -> bool {
    task.status == TaskStatus::Pending && task.due_date.as_str() < today
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    const TODAY: &str = "2024-02-10";

    fn seeded() -> TaskBoard {
        TaskBoard::new(seed::tasks())
    }

    #[test]
    fn add_forces_pending_status() {
        let mut board = seeded();
        let task = board.add(
            "Flush sediment trap".to_string(),
            "Open the drain valve until water runs clear".to_string(),
            TaskPriority::Low,
            "2024-03-01".to_string(),
            "Quarterly".to_string(),
            "20 minutes".to_string(),
            None,
        );
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.id, "6");
        assert!(task.last_completed.is_none());
    }

    #[test]
    fn toggle_round_trip_keeps_last_completed() {
        let mut board = seeded();

        let toggled = board.toggle("1", TODAY).expect("task 1 exists");
        assert_eq!(toggled.status, TaskStatus::Completed);
        assert_eq!(toggled.last_completed.as_deref(), Some(TODAY));

        let toggled = board.toggle("1", "2024-02-11").expect("task 1 exists");
        assert_eq!(toggled.status, TaskStatus::Pending);
        // Reopening does not clear the completion stamp.
        assert_eq!(toggled.last_completed.as_deref(), Some(TODAY));
    }

    #[test]
    fn toggle_unknown_id_is_rejected() {
        let mut board = seeded();
        assert!(board.toggle("99", TODAY).is_none());
    }

    #[test]
    fn overdue_requires_pending_and_past_due_date() {
        let board = seeded();
        let overdue = board.filtered(TaskFilter::Overdue, TODAY);
        let ids: Vec<_> = overdue.iter().map(|task| task.id.as_str()).collect();
        // Task 1 is pending and due 2024-02-05; task 3 is completed and due
        // 2024-02-01, so it never shows up; task 5 is in-progress, not pending.
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn completing_a_task_removes_it_from_overdue() {
        let mut board = seeded();
        board.toggle("1", TODAY).expect("task 1 exists");
        assert!(board.filtered(TaskFilter::Overdue, TODAY).is_empty());
    }

    #[test]
    fn pending_filter_excludes_in_progress_and_completed() {
        let board = seeded();
        let pending = board.filtered(TaskFilter::Pending, TODAY);
        assert!(pending
            .iter()
            .all(|task| task.status == TaskStatus::Pending));
        assert_eq!(pending.len(), 3);
    }

    #[test]
    fn counts_reflect_seed_data() {
        let counts = seeded().counts(TODAY);
        assert_eq!(counts.total, 5);
        assert_eq!(counts.pending, 3);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.completed, 1);
    }
}
