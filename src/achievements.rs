//! Achievement tracker. Read-only in this scope: progress only advances from
//! real usage telemetry, which has no source here, so the seed values stand
//! for the whole session.

use crate::models::{Achievement, LeaderboardEntry};
use std::cmp::Reverse;

#[derive(Debug, Clone)]
pub struct AchievementSet {
    achievements: Vec<Achievement>,
    leaderboard: Vec<LeaderboardEntry>,
}

impl AchievementSet {
    pub fn new(achievements: Vec<Achievement>, leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self {
            achievements,
            leaderboard,
        }
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    /// The session owner's leaderboard rank, if their row is present.
    pub fn own_rank(&self) -> Option<u32> {
        self.leaderboard
            .iter()
            .find(|entry| entry.name.starts_with("You"))
            .map(|entry| entry.rank)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn total_points(&self) -> u32 {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.points)
            .sum()
    }

    /// Recommended next focus: the cheapest locked achievement by points,
    /// ties broken by the highest progress.
    pub fn next_target(&self) -> Option<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| !a.unlocked)
            .min_by_key(|a| (a.points, Reverse(a.progress)))
    }

    pub fn speech(&self) -> String {
        let mut text = format!(
            "You have unlocked {} out of {} achievements, earning {} points total.",
            self.unlocked_count(),
            self.achievements.len(),
            self.total_points()
        );
        if let Some(rank) = self.own_rank() {
            text.push_str(&format!(
                " You're currently ranked {} on the leaderboard.",
                ordinal(rank)
            ));
        }
        text
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
