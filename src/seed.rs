//! Seed datasets for a fresh session. Collections are constructed from these
//! values at startup and reset to them on restart; nothing is persisted.

use crate::models::{
    Achievement, Alert, Guide, LeaderboardEntry, MaintenanceTask, Severity, Story, TaskPriority,
    TaskStatus, Transaction, TransactionKind,
};

/// Balance assumed when the ledger has no entries at all.
pub const INITIAL_BALANCE: i64 = 3570;

/// Tank capacity in liters; drives the dashboard level gauge.
pub const TANK_CAPACITY: i64 = 4200;

pub const DAILY_TIPS: &[&str] = &[
    "Use collected rainwater for watering plants - it's naturally soft and free of chemicals!",
    "Install a first-flush diverter to improve water quality by removing initial roof runoff.",
    "Check your gutters monthly for leaves and debris to ensure optimal water collection.",
    "Monitor usage patterns to optimize your harvesting system efficiency.",
];

pub fn transactions() -> Vec<Transaction> {
    let rows: [(&str, &str, TransactionKind, i64, &str, &str, i64); 8] = [
        (
            "1",
            "2024-02-03",
            TransactionKind::Harvested,
            45,
            "Rainwater collection during morning shower",
            "Natural Collection",
            3570,
        ),
        (
            "2",
            "2024-02-03",
            TransactionKind::Usage,
            -120,
            "Garden irrigation system",
            "Irrigation",
            3525,
        ),
        (
            "3",
            "2024-02-02",
            TransactionKind::Manual,
            200,
            "Manual water addition to tank",
            "Manual Addition",
            3645,
        ),
        (
            "4",
            "2024-02-02",
            TransactionKind::Usage,
            -85,
            "Household cleaning",
            "Domestic Use",
            3445,
        ),
        (
            "5",
            "2024-02-01",
            TransactionKind::Harvested,
            320,
            "Heavy rainfall collection",
            "Natural Collection",
            3530,
        ),
        (
            "6",
            "2024-01-31",
            TransactionKind::System,
            -15,
            "System maintenance water usage",
            "System",
            3210,
        ),
        (
            "7",
            "2024-01-30",
            TransactionKind::Usage,
            -95,
            "Car washing",
            "Outdoor Use",
            3225,
        ),
        (
            "8",
            "2024-01-30",
            TransactionKind::Harvested,
            180,
            "Afternoon rain collection",
            "Natural Collection",
            3320,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, date, kind, amount, description, category, balance)| Transaction {
                id: id.to_string(),
                date: date.to_string(),
                kind,
                amount,
                description: description.to_string(),
                category: category.to_string(),
                balance,
            },
        )
        .collect()
}

pub fn tasks() -> Vec<MaintenanceTask> {
    vec![
        MaintenanceTask {
            id: "1".to_string(),
            title: "Clean Roof Gutters".to_string(),
            description: "Remove leaves, debris, and blockages from gutters and downpipes"
                .to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Pending,
            due_date: "2024-02-05".to_string(),
            last_completed: Some("2024-01-05".to_string()),
            frequency: "Monthly".to_string(),
            estimated_time: "2 hours".to_string(),
            notes: Some("Check for any damage while cleaning".to_string()),
        },
        MaintenanceTask {
            id: "2".to_string(),
            title: "Inspect First Flush Diverter".to_string(),
            description: "Check and clean the first flush diverter system".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            due_date: "2024-02-10".to_string(),
            last_completed: Some("2024-01-10".to_string()),
            frequency: "Monthly".to_string(),
            estimated_time: "30 minutes".to_string(),
            notes: None,
        },
        MaintenanceTask {
            id: "3".to_string(),
            title: "Test Water Quality".to_string(),
            description: "Perform pH, turbidity, and chlorine testing".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Completed,
            due_date: "2024-02-01".to_string(),
            last_completed: Some("2024-02-01".to_string()),
            frequency: "Weekly".to_string(),
            estimated_time: "15 minutes".to_string(),
            notes: Some("All parameters within normal range".to_string()),
        },
        MaintenanceTask {
            id: "4".to_string(),
            title: "Replace Tank Screen".to_string(),
            description: "Replace mosquito-proof screen on tank inlet".to_string(),
            priority: TaskPriority::Low,
            status: TaskStatus::Pending,
            due_date: "2024-02-15".to_string(),
            last_completed: None,
            frequency: "Quarterly".to_string(),
            estimated_time: "45 minutes".to_string(),
            notes: None,
        },
        MaintenanceTask {
            id: "5".to_string(),
            title: "Pump System Check".to_string(),
            description: "Inspect pump operation, pressure, and electrical connections".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            due_date: "2024-02-03".to_string(),
            last_completed: Some("2024-01-03".to_string()),
            frequency: "Monthly".to_string(),
            estimated_time: "1 hour".to_string(),
            notes: Some("Minor pressure drop noted, monitoring closely".to_string()),
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "1".to_string(),
            title: "Tank Full".to_string(),
            message: "Water tank has reached 95% capacity. Consider using water for irrigation \
                      or closing collection valves."
                .to_string(),
            severity: Severity::Warning,
            timestamp: "2 minutes ago".to_string(),
            dismissed: false,
            action_required: true,
        },
        Alert {
            id: "2".to_string(),
            title: "Low Rain Expected".to_string(),
            message: "Weather forecast shows no rain for the next 5 days. Monitor usage carefully."
                .to_string(),
            severity: Severity::Info,
            timestamp: "1 hour ago".to_string(),
            dismissed: false,
            action_required: false,
        },
        Alert {
            id: "3".to_string(),
            title: "Filter Maintenance Due".to_string(),
            message: "First flush filter hasn't been cleaned in 30 days. Schedule maintenance \
                      to ensure water quality."
                .to_string(),
            severity: Severity::Warning,
            timestamp: "3 hours ago".to_string(),
            dismissed: false,
            action_required: true,
        },
        Alert {
            id: "4".to_string(),
            title: "System Check Complete".to_string(),
            message: "Monthly system check completed successfully. All components operating \
                      normally."
                .to_string(),
            severity: Severity::Success,
            timestamp: "1 day ago".to_string(),
            dismissed: false,
            action_required: false,
        },
        Alert {
            id: "5".to_string(),
            title: "Pump Malfunction".to_string(),
            message: "Distribution pump is not responding. Check electrical connections and \
                      contact maintenance if needed."
                .to_string(),
            severity: Severity::Error,
            timestamp: "2 days ago".to_string(),
            dismissed: true,
            action_required: true,
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    let rows: [(&str, &str, &str, &str, u8, bool, Option<&str>, u32); 6] = [
        (
            "water-saver",
            "Water Saver",
            "Saved 1,000L of water",
            "💧",
            100,
            true,
            Some("2024-01-15"),
            100,
        ),
        (
            "eco-champion",
            "Eco Champion",
            "30 days of consistent monitoring",
            "🌱",
            100,
            true,
            Some("2024-01-20"),
            150,
        ),
        (
            "efficiency-expert",
            "Efficiency Expert",
            "Maintained 90% system efficiency",
            "⚡",
            85,
            false,
            None,
            200,
        ),
        (
            "rain-master",
            "Rain Master",
            "Collected 5,000L from rainfall",
            "🌧️",
            75,
            false,
            None,
            250,
        ),
        (
            "conservation-king",
            "Conservation King",
            "Reduced usage by 50%",
            "👑",
            60,
            false,
            None,
            300,
        ),
        (
            "green-warrior",
            "Green Warrior",
            "Completed all learning modules",
            "🏆",
            45,
            false,
            None,
            500,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, description, icon, progress, unlocked, date, points)| Achievement {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                progress,
                unlocked,
                date: date.map(str::to_string),
                points,
            },
        )
        .collect()
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    let rows: [(u32, &str, u32, &str, &str); 5] = [
        (1, "The Johnson Family", 2450, "👑", "8,900L"),
        (2, "Green Valley School", 2280, "🥈", "7,650L"),
        (3, "Eco Warriors Club", 2150, "🥉", "6,890L"),
        (4, "You (Smith Family)", 1890, "🌟", "5,240L"),
        (5, "Community Garden", 1750, "🌱", "4,980L"),
    ];

    rows.into_iter()
        .map(|(rank, name, points, badge, water_saved)| LeaderboardEntry {
            rank,
            name: name.to_string(),
            points,
            badge: badge.to_string(),
            water_saved: water_saved.to_string(),
        })
        .collect()
}

pub fn stories() -> Vec<Story> {
    vec![
        Story {
            id: "story1".to_string(),
            title: "Rainy the Water Drop's Adventure 🌧️".to_string(),
            content: "Once upon a time, there was a little water drop named Rainy who lived in \
                      a fluffy cloud high in the sky. Rainy loved to travel and help plants \
                      grow! One day, Rainy decided to visit your house..."
                .to_string(),
            full_story: "Rainy fell from the cloud and landed on your roof. 'Wheee!' said Rainy \
                         as she slid down the gutters into a special tank. 'Now I can help \
                         water the beautiful flowers and vegetables!' Rainy was so happy to be \
                         useful and help families save water."
                .to_string(),
            lesson: "Water drops from rain can be collected and used to help plants grow!"
                .to_string(),
            emoji: "🌧️".to_string(),
            difficulty: "Easy".to_string(),
        },
        Story {
            id: "story2".to_string(),
            title: "The Water Saving Heroes 💧".to_string(),
            content: "Meet the Water Saving Heroes! Captain Conservation and his team work \
                      together to make sure no water is wasted. They collect rainwater and use \
                      it wisely..."
                .to_string(),
            full_story: "Captain Conservation teaches families how to catch rainwater in \
                         special tanks. 'Every drop counts!' he says. The heroes show children \
                         how to turn off taps, use collected rainwater for plants, and never \
                         waste this precious resource."
                .to_string(),
            lesson: "We can all be water heroes by saving and using water carefully!".to_string(),
            emoji: "🦸‍♂️".to_string(),
            difficulty: "Easy".to_string(),
        },
        Story {
            id: "experiment".to_string(),
            title: "Fun Water Experiment 🔬".to_string(),
            content: "Let's do a fun experiment! Ask a grown-up to help you put a cup outside \
                      when it rains. Watch how the water collects!"
                .to_string(),
            full_story: "Materials needed: A clear cup, paper, and crayons. Steps: 1) Put the \
                         cup outside safely during rain 2) Draw what you see 3) Measure the \
                         water after rain stops 4) Use the water for a plant!"
                .to_string(),
            lesson: "We can see how rainwater collection works with simple experiments!"
                .to_string(),
            emoji: "🔬".to_string(),
            difficulty: "Medium".to_string(),
        },
    ]
}

pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            id: "guide1".to_string(),
            title: "Getting Started with Rainwater Harvesting".to_string(),
            content: "A comprehensive guide to understanding and setting up your first \
                      rainwater collection system..."
                .to_string(),
            steps: [
                "Assess your roof area and local rainfall patterns",
                "Choose appropriate guttering and downpipe systems",
                "Select suitable storage tanks for your needs",
                "Install first-flush diverters for water quality",
                "Set up distribution systems for irrigation",
            ]
            .map(str::to_string)
            .to_vec(),
            tips: "Start small and expand your system gradually. Focus on water quality and \
                   proper maintenance."
                .to_string(),
            difficulty: "Beginner".to_string(),
        },
        Guide {
            id: "guide2".to_string(),
            title: "Maintenance Best Practices".to_string(),
            content: "Essential maintenance tasks to keep your rainwater harvesting system \
                      running efficiently..."
                .to_string(),
            steps: [
                "Clean gutters and downpipes monthly",
                "Inspect and clean first-flush diverters",
                "Check tank screens and covers for damage",
                "Test water quality periodically",
                "Maintain pumps and distribution systems",
            ]
            .map(str::to_string)
            .to_vec(),
            tips: "Regular maintenance prevents costly repairs and ensures water quality. Keep \
                   a maintenance log."
                .to_string(),
            difficulty: "Intermediate".to_string(),
        },
        Guide {
            id: "guide3".to_string(),
            title: "Water Quality and Treatment".to_string(),
            content: "Understanding water quality parameters and basic treatment methods for \
                      collected rainwater..."
                .to_string(),
            steps: [
                "Test pH levels monthly (ideal range: 6.5-7.5)",
                "Monitor turbidity and color changes",
                "Install appropriate filtration systems",
                "Consider UV sterilization for drinking water",
                "Store treated water properly to prevent contamination",
            ]
            .map(str::to_string)
            .to_vec(),
            tips: "Different uses require different quality levels. Garden irrigation has \
                   lower requirements than drinking water."
                .to_string(),
            difficulty: "Advanced".to_string(),
        },
    ]
}
