//! Runbook library shown on the Solutions screen

/// Solution category tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Database,
    Network,
    Application,
    Infrastructure,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Database,
        Category::Network,
        Category::Application,
        Category::Infrastructure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Tất cả",
            Self::Database => "Database",
            Self::Network => "Network",
            Self::Application => "Application",
            Self::Infrastructure => "Infrastructure",
        }
    }

    /// Library-wide count shown on the tab
    pub fn count(&self) -> u32 {
        match self {
            Self::All => 45,
            Self::Database => 12,
            Self::Network => 8,
            Self::Application => 15,
            Self::Infrastructure => 10,
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub rating: f32,
    pub usage_count: u32,
    pub last_updated: &'static str,
    pub estimated_time: &'static str,
    pub steps: &'static [&'static str],
}

pub const SOLUTIONS: [Solution; 3] = [
    Solution {
        id: 1,
        title: "Database Connection Pool Exhaustion",
        description: "Xử lý tình trạng connection pool đầy, không thể tạo kết nối mới",
        category: Category::Database,
        tags: &["PostgreSQL", "Connection Pool", "Performance"],
        rating: 4.8,
        usage_count: 156,
        last_updated: "2024-01-10",
        estimated_time: "5-10 phút",
        steps: &[
            "Kiểm tra số lượng connection hiện tại",
            "Restart connection pool",
            "Tăng max_connections nếu cần",
            "Monitor performance sau restart",
        ],
    },
    Solution {
        id: 2,
        title: "Service Memory Leak Detection",
        description: "Phát hiện và xử lý memory leak trong các microservices",
        category: Category::Application,
        tags: &["Memory", "Java", "Monitoring"],
        rating: 4.6,
        usage_count: 89,
        last_updated: "2024-01-08",
        estimated_time: "15-20 phút",
        steps: &[
            "Sử dụng memory profiler",
            "Identify leak sources",
            "Restart affected service",
            "Deploy hotfix nếu có",
        ],
    },
    Solution {
        id: 3,
        title: "High CPU Usage Investigation",
        description: "Điều tra và khắc phục tình trạng CPU usage cao",
        category: Category::Infrastructure,
        tags: &["CPU", "Performance", "Linux"],
        rating: 4.7,
        usage_count: 203,
        last_updated: "2024-01-12",
        estimated_time: "10-15 phút",
        steps: &[
            "Kiểm tra top processes",
            "Analyze CPU utilization",
            "Kill resource-heavy processes",
            "Scale resources nếu cần",
        ],
    },
];

/// Solutions in `category` whose title or description contains `query`,
/// ignoring case. An empty query matches everything.
pub fn filter_solutions(query: &str, category: Category) -> Vec<&'static Solution> {
    let needle = query.to_lowercase();
    SOLUTIONS
        .iter()
        .filter(|s| category == Category::All || s.category == category)
        .filter(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(found: Vec<&Solution>) -> Vec<u32> {
        found.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_query_in_all_returns_everything() {
        assert_eq!(ids(filter_solutions("", Category::All)), vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        assert_eq!(ids(filter_solutions("cpu", Category::All)), vec![3]);
        // "microservices" only appears in the description
        assert_eq!(ids(filter_solutions("MICROSERVICES", Category::All)), vec![2]);
    }

    #[test]
    fn category_narrows_results() {
        assert_eq!(ids(filter_solutions("", Category::Database)), vec![1]);
        assert!(filter_solutions("", Category::Network).is_empty());
        assert!(filter_solutions("cpu", Category::Database).is_empty());
    }

    #[test]
    fn category_tabs_cycle() {
        assert_eq!(Category::All.next(), Category::Database);
        assert_eq!(Category::All.prev(), Category::Infrastructure);
        assert_eq!(Category::Infrastructure.next(), Category::All);
    }
}
