// Dashboard figures: KPI cards, weekly chart, top services, error budgets

/// One KPI card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    /// Percent change versus the previous period
    pub change: i32,
    pub description: &'static str,
}

impl Metric {
    /// Whether the change is good news. Time-to-X metrics improve when they
    /// drop; SLA improves when it rises.
    pub fn is_improvement(&self) -> bool {
        if self.title == "SLA" {
            self.change > 0
        } else {
            self.change < 0
        }
    }

    /// Signed change label, e.g. "-15%" or "+10%"
    pub fn change_label(&self) -> String {
        format!("{:+}%", self.change)
    }
}

pub const METRICS: [Metric; 4] = [
    Metric {
        title: "MTTD",
        value: "12 phút",
        change: -15,
        description: "Thời gian phát hiện trung bình",
    },
    Metric {
        title: "MTTA",
        value: "8 phút",
        change: -20,
        description: "Thời gian xác nhận trung bình",
    },
    Metric {
        title: "MTTR",
        value: "45 phút",
        change: 10,
        description: "Thời gian khắc phục trung bình",
    },
    Metric {
        title: "SLA",
        value: "99.8%",
        change: 2,
        description: "Tỷ lệ đáp ứng SLA",
    },
];

/// Incidents opened and resolved on one weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyCount {
    pub day: &'static str,
    pub incidents: u64,
    pub resolved: u64,
}

pub const WEEKLY: [WeeklyCount; 7] = [
    WeeklyCount { day: "T2", incidents: 5, resolved: 4 },
    WeeklyCount { day: "T3", incidents: 8, resolved: 7 },
    WeeklyCount { day: "T4", incidents: 12, resolved: 10 },
    WeeklyCount { day: "T5", incidents: 6, resolved: 6 },
    WeeklyCount { day: "T6", incidents: 9, resolved: 8 },
    WeeklyCount { day: "T7", incidents: 4, resolved: 4 },
    WeeklyCount { day: "CN", incidents: 3, resolved: 3 },
];

/// Largest bar in the weekly chart
pub fn weekly_peak() -> u64 {
    WEEKLY
        .iter()
        .map(|d| d.incidents.max(d.resolved))
        .max()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceLoad {
    pub name: &'static str,
    pub incidents: u32,
    pub trend: Trend,
}

pub const TOP_SERVICES: [ServiceLoad; 3] = [
    ServiceLoad { name: "Auth Service", incidents: 12, trend: Trend::Up },
    ServiceLoad { name: "Payment Gateway", incidents: 8, trend: Trend::Down },
    ServiceLoad { name: "Database Cluster", incidents: 6, trend: Trend::Up },
];

/// (service, percent of error budget left)
pub const ERROR_BUDGETS: [(&str, u16); 2] = [("Auth Service", 15), ("Payment Gateway", 68)];

/// Budgets under this are shown as at risk
pub const BUDGET_LOW_WATERMARK: u16 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Warning,
    Trend,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: &'static str,
}

pub const INSIGHTS: [Insight; 3] = [
    Insight {
        kind: InsightKind::Warning,
        title: "Cảnh báo SLA",
        message: "Auth Service có nguy cơ vi phạm SLA trong 7 ngày tới.",
    },
    Insight {
        kind: InsightKind::Trend,
        title: "Xu hướng tăng",
        message: "MTTR tăng 20% so với tháng trước → xem lại runbook Database.",
    },
    Insight {
        kind: InsightKind::Suggestion,
        title: "Gợi ý cải thiện",
        message: "Tối ưu monitoring rules để phát hiện sự cố Database nhanh hơn 30%.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_metrics_improve_downward_sla_upward() {
        let improving: Vec<_> = METRICS
            .iter()
            .map(|m| (m.title, m.is_improvement()))
            .collect();
        assert_eq!(
            improving,
            vec![("MTTD", true), ("MTTA", true), ("MTTR", false), ("SLA", true)]
        );
    }

    #[test]
    fn change_label_is_signed() {
        assert_eq!(METRICS[0].change_label(), "-15%");
        assert_eq!(METRICS[2].change_label(), "+10%");
    }

    #[test]
    fn weekly_peak_is_wednesday() {
        assert_eq!(weekly_peak(), 12);
    }
}
