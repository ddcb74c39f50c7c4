// Settings screen tables: team, notification rules, integrations

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Users,
    Notifications,
    Integrations,
    System,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Users,
        SettingsTab::Notifications,
        SettingsTab::Integrations,
        SettingsTab::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "Người dùng",
            Self::Notifications => "Thông báo",
            Self::Integrations => "Tích hợp",
            Self::System => "Hệ thống",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub team: &'static str,
    pub active: bool,
    pub last_login: &'static str,
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Nguyễn Văn A",
        email: "a.nguyen@company.com",
        role: "Senior DevOps",
        team: "Infrastructure",
        active: true,
        last_login: "2024-01-15 16:30",
    },
    TeamMember {
        name: "Trần Thị B",
        email: "b.tran@company.com",
        role: "Database Admin",
        team: "DB Ops",
        active: true,
        last_login: "2024-01-15 14:20",
    },
    TeamMember {
        name: "Lê Văn C",
        email: "c.le@company.com",
        role: "Software Engineer",
        team: "Backend",
        active: false,
        last_login: "2024-01-14 11:45",
    },
];

/// Notification toggle with its initial state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationRule {
    pub label: &'static str,
    pub enabled: bool,
}

pub const NOTIFICATION_RULES: [NotificationRule; 4] = [
    NotificationRule { label: "Sự cố mới được tạo", enabled: true },
    NotificationRule { label: "Thay đổi severity", enabled: true },
    NotificationRule { label: "Sự cố được giải quyết", enabled: false },
    NotificationRule { label: "Báo cáo hàng tuần", enabled: true },
];

/// Default Slack channel for notifications
pub const SLACK_CHANNEL: &str = "#incidents";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub connected: bool,
    pub last_sync: &'static str,
}

impl Integration {
    pub fn status_label(&self) -> &'static str {
        if self.connected {
            "Đã kết nối"
        } else {
            "Chưa kết nối"
        }
    }
}

pub const INTEGRATIONS: [Integration; 3] = [
    Integration {
        name: "Slack",
        description: "Gửi thông báo sự cố và cập nhật",
        connected: true,
        last_sync: "2024-01-15 16:45",
    },
    Integration {
        name: "Jira",
        description: "Tạo ticket tự động cho sự cố",
        connected: true,
        last_sync: "2024-01-15 15:30",
    },
    Integration {
        name: "ServiceNow",
        description: "Đồng bộ với ITSM workflow",
        connected: false,
        last_sync: "Chưa kết nối",
    },
];

/// Default SLA response targets in minutes, per severity
pub const SLA_TARGETS: [(&str, u32); 2] = [("S1 Critical", 15), ("S2 High", 60)];
