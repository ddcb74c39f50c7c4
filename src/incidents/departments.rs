//! Department catalog
//!
//! Known client-side; never fetched. Used by the create form's selector and
//! to resolve the backend's free-text department suggestion.

/// An owning department an incident can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub id: u32,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const DEPARTMENTS: [Department; 4] = [
    Department {
        id: 1,
        code: "CORE",
        name: "Phòng Ngân hàng lõi",
        description: "Quản lý hệ thống core banking, xử lý giao dịch lõi",
    },
    Department {
        id: 2,
        code: "INTG",
        name: "Phòng Tích hợp",
        description: "Quản lý tích hợp hệ thống, ESB, API gateway",
    },
    Department {
        id: 3,
        code: "APP",
        name: "Phòng Ứng dụng nội bộ",
        description: "Phát triển và vận hành ứng dụng nội bộ cho nhân viên",
    },
    Department {
        id: 4,
        code: "RETAIL",
        name: "Phòng Khách hàng cá nhân",
        description: "Chăm sóc và quản lý dịch vụ khách hàng cá nhân",
    },
];

/// Exact-name lookup (no trimming, no case folding)
pub fn by_name(name: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.name == name)
}

pub fn by_id(id: u32) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.id == id)
}

/// Next department id in selector order; `None` wraps to the first entry
pub fn next_id(current: Option<u32>) -> Option<u32> {
    let pos = current.and_then(|id| DEPARTMENTS.iter().position(|d| d.id == id));
    match pos {
        Some(i) if i + 1 < DEPARTMENTS.len() => Some(DEPARTMENTS[i + 1].id),
        Some(_) => None,
        None => Some(DEPARTMENTS[0].id),
    }
}

/// Previous department id in selector order; the unset slot sits before the first entry
pub fn prev_id(current: Option<u32>) -> Option<u32> {
    let pos = current.and_then(|id| DEPARTMENTS.iter().position(|d| d.id == id));
    match pos {
        Some(0) => None,
        Some(i) => Some(DEPARTMENTS[i - 1].id),
        None => Some(DEPARTMENTS[DEPARTMENTS.len() - 1].id),
    }
}
