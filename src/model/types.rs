//! serde types for menu records and the paginated API that serves them.

use serde::{Deserialize, Serialize};

/// Menu ids are signed: child claims are untrusted and may be zero or negative.
pub type MenuId = i64;

/// A single menu entry as served by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: MenuId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<MenuId>,
    #[serde(default)]
    pub child_ids: Vec<MenuId>,
}

impl MenuNode {
    /// A node without a parent starts a tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl Pagination {
    /// Number of pages needed to cover `total` records.
    pub fn page_count(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub menus: Vec<MenuNode>,
    pub pagination: Pagination,
}
