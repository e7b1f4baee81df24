//! Sidebar navigation for the data science lab site.
//!
//! The navigation tree is a fixed table compiled into the binary: three
//! sections (`main`, `modules`, `tutorials`) of links into `/docs`. Lookups
//! are linear scans in table order; the table is small enough that nothing
//! else pays off.
//!
//! Item ids are not unique across sections (`module-03` and `module-04` are
//! listed both as overview pages and as module specs), so
//! [`find_item_by_id`] returns the first match. Item paths are unique.

use serde::Serialize;

/// Navigation link to a document route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Identifier, unique within its section.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Link target (`/docs/...`).
    pub path: &'static str,
    /// Content folder the document belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<&'static str>,
}

/// Titled group of navigation items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [NavItem],
}

const fn item(
    id: &'static str,
    title: &'static str,
    path: &'static str,
    folder: &'static str,
) -> NavItem {
    NavItem {
        id,
        title,
        path,
        folder: Some(folder),
    }
}

const LAB_FOLDER: &str = "data-science-lab";
const MODULES_FOLDER: &str = "modules";
const TUTORIAL_FOLDER: &str = "tutorial";

static SECTIONS: [NavSection; 3] = [
    NavSection {
        id: "main",
        title: "Data Science Lab",
        description: "商業數據科學實戰學習實驗室總覽",
        items: &[
            item("master-plan", "總體計劃", "/docs/00-Master-Plan", LAB_FOLDER),
            item("learning-roadmap", "學習路線圖", "/docs/01-Learning-Roadmap", LAB_FOLDER),
            item("concepts", "數據科學概念", "/docs/02-Data-Science-Concepts", LAB_FOLDER),
            item("module-03", "Module 03 概覽", "/docs/MODULE-03", LAB_FOLDER),
            item("module-04", "Module 04 概覽", "/docs/MODULE-04", LAB_FOLDER),
            item("progress", "開發進度", "/docs/PROGRESS", LAB_FOLDER),
            item("progress-tracking", "進度追蹤", "/docs/progress-tracking", LAB_FOLDER),
            item("technical-notes", "技術筆記", "/docs/technical-notes", LAB_FOLDER),
        ],
    },
    NavSection {
        id: "modules",
        title: "Modules",
        description: "詳細模組規格和實作指南",
        items: &[
            item("module-template", "模組模板", "/docs/modules/module-template", MODULES_FOLDER),
            item("module-01", "KPI 實驗室", "/docs/modules/module-01-kpi-lab", MODULES_FOLDER),
            item(
                "module-02",
                "趨勢分解器",
                "/docs/modules/module-02-trend-decomposer",
                MODULES_FOLDER,
            ),
            item(
                "module-03",
                "客戶行為分析",
                "/docs/modules/module-03-customer-behavior-lab",
                MODULES_FOLDER,
            ),
            item(
                "module-04",
                "產品分布分析",
                "/docs/modules/module-04-product-distribution-lab",
                MODULES_FOLDER,
            ),
            item(
                "module-05",
                "客戶分群實驗",
                "/docs/modules/module-05-customer-segmentation-lab",
                MODULES_FOLDER,
            ),
            item(
                "module-06",
                "市場籃分析",
                "/docs/modules/module-06-market-basket-analyzer",
                MODULES_FOLDER,
            ),
        ],
    },
    NavSection {
        id: "tutorials",
        title: "Tutorials",
        description: "深入教學材料和理論基礎",
        items: &[
            item("tutorial-readme", "教程說明", "/docs/tutorial/README", TUTORIAL_FOLDER),
            item(
                "data-fundamentals",
                "數據基礎",
                "/docs/tutorial/01-data-fundamentals",
                TUTORIAL_FOLDER,
            ),
            item(
                "time-series",
                "時間序列分析",
                "/docs/tutorial/02-time-series-analysis",
                TUTORIAL_FOLDER,
            ),
            item(
                "customer-behavior",
                "客戶行為分析",
                "/docs/tutorial/03-customer-behavior-analytics",
                TUTORIAL_FOLDER,
            ),
            item(
                "product-distribution",
                "產品分布分析",
                "/docs/tutorial/04-product-distribution-analytics",
                TUTORIAL_FOLDER,
            ),
            item(
                "customer-segmentation",
                "客戶分群分析",
                "/docs/tutorial/05-customer-segmentation-analytics",
                TUTORIAL_FOLDER,
            ),
            item(
                "market-basket",
                "市場籃分析",
                "/docs/tutorial/06-market-basket-analytics",
                TUTORIAL_FOLDER,
            ),
        ],
    },
];

/// All navigation sections in display order.
#[must_use]
pub fn navigation() -> &'static [NavSection] {
    &SECTIONS
}

/// Find the first item with the given id, searching sections in order.
#[must_use]
pub fn find_item_by_id(id: &str) -> Option<&'static NavItem> {
    all_items().find(|(_, item)| item.id == id).map(|(_, item)| item)
}

/// Find a section by id.
#[must_use]
pub fn find_section_by_id(id: &str) -> Option<&'static NavSection> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Find the item linking to exactly `path` (used to highlight the active route).
#[must_use]
pub fn find_item_by_path(path: &str) -> Option<&'static NavItem> {
    all_items()
        .find(|(_, item)| item.path == path)
        .map(|(_, item)| item)
}

/// Find the section containing the item that links to `path`.
#[must_use]
pub fn section_of_item(path: &str) -> Option<&'static NavSection> {
    all_items()
        .find(|(_, item)| item.path == path)
        .map(|(section, _)| section)
}

fn all_items() -> impl Iterator<Item = (&'static NavSection, &'static NavItem)> {
    SECTIONS
        .iter()
        .flat_map(|section| section.items.iter().map(move |item| (section, item)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_order_and_sizes() {
        let summary: Vec<(&str, usize)> = navigation()
            .iter()
            .map(|s| (s.id, s.items.len()))
            .collect();

        assert_eq!(summary, vec![("main", 8), ("modules", 7), ("tutorials", 7)]);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: Vec<&str> = all_items().map(|(_, item)| item.path).collect();
        let unique: HashSet<&str> = paths.iter().copied().collect();

        assert_eq!(paths.len(), unique.len());
    }

    #[test]
    fn test_paths_are_doc_routes() {
        assert!(all_items().all(|(_, item)| item.path.starts_with("/docs/")));
    }

    #[test]
    fn test_find_item_by_id() {
        let item = find_item_by_id("module-01").unwrap();

        assert_eq!(item.title, "KPI 實驗室");
        assert_eq!(item.path, "/docs/modules/module-01-kpi-lab");
        assert_eq!(item.folder, Some("modules"));
    }

    #[test]
    fn test_find_item_by_duplicate_id_returns_first() {
        let item = find_item_by_id("module-03").unwrap();

        assert_eq!(item.path, "/docs/MODULE-03");
        assert_eq!(item.folder, Some("data-science-lab"));
    }

    #[test]
    fn test_find_item_by_id_missing() {
        assert!(find_item_by_id("module-99").is_none());
    }

    #[test]
    fn test_find_section_by_id() {
        let section = find_section_by_id("tutorials").unwrap();

        assert_eq!(section.title, "Tutorials");
        assert_eq!(section.description, "深入教學材料和理論基礎");
        assert_eq!(section.items[0].id, "tutorial-readme");
        assert!(find_section_by_id("extras").is_none());
    }

    #[test]
    fn test_find_item_by_path() {
        let item = find_item_by_path("/docs/modules/module-03-customer-behavior-lab").unwrap();
        assert_eq!(item.id, "module-03");
        assert_eq!(item.title, "客戶行為分析");

        assert!(find_item_by_path("/docs/modules").is_none());
        assert!(find_item_by_path("/docs/PROGRESS/").is_none());
    }

    #[test]
    fn test_section_of_item() {
        assert_eq!(section_of_item("/docs/MODULE-04").unwrap().id, "main");
        assert_eq!(
            section_of_item("/docs/modules/module-04-product-distribution-lab")
                .unwrap()
                .id,
            "modules"
        );
        assert!(section_of_item("/docs/missing").is_none());
    }

    #[test]
    fn test_serialize_item() {
        let json = serde_json::to_value(find_item_by_id("progress").unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "progress",
                "title": "開發進度",
                "path": "/docs/PROGRESS",
                "folder": "data-science-lab",
            })
        );
    }

    #[test]
    fn test_serialize_item_without_folder() {
        let item = NavItem {
            id: "home",
            title: "Home",
            path: "/docs",
            folder: None,
        };

        let json = serde_json::to_value(item).unwrap();

        assert_eq!(json.get("folder"), None);
    }
}
