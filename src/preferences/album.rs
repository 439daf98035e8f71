use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// Older builds stored the display labels themselves, hence the aliases.

#[derive(
    Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    #[serde(alias = "升序")]
    Asc,
    #[serde(alias = "降序")]
    Desc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "升序",
            SortOrder::Desc => "降序",
        }
    }
}

#[derive(
    Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumViewMode {
    #[serde(alias = "封面")]
    Cover,
    #[serde(alias = "列表")]
    List,
}

impl AlbumViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            AlbumViewMode::Cover => "封面",
            AlbumViewMode::List => "列表",
        }
    }
}

#[derive(
    Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumFilter {
    #[serde(alias = "所有")]
    All,
    #[serde(alias = "本人")]
    Owned,
    #[serde(alias = "共享")]
    Shared,
}

impl AlbumFilter {
    pub fn label(&self) -> &'static str {
        match self {
            AlbumFilter::All => "所有",
            AlbumFilter::Owned => "本人",
            AlbumFilter::Shared => "共享",
        }
    }
}

#[derive(
    Debug,
    Serialize,
    Deserialize,
    PartialEq,
    Clone,
    Copy,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumGroupBy {
    #[serde(alias = "不分类")]
    None,
    #[serde(alias = "按年分类")]
    Year,
    #[serde(alias = "按拥有者分类")]
    Owner,
}

impl AlbumGroupBy {
    pub fn label(&self) -> &'static str {
        match self {
            AlbumGroupBy::None => "不分类",
            AlbumGroupBy::Year => "按年分类",
            AlbumGroupBy::Owner => "按拥有者分类",
        }
    }
}

#[derive(
    Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumSortBy {
    #[serde(alias = "标题")]
    Title,
    #[serde(alias = "项目数量")]
    ItemCount,
    #[serde(alias = "修改日期")]
    DateModified,
    #[serde(alias = "创建日期")]
    DateCreated,
    #[serde(alias = "最新的照片")]
    MostRecentPhoto,
    #[serde(alias = "最老的照片")]
    OldestPhoto,
}

impl AlbumSortBy {
    pub fn label(&self) -> &'static str {
        match self {
            AlbumSortBy::Title => "标题",
            AlbumSortBy::ItemCount => "项目数量",
            AlbumSortBy::DateModified => "修改日期",
            AlbumSortBy::DateCreated => "创建日期",
            AlbumSortBy::MostRecentPhoto => "最新的照片",
            AlbumSortBy::OldestPhoto => "最老的照片",
        }
    }
}

/// Persisted under the `album-view-settings` key.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumViewSettings {
    pub view: AlbumViewMode,
    pub filter: AlbumFilter,
    pub group_by: AlbumGroupBy,
    pub group_order: SortOrder,
    pub sort_by: AlbumSortBy,
    pub sort_order: SortOrder,
    /// Grouping option => collapsed group ids, in collapse order
    pub collapsed_groups: BTreeMap<AlbumGroupBy, Vec<String>>,
}

impl Default for AlbumViewSettings {
    fn default() -> Self {
        Self {
            view: AlbumViewMode::Cover,
            filter: AlbumFilter::All,
            group_by: AlbumGroupBy::Year,
            group_order: SortOrder::Desc,
            sort_by: AlbumSortBy::MostRecentPhoto,
            sort_order: SortOrder::Desc,
            collapsed_groups: BTreeMap::new(),
        }
    }
}

impl AlbumViewSettings {
    pub fn is_group_collapsed(&self, group_by: AlbumGroupBy, group_id: &str) -> bool {
        self.collapsed_groups
            .get(&group_by)
            .is_some_and(|ids| ids.iter().any(|id| id == group_id))
    }

    /// Collapses the group if it is expanded, expands it otherwise.
    /// Returns whether the group is now collapsed.
    pub fn toggle_group_collapsed(&mut self, group_by: AlbumGroupBy, group_id: &str) -> bool {
        let ids = self.collapsed_groups.entry(group_by).or_default();
        if let Some(position) = ids.iter().position(|id| id == group_id) {
            ids.remove(position);
            if ids.is_empty() {
                self.collapsed_groups.remove(&group_by);
            }
            false
        } else {
            ids.push(group_id.to_string());
            true
        }
    }
}
