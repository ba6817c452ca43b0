//! 零件類型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::KitError;

/// 零件類型（封閉列舉，新增類型時由編譯器檢查所有分支）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// 螺絲
    Screw,
    /// 輪子
    Wheel,
    /// 扶手
    Armbar,
    /// 螺帽
    Nut,
}

impl ComponentKind {
    /// 所有零件類型（宣告順序）
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Screw,
        ComponentKind::Wheel,
        ComponentKind::Armbar,
        ComponentKind::Nut,
    ];

    /// 宣告名稱，例如 `Screw`
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Screw => "Screw",
            ComponentKind::Wheel => "Wheel",
            ComponentKind::Armbar => "Armbar",
            ComponentKind::Nut => "Nut",
        }
    }

    /// 輸出格式使用的小寫名稱，例如 `screw`
    pub fn lowercase(&self) -> &'static str {
        match self {
            ComponentKind::Screw => "screw",
            ComponentKind::Wheel => "wheel",
            ComponentKind::Armbar => "armbar",
            ComponentKind::Nut => "nut",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KitError::UnknownComponent(trimmed.to_string()))
    }
}
