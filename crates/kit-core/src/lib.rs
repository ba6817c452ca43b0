//! # Kit Core
//!
//! 揀料模擬的核心資料模型與類型定義

pub mod component;
pub mod config;
pub mod input;
pub mod inventory;

// Re-export 主要類型
pub use component::ComponentKind;
pub use config::{BomLine, KitConfig, StockLine, StoreConfig};
pub use input::parse_unit_count;
pub use inventory::Inventory;

/// 揀料錯誤類型
///
/// 庫存不足不屬於錯誤，由配料結果（bool / 批次報告）表達。
#[derive(Debug, thiserror::Error)]
pub enum KitError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("未知的零件類型: {0}")]
    UnknownComponent(String),

    #[error("倉庫名稱重複: {0}")]
    DuplicateStore(String),

    #[error("倉庫 {store} 重複登錄零件 {component}")]
    DuplicateComponent {
        store: String,
        component: ComponentKind,
    },

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("需求集合已開始配料，不可再新增需求")]
    RequirementSetSealed,

    #[error("讀取失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失敗: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KitError>;
