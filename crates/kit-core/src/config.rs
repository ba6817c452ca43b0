//! 揀料配置模型

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::{ComponentKind, Inventory, KitError, Result};

/// 預設的單位名稱前綴
pub const DEFAULT_UNIT_LABEL: &str = "BoxFern";

/// 單一零件的庫存行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub component: ComponentKind,
    pub quantity: u32,
}

/// 倉庫初始配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 倉庫名稱
    pub name: String,

    /// 初始庫存
    #[serde(default)]
    pub stock: Vec<StockLine>,
}

impl StoreConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock: Vec::new(),
        }
    }

    /// 建構器模式：新增庫存行
    pub fn with_stock(mut self, component: ComponentKind, quantity: u32) -> Self {
        self.stock.push(StockLine {
            component,
            quantity,
        });
        self
    }

    /// 轉為可扣減的倉庫
    pub fn to_inventory(&self) -> Inventory {
        self.stock
            .iter()
            .fold(Inventory::new(self.name.clone()), |inventory, line| {
                inventory.with_stock(line.component, line.quantity)
            })
    }
}

/// 每個單位的 BOM 行（順序即配料順序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub component: ComponentKind,
    pub quantity: u32,
}

impl BomLine {
    pub fn new(component: ComponentKind, quantity: u32) -> Self {
        Self {
            component,
            quantity,
        }
    }
}

/// 整批揀料的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitConfig {
    /// 單位名稱前綴（輸出為 `<前綴><序號>`）
    #[serde(default = "default_unit_label")]
    pub unit_label: String,

    /// 倉庫清單（順序即優先順序）
    pub stores: Vec<StoreConfig>,

    /// 每個單位的 BOM
    pub bom: Vec<BomLine>,
}

fn default_unit_label() -> String {
    DEFAULT_UNIT_LABEL.to_string()
}

impl KitConfig {
    /// 創建空配置
    pub fn new() -> Self {
        Self {
            unit_label: default_unit_label(),
            stores: Vec::new(),
            bom: Vec::new(),
        }
    }

    /// 建構器模式：設置單位名稱前綴
    pub fn with_unit_label(mut self, label: impl Into<String>) -> Self {
        self.unit_label = label.into();
        self
    }

    /// 建構器模式：新增倉庫（附加在清單末端，優先順序最低）
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.stores.push(store);
        self
    }

    /// 建構器模式：新增 BOM 行
    pub fn with_bom_line(mut self, component: ComponentKind, quantity: u32) -> Self {
        self.bom.push(BomLine::new(component, quantity));
        self
    }

    /// 從 JSON 字串讀取並驗證
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: KitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 JSON 檔案讀取並驗證
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 檢查配置
    pub fn validate(&self) -> Result<()> {
        if self.unit_label.trim().is_empty() {
            return Err(KitError::Config("單位名稱前綴不可為空".to_string()));
        }

        let mut seen = HashSet::new();
        for store in &self.stores {
            if store.name.trim().is_empty() {
                return Err(KitError::Config("倉庫名稱不可為空".to_string()));
            }
            if !seen.insert(store.name.as_str()) {
                return Err(KitError::DuplicateStore(store.name.clone()));
            }

            let mut components = HashSet::new();
            for line in &store.stock {
                if !components.insert(line.component) {
                    return Err(KitError::DuplicateComponent {
                        store: store.name.clone(),
                        component: line.component,
                    });
                }
            }
        }

        Ok(())
    }

    /// 建立倉庫清單（保留配置順序）
    pub fn build_inventories(&self) -> Vec<Inventory> {
        self.stores.iter().map(StoreConfig::to_inventory).collect()
    }
}

impl Default for KitConfig {
    /// 內建情境：三個倉庫、每張椅子 10 螺絲 / 4 輪子 / 2 扶手 / 30 螺帽
    fn default() -> Self {
        use ComponentKind::*;

        KitConfig::new()
            .with_store(
                StoreConfig::new("Store01")
                    .with_stock(Screw, 20)
                    .with_stock(Wheel, 8)
                    .with_stock(Armbar, 4)
                    .with_stock(Nut, 20),
            )
            .with_store(
                StoreConfig::new("Store02")
                    .with_stock(Screw, 100)
                    .with_stock(Wheel, 100)
                    .with_stock(Armbar, 100)
                    .with_stock(Nut, 20),
            )
            .with_store(
                StoreConfig::new("Store03")
                    .with_stock(Screw, 2000)
                    .with_stock(Wheel, 200)
                    .with_stock(Armbar, 100)
                    .with_stock(Nut, 1000),
            )
            .with_bom_line(Screw, 10)
            .with_bom_line(Wheel, 4)
            .with_bom_line(Armbar, 2)
            .with_bom_line(Nut, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KitConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.unit_label, "BoxFern");
        assert_eq!(config.stores.len(), 3);
        assert_eq!(config.bom.len(), 4);
        assert_eq!(config.bom[0], BomLine::new(ComponentKind::Screw, 10));
        assert_eq!(config.bom[3], BomLine::new(ComponentKind::Nut, 30));
    }

    #[test]
    fn test_build_inventories_keeps_order() {
        let inventories = KitConfig::default().build_inventories();

        let names: Vec<_> = inventories.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Store01", "Store02", "Store03"]);
        assert_eq!(inventories[0].available(ComponentKind::Nut), 20);
        assert_eq!(inventories[2].available(ComponentKind::Screw), 2000);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "stores": [
                { "name": "S1", "stock": [ { "component": "Screw", "quantity": 5 } ] },
                { "name": "S2" }
            ],
            "bom": [ { "component": "Screw", "quantity": 10 } ]
        }"#;

        let config = KitConfig::from_json_str(json).unwrap();
        assert_eq!(config.unit_label, DEFAULT_UNIT_LABEL);
        assert_eq!(config.stores[0].stock[0].quantity, 5);
        assert!(config.stores[1].stock.is_empty());
    }

    #[test]
    fn test_json_round_trip_of_default() {
        let config = KitConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(KitConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_duplicate_store_rejected() {
        let config = KitConfig::new()
            .with_store(StoreConfig::new("S1"))
            .with_store(StoreConfig::new("S1"));

        assert!(matches!(
            config.validate(),
            Err(KitError::DuplicateStore(ref name)) if name == "S1"
        ));
    }

    #[test]
    fn test_duplicate_stock_line_rejected() {
        let json = r#"{
            "stores": [
                { "name": "S1", "stock": [
                    { "component": "Screw", "quantity": 5 },
                    { "component": "Screw", "quantity": 7 }
                ] }
            ],
            "bom": []
        }"#;

        assert!(matches!(
            KitConfig::from_json_str(json),
            Err(KitError::DuplicateComponent { ref store, component: ComponentKind::Screw })
                if store == "S1"
        ));

        // 不同倉庫各自登錄同一零件不受影響
        let config = KitConfig::new()
            .with_store(StoreConfig::new("S1").with_stock(ComponentKind::Nut, 1))
            .with_store(StoreConfig::new("S2").with_stock(ComponentKind::Nut, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        let config = KitConfig::new().with_store(StoreConfig::new("  "));
        assert!(matches!(config.validate(), Err(KitError::Config(_))));

        let config = KitConfig::default().with_unit_label("");
        assert!(matches!(config.validate(), Err(KitError::Config(_))));
    }

    #[test]
    fn test_unknown_component_in_json() {
        let json = r#"{ "stores": [], "bom": [ { "component": "Bolt", "quantity": 1 } ] }"#;
        assert!(matches!(
            KitConfig::from_json_str(json),
            Err(KitError::Json(_))
        ));
    }
}
