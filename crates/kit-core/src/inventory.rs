//! 倉庫庫存模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ComponentKind;

/// 倉庫（具名的零件庫存，整個執行期間持續扣減、不會重置）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// 倉庫名稱（在倉庫清單中唯一）
    name: String,

    /// 各零件的現有數量
    stock: BTreeMap<ComponentKind, u32>,
}

impl Inventory {
    /// 創建空倉庫
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stock: BTreeMap::new(),
        }
    }

    /// 建構器模式：設置零件庫存
    pub fn with_stock(mut self, component: ComponentKind, quantity: u32) -> Self {
        self.stock.insert(component, quantity);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 全部庫存明細
    pub fn stock(&self) -> &BTreeMap<ComponentKind, u32> {
        &self.stock
    }

    /// 查詢可用數量；未登錄的零件視同 0
    pub fn available(&self, component: ComponentKind) -> u32 {
        self.stock.get(&component).copied().unwrap_or(0)
    }

    /// 是否持有該零件（數量大於 0）
    pub fn has(&self, component: ComponentKind) -> bool {
        self.available(component) > 0
    }

    /// 扣減庫存，最多扣到 0，回傳實際扣減數量
    pub fn take(&mut self, component: ComponentKind, max: u32) -> u32 {
        match self.stock.get_mut(&component) {
            Some(on_hand) => {
                let taken = max.min(*on_hand);
                *on_hand -= taken;
                taken
            }
            None => 0,
        }
    }

    /// 所有零件的庫存總量
    pub fn total_stock(&self) -> u64 {
        self.stock.values().map(|&qty| u64::from(qty)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_inventory() {
        let inventory = Inventory::new("Store01")
            .with_stock(ComponentKind::Screw, 20)
            .with_stock(ComponentKind::Nut, 0);

        assert_eq!(inventory.name(), "Store01");
        assert_eq!(inventory.available(ComponentKind::Screw), 20);
        assert!(inventory.has(ComponentKind::Screw));
        assert!(!inventory.has(ComponentKind::Nut));
        assert_eq!(inventory.total_stock(), 20);
    }

    #[test]
    fn test_missing_component_is_zero() {
        let mut inventory = Inventory::new("Store01").with_stock(ComponentKind::Screw, 5);

        assert_eq!(inventory.available(ComponentKind::Wheel), 0);
        assert_eq!(inventory.take(ComponentKind::Wheel, 3), 0);
        // 不會因扣減而新增項目
        assert!(!inventory.stock().contains_key(&ComponentKind::Wheel));
    }

    #[test]
    fn test_take_never_goes_negative() {
        let mut inventory = Inventory::new("Store02").with_stock(ComponentKind::Wheel, 8);

        assert_eq!(inventory.take(ComponentKind::Wheel, 3), 3);
        assert_eq!(inventory.available(ComponentKind::Wheel), 5);

        // 超量扣減只扣到 0
        assert_eq!(inventory.take(ComponentKind::Wheel, 100), 5);
        assert_eq!(inventory.available(ComponentKind::Wheel), 0);
        assert_eq!(inventory.take(ComponentKind::Wheel, 1), 0);
    }
}
