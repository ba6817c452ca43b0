//! 單一零件需求

use kit_core::{ComponentKind, Inventory};
use std::fmt;

/// 一次非空的扣料紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// 來源倉庫
    pub store: String,
    /// 零件類型
    pub component: ComponentKind,
    /// 本次扣減數量（必大於 0）
    pub quantity: u32,
}

impl fmt::Display for Draw {
    /// 輸出格式：`<倉庫> | <零件小寫> = <數量>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} = {}",
            self.store,
            self.component.lowercase(),
            self.quantity
        )
    }
}

/// 單一零件的剩餘需求
///
/// 剩餘數量只減不增，歸零後即為已滿足。
#[derive(Debug, Clone)]
pub struct ComponentRequirement {
    component: ComponentKind,
    required_qty: u32,
    remaining_qty: u32,
    last_draw: Option<Draw>,
}

impl ComponentRequirement {
    /// 創建新的零件需求
    pub fn new(component: ComponentKind, required_qty: u32) -> Self {
        Self {
            component,
            required_qty,
            remaining_qty: required_qty,
            last_draw: None,
        }
    }

    pub fn component(&self) -> ComponentKind {
        self.component
    }

    /// 初始需求數量
    pub fn required_qty(&self) -> u32 {
        self.required_qty
    }

    pub fn remaining_qty(&self) -> u32 {
        self.remaining_qty
    }

    /// 從倉庫盡量扣料
    ///
    /// 已滿足、倉庫無此零件或數量為 0 時不做任何事，並清空上次紀錄。
    pub fn draw(&mut self, inventory: &mut Inventory) {
        self.last_draw = None;

        if self.is_fulfilled() || !inventory.has(self.component) {
            return;
        }

        let taken = inventory.take(self.component, self.remaining_qty);
        self.remaining_qty -= taken;

        tracing::debug!(
            "{} 扣料 {} x{}，剩餘 {}",
            inventory.name(),
            self.component,
            taken,
            self.remaining_qty
        );

        self.last_draw = Some(Draw {
            store: inventory.name().to_string(),
            component: self.component,
            quantity: taken,
        });
    }

    pub fn is_fulfilled(&self) -> bool {
        self.remaining_qty == 0
    }

    /// 最近一次扣料紀錄
    pub fn last_draw(&self) -> Option<&Draw> {
        self.last_draw.as_ref()
    }

    /// 最近一次扣料的文字描述；沒有扣到時為空字串
    pub fn last_draw_description(&self) -> String {
        self.last_draw
            .as_ref()
            .map(Draw::to_string)
            .unwrap_or_default()
    }
}
