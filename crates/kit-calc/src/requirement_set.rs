//! 單一單位的需求集合

use kit_core::{BomLine, ComponentKind, Inventory, KitError, Result};

use crate::{ComponentRequirement, Draw, LINE_SEPARATOR};

/// 需求集合狀態
///
/// 「耗盡」由引擎在走完所有倉庫後判定，集合本身只區分開放與已滿足。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    /// 尚有未滿足的需求
    Open,
    /// 所有需求皆已滿足（終態）
    Fulfilled,
}

/// 一個單位的完整 BOM 需求（保留宣告順序）
#[derive(Debug, Clone, Default)]
pub struct RequirementSet {
    requirements: Vec<ComponentRequirement>,
    last_pass_output: String,
    passes: usize,
}

impl RequirementSet {
    /// 創建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 依 BOM 建立集合
    pub fn from_bom(bom: &[BomLine]) -> Self {
        Self {
            requirements: bom
                .iter()
                .map(|line| ComponentRequirement::new(line.component, line.quantity))
                .collect(),
            ..Self::default()
        }
    }

    /// 新增需求；開始配料後不可再新增
    pub fn add_requirement(
        &mut self,
        component: ComponentKind,
        required_qty: u32,
    ) -> Result<&mut Self> {
        if self.passes > 0 {
            return Err(KitError::RequirementSetSealed);
        }
        self.requirements
            .push(ComponentRequirement::new(component, required_qty));
        Ok(self)
    }

    /// 對單一倉庫執行一輪配料，覆寫上一輪的輸出
    pub fn run_pass_against(&mut self, inventory: &mut Inventory) {
        self.passes += 1;

        let lines: Vec<String> = self
            .requirements
            .iter_mut()
            .filter_map(|requirement| {
                requirement.draw(inventory);
                requirement.last_draw().map(Draw::to_string)
            })
            .collect();

        self.last_pass_output = lines
            .iter()
            .map(|line| format!("{}{}", line, LINE_SEPARATOR))
            .collect();

        tracing::debug!(
            "倉庫 {} 配料完成：{} 筆扣料，是否全數滿足 {}",
            inventory.name(),
            lines.len(),
            self.is_fully_fulfilled()
        );
    }

    /// 所有需求是否皆已滿足
    pub fn is_fully_fulfilled(&self) -> bool {
        self.requirements.iter().all(ComponentRequirement::is_fulfilled)
    }

    /// 最近一輪的輸出（每行以行分隔符號結尾，沒有扣料時為空）
    pub fn current_output(&self) -> &str {
        &self.last_pass_output
    }

    /// 最近一輪的扣料紀錄（宣告順序）
    pub fn last_pass_draws(&self) -> Vec<&Draw> {
        self.requirements
            .iter()
            .filter_map(ComponentRequirement::last_draw)
            .collect()
    }

    pub fn requirements(&self) -> &[ComponentRequirement] {
        &self.requirements
    }

    /// 未滿足的零件與剩餘數量（宣告順序）
    pub fn shortfall(&self) -> Vec<(ComponentKind, u32)> {
        self.requirements
            .iter()
            .filter(|requirement| !requirement.is_fulfilled())
            .map(|requirement| (requirement.component(), requirement.remaining_qty()))
            .collect()
    }

    /// 已執行的配料輪數
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn state(&self) -> SetState {
        if self.is_fully_fulfilled() {
            SetState::Fulfilled
        } else {
            SetState::Open
        }
    }
}
