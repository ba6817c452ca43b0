//! 配料引擎

use kit_core::Inventory;

use crate::{OutputSink, RequirementSet};

/// 配料引擎
///
/// 依倉庫清單順序逐一配料，不重排、不回溯；一旦全數滿足即停止，
/// 之後的倉庫不會被造訪。
pub struct AllocationEngine<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> AllocationEngine<S> {
    /// 創建新的配料引擎
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// 為一個單位配料，回傳是否全數滿足
    ///
    /// 倉庫庫存會被直接扣減，跨單位持續累積。
    pub fn allocate(&mut self, inventories: &mut [Inventory], set: &mut RequirementSet) -> bool {
        for inventory in inventories.iter_mut() {
            set.run_pass_against(inventory);

            let output = set.current_output().trim_end_matches(['\r', '\n']);
            if !output.is_empty() {
                self.sink.write_line(output);
            }

            if set.is_fully_fulfilled() {
                return true;
            }
        }

        tracing::debug!("所有倉庫皆已走訪，尚缺 {:?}", set.shortfall());
        false
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// 取回輸出端
    pub fn into_sink(self) -> S {
        self.sink
    }
}
