//! 整批揀料

use chrono::{DateTime, Utc};
use kit_core::{BomLine, ComponentKind, Inventory, KitConfig};
use uuid::Uuid;

use crate::{AllocationEngine, OutputSink, RequirementSet};

/// 整批揀料結果
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 本次執行ID
    pub run_id: Uuid,

    /// 開始時間
    pub started_at: DateTime<Utc>,

    /// 要求處理的單位數
    pub units_requested: u32,

    /// 完成配料的單位數
    pub units_completed: u32,

    /// 因缺料而中止的單位序號（1 起算）
    pub halted_at: Option<u32>,

    /// 中止單位的缺料明細
    pub shortfall: Vec<(ComponentKind, u32)>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl BatchReport {
    fn start(units_requested: u32) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            units_requested,
            units_completed: 0,
            halted_at: None,
            shortfall: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 是否全部完成（沒有中止）
    pub fn is_complete(&self) -> bool {
        self.halted_at.is_none()
    }
}

/// 整批揀料執行器
///
/// 逐台依同一份 BOM 配料，所有單位共用並持續扣減同一組倉庫；
/// 任何一台無法配齊即停止，後續單位不會嘗試。
pub struct BatchRunner<S: OutputSink> {
    engine: AllocationEngine<S>,
    bom: Vec<BomLine>,
    unit_label: String,
}

impl<S: OutputSink> BatchRunner<S> {
    /// 創建新的執行器
    pub fn new(
        engine: AllocationEngine<S>,
        bom: Vec<BomLine>,
        unit_label: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            bom,
            unit_label: unit_label.into(),
        }
    }

    /// 依配置創建執行器
    pub fn from_config(config: &KitConfig, sink: S) -> Self {
        Self::new(
            AllocationEngine::new(sink),
            config.bom.clone(),
            config.unit_label.clone(),
        )
    }

    /// 處理 `units` 個單位
    pub fn run(&mut self, inventories: &mut [Inventory], units: u32) -> BatchReport {
        let mut report = BatchReport::start(units);
        let start_time = std::time::Instant::now();

        tracing::info!(
            run_id = %report.run_id,
            "開始揀料：{} 個單位，倉庫 {} 個，BOM {} 行",
            units,
            inventories.len(),
            self.bom.len()
        );

        for number in 1..=units {
            self.engine
                .sink_mut()
                .write_line(&format!("{}{}", self.unit_label, number));

            let mut set = RequirementSet::from_bom(&self.bom);
            if !self.engine.allocate(inventories, &mut set) {
                report.halted_at = Some(number);
                report.shortfall = set.shortfall();
                tracing::warn!(
                    run_id = %report.run_id,
                    "第 {} 個單位缺料，停止揀料：{:?}",
                    number,
                    report.shortfall
                );
                break;
            }

            report.units_completed += 1;
            self.engine.sink_mut().end_unit();
        }

        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            run_id = %report.run_id,
            "揀料結束：完成 {}/{}，耗時 {:?}",
            report.units_completed,
            units,
            start_time.elapsed()
        );

        report
    }

    pub fn engine(&self) -> &AllocationEngine<S> {
        &self.engine
    }

    /// 取回輸出端
    pub fn into_sink(self) -> S {
        self.engine.into_sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(bom: Vec<BomLine>) -> BatchRunner<Vec<String>> {
        BatchRunner::new(AllocationEngine::new(Vec::new()), bom, "Unit")
    }

    #[test]
    fn test_zero_units_touches_nothing() {
        let mut stores = KitConfig::default().build_inventories();
        let before = stores.clone();
        let mut runner = runner(KitConfig::default().bom);

        let report = runner.run(&mut stores, 0);

        assert!(report.is_complete());
        assert_eq!(report.units_completed, 0);
        assert_eq!(stores, before);
        assert!(runner.into_sink().is_empty());
    }

    #[test]
    fn test_halts_on_first_shortfall() {
        let mut stores = vec![Inventory::new("S1").with_stock(ComponentKind::Armbar, 5)];
        let mut runner = runner(vec![BomLine::new(ComponentKind::Armbar, 2)]);

        let report = runner.run(&mut stores, 5);

        assert!(!report.is_complete());
        assert_eq!(report.units_requested, 5);
        assert_eq!(report.units_completed, 2);
        assert_eq!(report.halted_at, Some(3));
        assert_eq!(report.shortfall, vec![(ComponentKind::Armbar, 1)]);
        assert!(report.calculation_time_ms.is_some());
        assert_eq!(stores[0].available(ComponentKind::Armbar), 0);

        // 第 4、5 個單位不會出現
        assert_eq!(
            runner.into_sink(),
            vec![
                "Unit1",
                "S1 | armbar = 2",
                "Unit2",
                "S1 | armbar = 2",
                "Unit3",
                "S1 | armbar = 1",
            ]
        );
    }
}
