//! # Kit Calculation Engine
//!
//! 依倉庫優先順序逐台配料的計算引擎

pub mod batch;
pub mod engine;
pub mod requirement;
pub mod requirement_set;
pub mod sink;

// Re-export 主要類型
pub use batch::{BatchReport, BatchRunner};
pub use engine::AllocationEngine;
pub use requirement::{ComponentRequirement, Draw};
pub use requirement_set::{RequirementSet, SetState};
pub use sink::{ConsoleSink, OutputSink, WriterSink, LINE_SEPARATOR};
