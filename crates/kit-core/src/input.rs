//! 輸入解析

use crate::{KitError, Result};

/// 解析要處理的單位數量
///
/// 任何 32 位元整數皆可接受，負數視為 0 個單位；非數字才是無效輸入。
pub fn parse_unit_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let count = trimmed
        .parse::<i32>()
        .map_err(|_| KitError::InvalidInput(format!("「{}」不是整數", trimmed)))?;
    Ok(u32::try_from(count).unwrap_or(0))
}
