use crate::core::service::ZooQueryService;
use crate::domain::model::Entrants;

/// 0.5 一律往上進位（-2.5 → -2）
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// 調整後的票價：`(round_half_up(price * percentage) + price * 100) / 100`。
///
/// 注意這不是 `price * (1 + percentage / 100)`：縮放項先四捨五入，
/// 再加回原價。
pub fn adjusted_price(price: f64, percentage: f64) -> f64 {
    (round_half_up(price * percentage) + price * 100.0) / 100.0
}

impl ZooQueryService {
    /// 票價 × 人數，只計算票價表與輸入都有的級距
    pub fn entry_calculator(&self, entrants: Option<&Entrants>) -> f64 {
        let Some(entrants) = entrants else {
            return 0.0;
        };
        self.store
            .prices
            .iter()
            .filter_map(|(bracket, price)| match entrants.get(bracket) {
                Some(&count) if count > 0 => Some(price * f64::from(count)),
                _ => None,
            })
            .sum()
    }

    pub fn increase_prices(&mut self, percentage: f64) {
        tracing::info!("Adjusting {} price brackets by {}", self.store.prices.len(), percentage);
        for price in self.store.prices.values_mut() {
            *price = adjusted_price(*price, percentage);
        }
    }
}
