//! Генератор данных для графика зависимости расхода воздуха и
//! статического давления от температуры воды.

use serde::{Deserialize, Serialize};

/// Шаг температурной развёртки [°C].
const TEMP_STEP: f64 = 0.2;

/// Одна точка графика.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Температура [°C]
    pub x: f64,
    /// Расход воздуха [м³/ч]
    pub ga: f64,
    /// Статическое давление [Па]
    pub pst: f64,
}

/// Расход воздуха при температуре `t`: линейный спад 5 % на весь перепад.
pub fn air_flow_at(t: f64, base_ga: f64, t1: f64, t2: f64) -> f64 {
    if t1 == t2 {
        return base_ga;
    }
    let temp_ratio = (t - t1) / (t2 - t1);
    base_ga * (1.0 - 0.05 * temp_ratio)
}

/// Статическое давление при температуре `t`: линейный спад 3 %.
pub fn static_pressure_at(t: f64, base_pst: f64, t1: f64, t2: f64) -> f64 {
    if t1 == t2 {
        return base_pst;
    }
    let temp_ratio = (t - t1) / (t2 - t1);
    base_pst * (1.0 - 0.03 * temp_ratio)
}

/// Конечная перезапускаемая развёртка от min(t1,t2) до max(t1,t2)
/// включительно с шагом 0.2 °C.
///
/// Точки считаются от индекса (start + i·шаг), а не накоплением суммы,
/// поэтому конечная температура всегда попадает в развёртку.
#[derive(Debug, Clone)]
pub struct TemperatureSweep {
    start: f64,
    count: usize,
    index: usize,
    base_ga: f64,
    base_pst: f64,
    t1: f64,
    t2: f64,
}

impl TemperatureSweep {
    pub fn new(t1: f64, t2: f64, base_ga: f64, base_pst: f64) -> Self {
        let start = t1.min(t2);
        let end = t1.max(t2);
        let count = ((end - start) / TEMP_STEP + 1e-9).floor() as usize + 1;
        Self {
            start,
            count,
            index: 0,
            base_ga,
            base_pst,
            t1,
            t2,
        }
    }

    /// Число точек развёртки.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Iterator for TemperatureSweep {
    type Item = ChartPoint;

    fn next(&mut self) -> Option<ChartPoint> {
        if self.index >= self.count {
            return None;
        }
        let t = self.start + self.index as f64 * TEMP_STEP;
        self.index += 1;
        Some(ChartPoint {
            x: round2(t),
            ga: round2(air_flow_at(t, self.base_ga, self.t1, self.t2)),
            pst: round2(static_pressure_at(t, self.base_pst, self.t1, self.t2)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for TemperatureSweep {}

/// Собирает развёртку в вектор точек.
pub fn generate_chart_data(t1: f64, t2: f64, base_ga: f64, base_pst: f64) -> Vec<ChartPoint> {
    TemperatureSweep::new(t1, t2, base_ga, base_pst).collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
