//! Итоговая запись расчёта: сгруппированные подписанные значения плюс
//! данные для графика.
//!
//! Строки подписей — контракт с потребителями (экран, PDF, Word):
//! значения ищутся по буквальной русской подписи, поэтому менять их
//! нельзя.

use serde::{Deserialize, Serialize};

use crate::tower::chart::ChartPoint;

/// Одна строка отчёта: подпись и отформатированное значение с единицей.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub label: String,
    pub value: String,
}

/// Группа строк отчёта с заголовком.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSection {
    pub title: String,
    pub entries: Vec<ResultEntry>,
}

impl ResultSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, label: &str, value: String) {
        self.entries.push(ResultEntry {
            label: label.to_string(),
            value,
        });
    }

    /// Возвращает значение по буквальной подписи.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}

/// Полный результат одного вызова расчёта. Создаётся один раз и дальше
/// не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    pub performance: ResultSection,
    pub water_loss: ResultSection,
    pub geometry: ResultSection,
    pub fan_system: ResultSection,
    pub temperatures: ResultSection,
    pub sprinkler: ResultSection,
    pub meta: ResultSection,
    /// Точки графика зависимости расхода воздуха и давления от температуры
    pub chart: Vec<ChartPoint>,
}

impl CalculationResults {
    /// Все группы в порядке отображения.
    pub fn sections(&self) -> [&ResultSection; 7] {
        [
            &self.performance,
            &self.water_loss,
            &self.geometry,
            &self.fan_system,
            &self.temperatures,
            &self.sprinkler,
            &self.meta,
        ]
    }
}

/// Заголовки групп, как их печатают экспортные адаптеры.
pub mod titles {
    pub const PERFORMANCE: &str = "Основные параметры";
    pub const WATER_LOSS: &str = "Потери воды";
    pub const GEOMETRY: &str = "Геометрические параметры";
    pub const FAN_SYSTEM: &str = "Вентиляторная система";
    pub const TEMPERATURES: &str = "Температурные параметры";
    pub const SPRINKLER: &str = "Характеристики оросителя";
    pub const META: &str = "Дополнительная информация";
}

/// Число с двумя знаками после запятой и единицей измерения.
pub fn fmt2(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {unit}")
    }
}

/// Тепловая мощность печатается с четырьмя знаками.
pub fn fmt4(value: f64, unit: &str) -> String {
    format!("{value:.4} {unit}")
}

/// Температуры печатаются с одним знаком.
pub fn fmt1(value: f64, unit: &str) -> String {
    format!("{value:.1} {unit}")
}

/// Сквозные входные значения печатаются как есть: целые без дробной
/// части, остальные в кратчайшей форме.
pub fn fmt_plain(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_literal_label() {
        let mut section = ResultSection::new(titles::PERFORMANCE);
        section.push("Плотность орошения", fmt2(52.0833, "м³/(м²·ч)"));
        assert_eq!(
            section.get("Плотность орошения"),
            Some("52.08 м³/(м²·ч)")
        );
        assert_eq!(section.get("нет такой подписи"), None);
    }

    #[test]
    fn formatting_matches_display_contract() {
        assert_eq!(fmt2(2500.0, "м³/ч"), "2500.00 м³/ч");
        assert_eq!(fmt2(440.0, ""), "440.00");
        assert_eq!(fmt4(96.020833333, "МВт"), "96.0208 МВт");
        assert_eq!(fmt1(40.5, "°C"), "40.5 °C");
        assert_eq!(fmt_plain(7500.0), "7500");
        assert_eq!(fmt_plain(100.4), "100.4");
        assert_eq!(fmt_plain(0.64), "0.64");
    }
}
