//! Входная запись расчёта: вложенные группы с необязательными полями и
//! явный шаг подстановки значений по умолчанию.

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Исходные данные по воде.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialData {
    /// Общий расход воды [м³/ч]
    pub g1: Option<f64>,
    /// Количество секций
    pub n: Option<u32>,
    /// Температура воды на входе [°C]
    pub t1: Option<f64>,
    /// Температура воды на выходе [°C]
    pub t2: Option<f64>,
}

/// Геометрия градирни.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerParameters {
    /// Ширина в плане [м]
    pub width: Option<f64>,
    /// Длина в плане [м]
    pub length: Option<f64>,
    /// Диаметр вентилятора [м]
    pub fan_diameter: Option<f64>,
    /// Высота окон [м]
    pub window_height: Option<f64>,
}

/// Параметры наружного воздуха.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirParameters {
    /// Относительная влажность [%]
    pub humidity: Option<f64>,
    /// Температура по сухому термометру [°C]
    pub temperature_dry: Option<f64>,
    /// Барометрическое давление [кПа]
    pub barometric_press: Option<f64>,
}

/// Характеристики оросителя.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprinklerCharacteristics {
    /// Коэффициент оросителя a0
    pub a0: Option<f64>,
    /// Показатель степени m
    pub m: Option<f64>,
    /// Поправочный коэффициент орошения
    pub kor: Option<f64>,
    /// Высота слоя оросителя [м]
    pub hor: Option<f64>,
}

/// Коэффициенты аэродинамического сопротивления.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistanceCoefficients {
    /// Ороситель
    pub zso: Option<f64>,
    /// Водоуловитель
    pub zvu: Option<f64>,
    /// Окна
    pub zok: Option<f64>,
}

/// КПД вентиляторной установки.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Efficiency {
    /// КПД рабочего колеса
    pub eta_k: Option<f64>,
    /// КПД передачи
    pub eta_p: Option<f64>,
}

/// Полная входная запись. Отсутствующие группы считаются пустыми,
/// отсутствующие поля получают значения по умолчанию при разрешении.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    pub initial_data: InitialData,
    pub tower_parameters: TowerParameters,
    pub air_parameters: AirParameters,
    pub sprinkler_characteristics: SprinklerCharacteristics,
    pub resistance_coefficients: ResistanceCoefficients,
    pub efficiency: Efficiency,
    /// Город размещения, свободный текст
    pub city: Option<String>,
}

/// Входные данные после подстановки всех значений по умолчанию.
/// Здесь каждое поле уже заполнено и дальше никакой подстановки нет.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub g1: f64,
    pub n: u32,
    pub t1: f64,
    pub t2: f64,
    pub width: f64,
    pub length: f64,
    pub fan_diameter: f64,
    pub window_height: f64,
    pub humidity: f64,
    pub temperature_dry: f64,
    pub barometric_press: f64,
    pub a0: f64,
    pub m: f64,
    pub kor: f64,
    pub hor: f64,
    pub zso: f64,
    pub zvu: f64,
    pub zok: f64,
    pub eta_k: f64,
    pub eta_p: f64,
    pub city: String,
}

impl CalculationInput {
    /// Разрешает запись в полностью заполненный набор входных данных.
    pub fn resolve(&self) -> ResolvedInput {
        ResolvedInput {
            g1: self.initial_data.g1.unwrap_or(0.0),
            n: self.initial_data.n.unwrap_or(1),
            t1: self.initial_data.t1.unwrap_or(0.0),
            t2: self.initial_data.t2.unwrap_or(0.0),
            width: self.tower_parameters.width.unwrap_or(0.0),
            length: self.tower_parameters.length.unwrap_or(0.0),
            fan_diameter: self.tower_parameters.fan_diameter.unwrap_or(0.0),
            window_height: self.tower_parameters.window_height.unwrap_or(0.0),
            humidity: self.air_parameters.humidity.unwrap_or(0.0),
            temperature_dry: self.air_parameters.temperature_dry.unwrap_or(0.0),
            barometric_press: self
                .air_parameters
                .barometric_press
                .unwrap_or(defaults::PRESSURE),
            a0: self
                .sprinkler_characteristics
                .a0
                .unwrap_or(defaults::SPRAY_EFFICIENCY),
            m: self
                .sprinkler_characteristics
                .m
                .unwrap_or(defaults::RESISTANCE_COEFF),
            kor: self
                .sprinkler_characteristics
                .kor
                .unwrap_or(defaults::CORRECTION_FACTOR),
            hor: self
                .sprinkler_characteristics
                .hor
                .unwrap_or(defaults::SPRAY_HEIGHT),
            zso: self.resistance_coefficients.zso.unwrap_or(defaults::ZSO),
            zvu: self.resistance_coefficients.zvu.unwrap_or(defaults::ZVU),
            zok: self.resistance_coefficients.zok.unwrap_or(defaults::ZOK),
            eta_k: self.efficiency.eta_k.unwrap_or(defaults::ETA_K),
            eta_p: self.efficiency.eta_p.unwrap_or(defaults::ETA_P),
            city: self
                .city
                .clone()
                .unwrap_or_else(|| defaults::CITY.to_string()),
        }
    }
}

impl ResolvedInput {
    /// Все вещественные поля записи, для проверки конечности.
    pub(crate) fn numeric_fields(&self) -> [f64; 19] {
        [
            self.g1,
            self.t1,
            self.t2,
            self.width,
            self.length,
            self.fan_diameter,
            self.window_height,
            self.humidity,
            self.temperature_dry,
            self.barometric_press,
            self.a0,
            self.m,
            self.kor,
            self.hor,
            self.zso,
            self.zvu,
            self.zok,
            self.eta_k,
            self.eta_p,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_resolves_to_documented_defaults() {
        let resolved = CalculationInput::default().resolve();
        assert_eq!(resolved.g1, 0.0);
        assert_eq!(resolved.n, 1);
        assert_eq!(resolved.barometric_press, defaults::PRESSURE);
        assert_eq!(resolved.hor, defaults::SPRAY_HEIGHT);
        assert_eq!(resolved.zso, defaults::ZSO);
        assert_eq!(resolved.eta_p, defaults::ETA_P);
        assert_eq!(resolved.city, defaults::CITY);
    }

    #[test]
    fn toml_round_trip_preserves_record() {
        let src = r#"
            city = "Самара"

            [initial_data]
            g1 = 7500.0
            n = 3
            t1 = 46.0
            t2 = 35.0

            [tower_parameters]
            width = 12.0
            length = 12.0
            fan_diameter = 7.0
            window_height = 1.9

            [air_parameters]
            humidity = 32.0
            temperature_dry = 32.0
        "#;
        let input: CalculationInput = toml::from_str(src).expect("parse input");
        assert_eq!(input.initial_data.g1, Some(7500.0));
        assert_eq!(input.initial_data.n, Some(3));
        assert_eq!(input.air_parameters.barometric_press, None);

        let serialized = toml::to_string(&input).expect("serialize input");
        let reparsed: CalculationInput = toml::from_str(&serialized).expect("reparse input");
        assert_eq!(input, reparsed);
    }

    #[test]
    fn missing_groups_default_to_empty() {
        let input: CalculationInput = toml::from_str("").expect("empty record");
        assert_eq!(input, CalculationInput::default());
    }
}
