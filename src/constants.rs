//! Физические константы и значения по умолчанию для расчёта градирни.
//! Только данные, никакой логики.

/// Физические константы воды и воздуха.
pub mod physics {
    /// Плотность воды [кг/м³]
    pub const WATER_DENSITY: f64 = 1000.0;
    /// Удельная теплоёмкость воды [кДж/(кг·К)]
    pub const WATER_HEAT_CAPACITY: f64 = 4.19;
    /// Удельная теплота испарения воды [кДж/кг]
    pub const EVAPORATION_HEAT: f64 = 2260.0;
    /// Коэффициент капельного уноса (доля от общего расхода)
    pub const DROPLET_LOSS_COEFF: f64 = 0.002;
    /// Коэффициент упаривания Kуп: продувка Gп = Gi/(Kуп - 1) - Gy
    pub const KUP: f64 = 5.0;
    /// Номинальный воздушный расход на секцию [м³/ч] для расчёта λ
    pub const AIR_FLOW_PER_SECTION: f64 = 1_100_000.0;
    /// Верхний предел соотношения воздух/вода λ
    pub const MAX_AIR_WATER_RATIO: f64 = 1000.0;
}

/// Значения по умолчанию для не заполненных полей входной записи.
pub mod defaults {
    /// Атмосферное давление [кПа]
    pub const PRESSURE: f64 = 100.4;
    /// Коэффициент оросителя a0
    pub const SPRAY_EFFICIENCY: f64 = 0.64;
    /// Показатель степени m характеристики оросителя
    pub const RESISTANCE_COEFF: f64 = 0.5;
    /// Поправочный коэффициент орошения kор
    pub const CORRECTION_FACTOR: f64 = 0.25;
    /// Высота слоя оросителя [м]
    pub const SPRAY_HEIGHT: f64 = 1.5;
    /// Коэффициент сопротивления оросителя
    pub const ZSO: f64 = 10.0;
    /// Коэффициент сопротивления водоуловителя
    pub const ZVU: f64 = 5.0;
    /// Коэффициент сопротивления окон
    pub const ZOK: f64 = 2.0;
    /// КПД рабочего колеса вентилятора
    pub const ETA_K: f64 = 0.75;
    /// КПД передачи привода
    pub const ETA_P: f64 = 0.9;
    /// Подпись города, если не указан
    pub const CITY: &str = "Не указан";
}
