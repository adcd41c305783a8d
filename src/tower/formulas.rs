//! Библиотека расчётных формул градирни.
//!
//! Все функции чистые и проверяют собственные предусловия. Принято два
//! режима отказа: «ещё не вычислимо» (нулевой или отсутствующий расход и
//! т.п.) даёт обычный возврат 0, а нарушение жёсткого инварианта —
//! [`FormulaError`] с описанием причины.

use crate::constants::physics;

/// Ошибка расчётной формулы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Нарушено жёсткое предусловие формулы.
    InvalidInput(&'static str),
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormulaError::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FormulaError {}

/// Производительность одной секции Gg = g1/n [м³/ч].
pub fn section_flow(g1: f64, n: u32) -> Result<f64, FormulaError> {
    if n == 0 {
        return Err(FormulaError::InvalidInput(
            "Количество секций должно быть > 0",
        ));
    }
    if g1 <= 0.0 {
        return Ok(0.0);
    }
    Ok(g1 / f64::from(n))
}

/// Плотность орошения Qж = g1/F [м³/(м²·ч)].
pub fn irrigation_density(g1: f64, area: f64) -> Result<f64, FormulaError> {
    if g1 <= 0.0 {
        return Ok(0.0);
    }
    if area <= 0.0 {
        return Err(FormulaError::InvalidInput(
            "Площадь орошения должна быть > 0",
        ));
    }
    Ok(g1 / area)
}

/// Тепловая мощность Q [МВт].
///
/// При cp в кДж/(кг·К) и плотности воды 1000 кг/м³ деление часового
/// расхода на 3600 даёт результат сразу в мегаваттах.
pub fn heat_power(g1: f64, t1: f64, t2: f64) -> f64 {
    if !t1.is_finite() || !t2.is_finite() {
        return 0.0;
    }
    if t1 <= t2 {
        return 0.0;
    }
    g1 * physics::WATER_HEAT_CAPACITY * (t1 - t2) / 3600.0
}

/// Капельный унос Gу [м³/ч].
pub fn droplet_loss(g1: f64) -> f64 {
    if g1 <= 0.0 {
        return 0.0;
    }
    g1 * physics::DROPLET_LOSS_COEFF
}

/// Потери на испарение Gи [м³/ч] для одной секции.
pub fn evaporation_loss(gg: f64, t1: f64, t2: f64) -> f64 {
    if gg <= 0.0 {
        return 0.0;
    }
    if t1 <= t2 {
        return 0.0;
    }
    gg * physics::WATER_HEAT_CAPACITY * (t1 - t2) / physics::EVAPORATION_HEAT
}

/// Потери на продувку Gп = Gи/(Kуп - 1) - Gу [м³/ч].
pub fn blowdown_loss(gi: f64, gy: f64) -> f64 {
    gi / (physics::KUP - 1.0) - gy
}

/// Общие потери воды Gд = Gи + Gу + Gп [м³/ч].
pub fn total_water_loss(gi: f64, gy: f64, gp: f64) -> f64 {
    gi + gy + gp
}

/// Соотношение воздух/вода λ для секции, ограниченное сверху.
pub fn air_water_ratio(g1: f64, n: u32) -> f64 {
    if g1 <= 0.0 || n == 0 {
        return 0.0;
    }
    let lambda = physics::AIR_FLOW_PER_SECTION / (g1 / f64::from(n));
    lambda.min(physics::MAX_AIR_WATER_RATIO)
}

/// Температура по влажному термометру [°C].
///
/// Эмпирическая корреляция Stull (2011) по сухой температуре и
/// относительной влажности в процентах. При влажности ≥ 100 % воздух
/// насыщен и возвращается сухая температура без изменений.
pub fn wet_bulb_temp(dry_temp_c: f64, humidity_pct: f64) -> f64 {
    if humidity_pct >= 100.0 {
        return dry_temp_c;
    }
    let t = dry_temp_c;
    let rh = humidity_pct;
    t * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t + rh).atan()
        - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}

/// Суммарный коэффициент сопротивления тракта.
///
/// z = zок + hор·(zор + kор·Qж) + 0.1·L + zву, где L — длина
/// воздухораспределителя.
pub fn total_resistance(
    zso: f64,
    zvu: f64,
    zok: f64,
    hor: f64,
    kor: f64,
    qx: f64,
    l_dist: f64,
) -> f64 {
    zok + hor * (zso + kor * qx) + 0.1 * l_dist + zvu
}

/// Статическое давление вентилятора Pст = w²·ρ·z/2 [Па].
pub fn static_pressure(wgr: f64, density: f64, z_total: f64) -> f64 {
    wgr.powi(2) * density * z_total / 2.0
}

/// Динамическое давление вентилятора Pдин = w²·ρ/2 [Па].
pub fn dynamic_pressure(wven: f64, density: f64) -> f64 {
    wven.powi(2) * density / 2.0
}

/// Полное давление вентилятора [Па].
pub fn total_pressure(p_static: f64, p_dynamic: f64) -> f64 {
    p_static + p_dynamic
}

/// Производительность вентилятора Gв = Gg·λ·(ρв/ρ) [м³/ч].
pub fn fan_performance(gg: f64, lambda: f64, density: f64) -> f64 {
    gg * lambda * (physics::WATER_DENSITY / density)
}

/// Потребляемая мощность N0 [кВт].
pub fn power_consumption(gv: f64, p_total: f64, density: f64, eta_k: f64, t_avg: f64) -> f64 {
    gv * p_total / (1.3e4 * density * eta_k * (t_avg + 273.0))
}

/// Минимальная мощность привода N = N0/ηп [кВт].
pub fn min_drive_power(n0: f64, eta_p: f64) -> Result<f64, FormulaError> {
    if eta_p <= 0.0 {
        return Err(FormulaError::InvalidInput("КПД передачи должен быть > 0"));
    }
    Ok(n0 / eta_p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_flow_is_soft_zero_everywhere() {
        assert_eq!(section_flow(0.0, 3).unwrap(), 0.0);
        assert_eq!(section_flow(-5.0, 3).unwrap(), 0.0);
        assert_eq!(irrigation_density(0.0, 144.0).unwrap(), 0.0);
        assert_eq!(irrigation_density(-1.0, 0.0).unwrap(), 0.0);
        assert_eq!(droplet_loss(0.0), 0.0);
        assert_eq!(evaporation_loss(0.0, 46.0, 35.0), 0.0);
        assert_eq!(air_water_ratio(0.0, 3), 0.0);
    }

    #[test]
    fn zero_sections_is_hard_error() {
        assert!(section_flow(7500.0, 0).is_err());
        assert_eq!(air_water_ratio(7500.0, 0), 0.0);
    }

    #[test]
    fn zero_area_is_hard_error() {
        assert!(irrigation_density(7500.0, 0.0).is_err());
        assert!(irrigation_density(7500.0, -1.0).is_err());
    }

    #[test]
    fn section_flow_reference() {
        assert_close(section_flow(7500.0, 3).unwrap(), 2500.0);
    }

    #[test]
    fn inverted_temperatures_give_zero_not_negative() {
        assert_eq!(heat_power(7500.0, 35.0, 46.0), 0.0);
        assert_eq!(heat_power(7500.0, 35.0, 35.0), 0.0);
        assert_eq!(heat_power(7500.0, f64::NAN, 35.0), 0.0);
        assert_eq!(evaporation_loss(2500.0, 35.0, 46.0), 0.0);
    }

    #[test]
    fn heat_power_reference_scenario() {
        // 7500 м³/ч, перепад 11 °C: 7500·4.19·11/3600 МВт
        assert_close(heat_power(7500.0, 46.0, 35.0), 96.020833333333333);
    }

    #[test]
    fn fan_performance_reference() {
        assert_close(fan_performance(500.0, 1.8, 1000.0), 900.0);
    }

    #[test]
    fn lambda_is_clamped_at_maximum() {
        // Gg = 100 м³/ч дал бы λ = 11000, но действует верхний предел
        assert_eq!(air_water_ratio(100.0, 1), physics::MAX_AIR_WATER_RATIO);
        assert_close(air_water_ratio(7500.0, 3), 440.0);
    }

    #[test]
    fn blowdown_follows_kup() {
        // Kуп = 5 даёт множитель 1/4
        assert_close(blowdown_loss(40.0, 2.0), 8.0);
        assert_close(total_water_loss(40.0, 2.0, 8.0), 50.0);
    }

    #[test]
    fn wet_bulb_saturated_air_returns_dry_temp() {
        assert_eq!(wet_bulb_temp(32.0, 100.0), 32.0);
        assert_eq!(wet_bulb_temp(32.0, 120.0), 32.0);
    }

    #[test]
    fn wet_bulb_below_dry_temp_when_unsaturated() {
        let wb = wet_bulb_temp(32.0, 32.0);
        assert!(wb < 32.0, "wb={wb}");
        // Для 20 °C / 50 % корреляция Stull даёт около 13.7 °C
        let wb = wet_bulb_temp(20.0, 50.0);
        assert!((wb - 13.7).abs() < 0.3, "wb={wb}");
    }

    #[test]
    fn pressures_compose() {
        let pst = static_pressure(2.0, 1000.0, 10.0);
        assert_close(pst, 20000.0);
        let pdyn = dynamic_pressure(4.0, 1000.0);
        assert_close(pdyn, 8000.0);
        assert_close(total_pressure(pst, pdyn), 28000.0);
    }

    #[test]
    fn drive_power_requires_positive_efficiency() {
        assert!(min_drive_power(45.0, 0.0).is_err());
        assert!(min_drive_power(45.0, -0.1).is_err());
        assert_close(min_drive_power(45.0, 0.9).unwrap(), 50.0);
    }
}
