//! Оркестратор расчёта: подстановка значений по умолчанию, проверка
//! инвариантов, вычисление всех производных величин в порядке
//! зависимостей и сборка подписанного результата.

use std::f64::consts::PI;

use crate::constants::physics;
use crate::tower::chart::generate_chart_data;
use crate::tower::formulas::{self, FormulaError};
use crate::tower::input::CalculationInput;
use crate::tower::results::{
    fmt1, fmt2, fmt4, fmt_plain, titles, CalculationResults, ResultSection,
};

/// Ошибка расчётного конвейера.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Нарушен инвариант входных данных.
    Validation(&'static str),
    /// Отказ расчётной формулы.
    Formula(FormulaError),
    /// Обёртка верхнего уровня: любой внутренний отказ конвейера.
    Failed(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Validation(msg) => write!(f, "{msg}"),
            EngineError::Formula(e) => write!(f, "{e}"),
            EngineError::Failed(cause) => {
                write!(f, "Не удалось выполнить расчёты: {cause}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<FormulaError> for EngineError {
    fn from(value: FormulaError) -> Self {
        EngineError::Formula(value)
    }
}

/// Выполняет полный расчёт градирни.
///
/// Любой внутренний отказ перехватывается, выводится диагностика и
/// наружу уходит единственный вид ошибки [`EngineError::Failed`], так
/// что потребителю достаточно обработать её одну. Частичных результатов
/// не бывает: вызов либо возвращает полную запись, либо ошибку.
pub fn compute_results(input: &CalculationInput) -> Result<CalculationResults, EngineError> {
    match compute_inner(input) {
        Ok(results) => Ok(results),
        Err(err) => {
            eprintln!("Расчётная ошибка: {err}");
            Err(EngineError::Failed(err.to_string()))
        }
    }
}

fn compute_inner(input: &CalculationInput) -> Result<CalculationResults, EngineError> {
    // 1. Подстановка значений по умолчанию
    let inp = input.resolve();

    // 2. Инварианты входных данных
    if inp.numeric_fields().iter().any(|v| !v.is_finite()) {
        return Err(EngineError::Validation(
            "Все числовые параметры должны быть конечными",
        ));
    }
    if inp.g1 < 0.0 || inp.width < 0.0 || inp.length < 0.0 {
        return Err(EngineError::Validation(
            "Расход воды, ширина и длина не могут быть отрицательными",
        ));
    }
    if inp.n == 0 {
        return Err(EngineError::Validation(
            "Количество секций должно быть не меньше 1",
        ));
    }
    let area = inp.width * inp.length;
    if area <= 0.0 {
        return Err(EngineError::Validation(
            "Площадь орошения должна быть > 0",
        ));
    }
    if inp.t1 <= inp.t2 {
        return Err(EngineError::Validation("t₁ должна быть больше t₂"));
    }
    if inp.eta_p <= 0.0 {
        return Err(EngineError::Validation("КПД передачи должен быть > 0"));
    }

    // 3. Геометрия
    let l_dist = inp.width / 4.0;
    let t_avg = (inp.t1 + inp.t2) / 2.0;
    let window_area = inp.length * f64::from(inp.n) * inp.window_height;

    // 4. Основные гидравлические параметры: Gg и λ нужны раньше
    //    производительности вентилятора
    let gg = formulas::section_flow(inp.g1, inp.n)?;
    let qx = formulas::irrigation_density(inp.g1, area)?;
    let lambda = formulas::air_water_ratio(inp.g1, inp.n);
    let heat_power = formulas::heat_power(inp.g1, inp.t1, inp.t2);

    // 5. Потери воды
    let evaporation_loss = formulas::evaporation_loss(gg, inp.t1, inp.t2);
    let droplet_loss = formulas::droplet_loss(inp.g1);
    let blowdown_loss = formulas::blowdown_loss(evaporation_loss, droplet_loss);
    let total_loss = formulas::total_water_loss(evaporation_loss, droplet_loss, blowdown_loss);

    // 6. Вентиляторная система, строго по цепочке зависимостей
    let z_total = formulas::total_resistance(
        inp.zso, inp.zvu, inp.zok, inp.hor, inp.kor, qx, l_dist,
    );
    let gv = formulas::fan_performance(gg, lambda, physics::WATER_DENSITY);
    let wgr = gv / (3600.0 * area);
    let wven = gv / (PI * (inp.fan_diameter / 2.0).powi(2) * 3600.0);
    let p_static = formulas::static_pressure(wgr, physics::WATER_DENSITY, z_total);
    let p_dynamic = formulas::dynamic_pressure(wven, physics::WATER_DENSITY);
    let p_total = formulas::total_pressure(p_static, p_dynamic);
    let n0 = formulas::power_consumption(gv, p_total, physics::WATER_DENSITY, inp.eta_k, t_avg);
    let n_min = formulas::min_drive_power(n0, inp.eta_p)?;

    // 7. Температурные характеристики
    let wet_bulb = formulas::wet_bulb_temp(inp.temperature_dry, inp.humidity);
    let temp_diff = inp.t1 - inp.t2;

    // 8. Сборка подписанного результата
    let mut performance = ResultSection::new(titles::PERFORMANCE);
    performance.push(
        "Производительность градирни",
        format!("{} м³/ч", fmt_plain(inp.g1)),
    );
    performance.push("Производительность секции", fmt2(gg, "м³/ч"));
    performance.push("Плотность орошения", fmt2(qx, "м³/(м²·ч)"));
    performance.push("Тепловая мощность", fmt4(heat_power, "МВт"));
    performance.push("Соотношение воздух/вода", fmt2(lambda, ""));

    let mut water_loss = ResultSection::new(titles::WATER_LOSS);
    water_loss.push("Испарение", fmt2(evaporation_loss, "м³/ч"));
    water_loss.push("Капельный унос", fmt2(droplet_loss, "м³/ч"));
    water_loss.push("Продувка", fmt2(blowdown_loss, "м³/ч"));
    water_loss.push("Общие потери", fmt2(total_loss, "м³/ч"));

    let mut geometry = ResultSection::new(titles::GEOMETRY);
    geometry.push("Площадь орошения", fmt2(area, "м²"));
    geometry.push("Длина воздухораспределителя", fmt2(l_dist, "м"));
    geometry.push("Площадь окон", fmt2(window_area, "м²"));
    geometry.push("Диаметр вентилятора", fmt2(inp.fan_diameter, "м"));

    let mut fan_system = ResultSection::new(titles::FAN_SYSTEM);
    fan_system.push("Суммарное сопротивление", fmt2(z_total, ""));
    fan_system.push("Производительность вентилятора", fmt2(gv, "м³/ч"));
    fan_system.push("Скорость воздуха в градирне", fmt2(wgr, "м/с"));
    fan_system.push("Скорость в вентиляторе", fmt2(wven, "м/с"));
    fan_system.push("Статическое давление", fmt2(p_static, "Па"));
    fan_system.push("Динамическое давление", fmt2(p_dynamic, "Па"));
    fan_system.push("Полное давление", fmt2(p_total, "Па"));
    fan_system.push("Потребляемая мощность", fmt2(n0, "кВт"));
    fan_system.push("Мощность привода", fmt2(n_min, "кВт"));

    let mut temperatures = ResultSection::new(titles::TEMPERATURES);
    temperatures.push(
        "Температура по сухому терм.",
        format!("{} °C", fmt_plain(inp.temperature_dry)),
    );
    temperatures.push("Температура по влажному терм.", fmt1(wet_bulb, "°C"));
    temperatures.push("Средняя температура воды", fmt1(t_avg, "°C"));
    temperatures.push("Перепад температур", fmt1(temp_diff, "°C"));

    let mut sprinkler = ResultSection::new(titles::SPRINKLER);
    sprinkler.push("Эффективность оросителя", fmt_plain(inp.a0));
    sprinkler.push("Коэффициент сопротивления", fmt2(inp.m, ""));
    sprinkler.push("Высота оросителя", fmt2(inp.hor, "м"));

    let mut meta = ResultSection::new(titles::META);
    meta.push("Город", inp.city.clone());
    meta.push("Кол-во секций", format!("{}", inp.n));
    meta.push("Атм. давление", format!("{} кПа", fmt_plain(inp.barometric_press)));
    meta.push("Влажность воздуха", format!("{}%", fmt_plain(inp.humidity)));

    // 9. Данные графика: база расхода — производительность вентилятора,
    //    база давления — статическое давление
    let chart = generate_chart_data(inp.t1, inp.t2, gv, p_static);

    Ok(CalculationResults {
        performance,
        water_loss,
        geometry,
        fan_system,
        temperatures,
        sprinkler,
        meta,
        chart,
    })
}
