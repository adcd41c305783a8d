//! Сквозные тесты расчётного конвейера: входная запись в TOML, как её
//! подаёт внешний потребитель, и проверка подписанного результата.

use cooling_tower_toolbox::constants::physics;
use cooling_tower_toolbox::tower::formulas;
use cooling_tower_toolbox::tower::{compute_results, CalculationInput, EngineError};

const REFERENCE_INPUT: &str = r#"
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
barometric_press = 100.4
"#;

fn reference_input() -> CalculationInput {
    toml::from_str(REFERENCE_INPUT).expect("разбор эталонной записи")
}

#[test]
fn reference_record_labels_and_values() {
    let results = compute_results(&reference_input()).expect("расчёт");

    let perf = &results.performance;
    assert_eq!(perf.title, "Основные параметры");
    assert_eq!(perf.get("Производительность градирни"), Some("7500 м³/ч"));
    assert_eq!(perf.get("Производительность секции"), Some("2500.00 м³/ч"));
    assert_eq!(perf.get("Плотность орошения"), Some("52.08 м³/(м²·ч)"));
    assert_eq!(perf.get("Тепловая мощность"), Some("96.0208 МВт"));
    assert_eq!(perf.get("Соотношение воздух/вода"), Some("440.00"));

    assert_eq!(results.geometry.get("Площадь орошения"), Some("144.00 м²"));
    assert_eq!(
        results.geometry.get("Длина воздухораспределителя"),
        Some("3.00 м")
    );
    assert_eq!(results.geometry.get("Площадь окон"), Some("68.40 м²"));

    let temps = &results.temperatures;
    assert_eq!(temps.get("Температура по сухому терм."), Some("32 °C"));
    assert_eq!(temps.get("Средняя температура воды"), Some("40.5 °C"));
    assert_eq!(temps.get("Перепад температур"), Some("11.0 °C"));
    let expected_wb = formulas::wet_bulb_temp(32.0, 32.0);
    assert_eq!(
        temps.get("Температура по влажному терм."),
        Some(format!("{expected_wb:.1} °C").as_str())
    );

    let meta = &results.meta;
    assert_eq!(meta.get("Город"), Some("Самара"));
    assert_eq!(meta.get("Кол-во секций"), Some("3"));
    assert_eq!(meta.get("Атм. давление"), Some("100.4 кПа"));
    assert_eq!(meta.get("Влажность воздуха"), Some("32%"));
}

#[test]
fn fan_system_chain_is_wired_in_dependency_order() {
    let results = compute_results(&reference_input()).expect("расчёт");
    let fan = &results.fan_system;

    // Та же цепочка, собранная вручную из библиотеки формул
    let gg = formulas::section_flow(7500.0, 3).unwrap();
    let qx = formulas::irrigation_density(7500.0, 144.0).unwrap();
    let lambda = formulas::air_water_ratio(7500.0, 3);
    let z = formulas::total_resistance(10.0, 5.0, 2.0, 1.5, 0.25, qx, 3.0);
    let gv = formulas::fan_performance(gg, lambda, physics::WATER_DENSITY);
    let wgr = gv / (3600.0 * 144.0);
    let wven = gv / (std::f64::consts::PI * 3.5_f64.powi(2) * 3600.0);
    let pst = formulas::static_pressure(wgr, physics::WATER_DENSITY, z);
    let pdyn = formulas::dynamic_pressure(wven, physics::WATER_DENSITY);
    let ptot = formulas::total_pressure(pst, pdyn);
    let n0 = formulas::power_consumption(gv, ptot, physics::WATER_DENSITY, 0.75, 40.5);
    let n_min = formulas::min_drive_power(n0, 0.9).unwrap();

    assert_eq!(
        fan.get("Суммарное сопротивление"),
        Some(format!("{z:.2}").as_str())
    );
    assert_eq!(
        fan.get("Производительность вентилятора"),
        Some(format!("{gv:.2} м³/ч").as_str())
    );
    assert_eq!(
        fan.get("Скорость воздуха в градирне"),
        Some(format!("{wgr:.2} м/с").as_str())
    );
    assert_eq!(
        fan.get("Скорость в вентиляторе"),
        Some(format!("{wven:.2} м/с").as_str())
    );
    assert_eq!(
        fan.get("Статическое давление"),
        Some(format!("{pst:.2} Па").as_str())
    );
    assert_eq!(
        fan.get("Динамическое давление"),
        Some(format!("{pdyn:.2} Па").as_str())
    );
    assert_eq!(
        fan.get("Полное давление"),
        Some(format!("{ptot:.2} Па").as_str())
    );
    assert_eq!(
        fan.get("Потребляемая мощность"),
        Some(format!("{n0:.2} кВт").as_str())
    );
    assert_eq!(
        fan.get("Мощность привода"),
        Some(format!("{n_min:.2} кВт").as_str())
    );
}

#[test]
fn identical_input_gives_byte_identical_output() {
    let a = compute_results(&reference_input()).expect("расчёт");
    let b = compute_results(&reference_input()).expect("расчёт");
    let a_toml = toml::to_string(&a).expect("сериализация");
    let b_toml = toml::to_string(&b).expect("сериализация");
    assert_eq!(a_toml, b_toml);
}

#[test]
fn lambda_cap_shows_up_in_the_report() {
    let mut input = reference_input();
    input.initial_data.g1 = Some(1000.0);
    input.initial_data.n = Some(3);
    // Gg = 333.3 м³/ч дал бы λ = 3300, действует верхний предел
    let results = compute_results(&input).expect("расчёт");
    assert_eq!(
        results.performance.get("Соотношение воздух/вода"),
        Some(format!("{:.2}", physics::MAX_AIR_WATER_RATIO).as_str())
    );
}

#[test]
fn empty_record_fails_on_hard_invariants() {
    let err = compute_results(&CalculationInput::default()).unwrap_err();
    match err {
        EngineError::Failed(cause) => {
            assert!(cause.contains("Площадь орошения"), "cause={cause}")
        }
        other => panic!("ожидалась обёртка Failed, получено {other:?}"),
    }
}

#[test]
fn drive_efficiency_zero_is_wrapped_failure() {
    let mut input = reference_input();
    input.efficiency.eta_p = Some(0.0);
    let err = compute_results(&input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Не удалось выполнить расчёты"), "msg={msg}");
    assert!(msg.contains("КПД передачи"), "msg={msg}");
}
