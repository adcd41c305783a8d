//! Тесты температурной развёртки для графика.

use cooling_tower_toolbox::tower::chart::generate_chart_data;
use cooling_tower_toolbox::tower::{compute_results, CalculationInput};
use cooling_tower_toolbox::tower::input::{InitialData, TowerParameters};

fn tower_input(t1: f64, t2: f64) -> CalculationInput {
    CalculationInput {
        initial_data: InitialData {
            g1: Some(7500.0),
            n: Some(3),
            t1: Some(t1),
            t2: Some(t2),
        },
        tower_parameters: TowerParameters {
            width: Some(12.0),
            length: Some(12.0),
            fan_diameter: Some(7.0),
            window_height: Some(1.9),
        },
        ..CalculationInput::default()
    }
}

#[test]
fn census_is_inclusive_of_both_endpoints() {
    // floor((46-35)/0.2) + 1 = 56 точек, несмотря на накопление
    // погрешности двоичного шага 0.2
    let points = generate_chart_data(35.0, 46.0, 1000.0, 500.0);
    assert_eq!(points.len(), 56);
    assert_eq!(points[0].x, 35.0);
    assert_eq!(points[55].x, 46.0);
}

#[test]
fn engine_chart_is_deterministic_sweep_over_the_water_range() {
    let a = compute_results(&tower_input(46.0, 35.0)).expect("расчёт");
    assert_eq!(a.chart.len(), 56);
    assert_eq!(a.chart.first().unwrap().x, 35.0);
    assert_eq!(a.chart.last().unwrap().x, 46.0);
    // База расхода — производительность вентилятора: в точке x = t1
    // спад нулевой, Gв = 2500·440
    assert!((a.chart.last().unwrap().ga - 1_100_000.0).abs() < 0.01);

    let b = compute_results(&tower_input(46.0, 35.0)).expect("расчёт");
    assert_eq!(a.chart, b.chart);
}

#[test]
fn decay_direction_follows_temperature_pair() {
    let ascending = generate_chart_data(20.0, 30.0, 1000.0, 500.0);
    for pair in ascending.windows(2) {
        assert!(pair[1].ga < pair[0].ga, "ga должен строго убывать");
        assert!(pair[1].pst < pair[0].pst, "pst должен строго убывать");
    }

    let descending = generate_chart_data(30.0, 20.0, 1000.0, 500.0);
    for pair in descending.windows(2) {
        assert!(pair[1].ga > pair[0].ga, "ga должен строго возрастать");
        assert!(pair[1].pst > pair[0].pst, "pst должен строго возрастать");
    }
}

#[test]
fn repeated_generation_is_identical() {
    let a = generate_chart_data(35.0, 46.0, 1_045_678.9, 94_173.2);
    let b = generate_chart_data(35.0, 46.0, 1_045_678.9, 94_173.2);
    assert_eq!(a, b);
}
