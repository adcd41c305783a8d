use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::tower::input::{
    AirParameters, CalculationInput, InitialData, TowerParameters,
};
use crate::tower::{compute_results, CalculationResults};

/// Пункты главного меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterData,
    LoadFile,
    ShowResults,
    SaveResults,
    Settings,
    Exit,
}

/// Показывает главное меню и возвращает выбор пользователя.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ENTER_DATA));
    println!("{}", tr.t(keys::MAIN_MENU_LOAD_FILE));
    println!("{}", tr.t(keys::MAIN_MENU_SHOW_RESULTS));
    println!("{}", tr.t(keys::MAIN_MENU_SAVE_RESULTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EnterData),
            "2" => return Ok(MenuChoice::LoadFile),
            "3" => return Ok(MenuChoice::ShowResults),
            "4" => return Ok(MenuChoice::SaveResults),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Интерактивный ввод исходных данных с проверкой диапазонов формы и
/// расчёт. Диапазоны те же, что в экранной форме-первоисточнике.
pub fn handle_enter_data(tr: &Translator) -> Result<Option<CalculationResults>, AppError> {
    println!("{}", tr.t(keys::FORM_HEADING));
    println!("{}", tr.t(keys::FORM_NOTE_DEFAULTS));

    let g1 = read_f64_in(tr, tr.t(keys::PROMPT_G1), 7500.0, 1000.0, f64::MAX)?;
    let n = read_u32_in(tr, tr.t(keys::PROMPT_N), 3, 1)?;
    let t1 = read_f64_in(tr, tr.t(keys::PROMPT_T1), 46.0, 0.0, 100.0)?;
    let t2 = loop {
        let t2 = read_f64_in(tr, tr.t(keys::PROMPT_T2), 35.0, 0.0, 100.0)?;
        if t2 < t1 {
            break t2;
        }
        println!("{}", tr.t(keys::ERROR_T2_NOT_BELOW_T1));
    };
    let width = read_f64_in(tr, tr.t(keys::PROMPT_WIDTH), 12.0, 1.0, 50.0)?;
    let length = read_f64_in(tr, tr.t(keys::PROMPT_LENGTH), 12.0, 1.0, 50.0)?;
    let fan_diameter = read_f64_in(tr, tr.t(keys::PROMPT_FAN_DIAMETER), 7.0, 0.5, 20.0)?;
    let window_height = read_f64_in(tr, tr.t(keys::PROMPT_WINDOW_HEIGHT), 1.9, 0.5, 10.0)?;
    let humidity = read_f64_in(tr, tr.t(keys::PROMPT_HUMIDITY), 32.0, 0.0, 100.0)?;
    let temperature_dry =
        read_f64_in(tr, tr.t(keys::PROMPT_TEMPERATURE_DRY), 32.0, -50.0, 60.0)?;
    let barometric_press = read_f64_in(tr, tr.t(keys::PROMPT_BAROMETRIC), 100.4, 90.0, 110.0)?;
    let city = read_line(tr.t(keys::PROMPT_CITY))?;
    let city = city.trim();

    let input = CalculationInput {
        initial_data: InitialData {
            g1: Some(g1),
            n: Some(n),
            t1: Some(t1),
            t2: Some(t2),
        },
        tower_parameters: TowerParameters {
            width: Some(width),
            length: Some(length),
            fan_diameter: Some(fan_diameter),
            window_height: Some(window_height),
        },
        air_parameters: AirParameters {
            humidity: Some(humidity),
            temperature_dry: Some(temperature_dry),
            barometric_press: Some(barometric_press),
        },
        city: if city.is_empty() {
            None
        } else {
            Some(city.to_string())
        },
        ..CalculationInput::default()
    };

    compute_and_report(tr, &input)
}

/// Расчёт по файлу исходных данных: путь запрашивается у пользователя.
pub fn handle_load_file(tr: &Translator) -> Result<Option<CalculationResults>, AppError> {
    let path = read_line(tr.t(keys::PROMPT_INPUT_FILE))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }
    let input = load_input_file(Path::new(path))?;
    compute_and_report(tr, &input)
}

/// Читает и разбирает TOML-файл входной записи.
pub fn load_input_file(path: &Path) -> Result<CalculationInput, AppError> {
    let content = fs::read_to_string(path)?;
    let input: CalculationInput = toml::from_str(&content)?;
    Ok(input)
}

/// Пакетный режим: расчёт по файлу и отчёт без меню.
pub fn run_batch(tr: &Translator, path: &Path) -> Result<(), AppError> {
    let input = load_input_file(path)?;
    let results = compute_results(&input)?;
    print_report(tr, &results);
    Ok(())
}

fn compute_and_report(
    tr: &Translator,
    input: &CalculationInput,
) -> Result<Option<CalculationResults>, AppError> {
    match compute_results(input) {
        Ok(results) => {
            print_report(tr, &results);
            Ok(Some(results))
        }
        Err(err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            Ok(None)
        }
    }
}

/// Печатает полный отчёт: группы параметров и таблицу графика.
pub fn print_report(tr: &Translator, results: &CalculationResults) {
    println!("{}", tr.t(keys::RESULTS_HEADING));
    for section in results.sections() {
        println!("\n[{}]", section.title);
        for entry in &section.entries {
            println!("  {:<34} {}", entry.label, entry.value);
        }
    }
    println!("{}", tr.t(keys::CHART_HEADING));
    println!("{}", tr.t(keys::CHART_TABLE_HEADER));
    for point in &results.chart {
        println!("{:>10.1} {:>15.2} {:>15.2}", point.x, point.ga, point.pst);
    }
}

/// Сохраняет последние результаты в TOML-файл.
pub fn handle_save_results(
    tr: &Translator,
    results: Option<&CalculationResults>,
) -> Result<(), AppError> {
    let Some(results) = results else {
        println!("{}", tr.t(keys::RESULTS_NONE_YET));
        return Ok(());
    };
    let path = read_line(tr.t(keys::PROMPT_OUTPUT_FILE))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }
    let content = toml::to_string_pretty(results)?;
    fs::write(path, content)?;
    println!("{} {path}", tr.t(keys::FILE_RESULTS_SAVED));
    Ok(())
}

/// Меню настроек: смена языка интерфейса (применяется при следующем
/// запуске).
pub fn handle_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        config.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => {
            config.language = "ru-ru".to_string();
            println!("{} ru-ru", tr.t(keys::SETTINGS_SAVED));
        }
        "2" => {
            config.language = "en-us".to_string();
            println!("{} en-us", tr.t(keys::SETTINGS_SAVED));
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// Число с плавающей точкой в заданном диапазоне; пустой ввод даёт
/// значение по умолчанию.
fn read_f64_in(
    tr: &Translator,
    label: &str,
    default: f64,
    min: f64,
    max: f64,
) -> Result<f64, AppError> {
    loop {
        let raw = read_line(&format!("{label} ({default}): "))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.replace(',', ".").parse::<f64>() {
            Ok(v) if v >= min && v <= max => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// Целое число не меньше `min`; пустой ввод даёт значение по умолчанию.
fn read_u32_in(tr: &Translator, label: &str, default: u32, min: u32) -> Result<u32, AppError> {
    loop {
        let raw = read_line(&format!("{label} ({default}): "))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<u32>() {
            Ok(v) if v >= min => return Ok(v),
            Ok(_) => println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
