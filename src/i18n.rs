use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// Пространство строковых ключей интерфейса.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ENTER_DATA: &str = "main_menu.enter_data";
    pub const MAIN_MENU_LOAD_FILE: &str = "main_menu.load_file";
    pub const MAIN_MENU_SHOW_RESULTS: &str = "main_menu.show_results";
    pub const MAIN_MENU_SAVE_RESULTS: &str = "main_menu.save_results";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FORM_HEADING: &str = "form.heading";
    pub const FORM_NOTE_DEFAULTS: &str = "form.note_defaults";
    pub const PROMPT_G1: &str = "form.g1";
    pub const PROMPT_N: &str = "form.n";
    pub const PROMPT_T1: &str = "form.t1";
    pub const PROMPT_T2: &str = "form.t2";
    pub const PROMPT_WIDTH: &str = "form.width";
    pub const PROMPT_LENGTH: &str = "form.length";
    pub const PROMPT_FAN_DIAMETER: &str = "form.fan_diameter";
    pub const PROMPT_WINDOW_HEIGHT: &str = "form.window_height";
    pub const PROMPT_HUMIDITY: &str = "form.humidity";
    pub const PROMPT_TEMPERATURE_DRY: &str = "form.temperature_dry";
    pub const PROMPT_BAROMETRIC: &str = "form.barometric_press";
    pub const PROMPT_CITY: &str = "form.city";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
    pub const ERROR_T2_NOT_BELOW_T1: &str = "error.t2_not_below_t1";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULTS_NONE_YET: &str = "results.none_yet";
    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_TABLE_HEADER: &str = "chart.table_header";

    pub const PROMPT_INPUT_FILE: &str = "files.prompt_input";
    pub const PROMPT_OUTPUT_FILE: &str = "files.prompt_output";
    pub const FILE_RESULTS_SAVED: &str = "files.results_saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ru
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

/// Предоставляет строковый пакет выбранного языка.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Создаёт переводчик по коду языка (ru/en). Неизвестные коды
    /// откатываются к ru.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Создаёт переводчик с языковым пакетом из каталога (locales/ и
    /// т.п.). Если файлов нет, используются встроенные строки.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// Возвращает перевод. Для английского при отсутствии строки
    /// откатывается к русской.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ru(key)),
            Language::Ru => ru(key),
        }
    }
}

/// Определяет язык в порядке: флаг CLI → настройки → системная локаль.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ru-ru".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ru" => Some("ru".into()),
        "ru-ru" => Some("ru-ru".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" => Some("ru".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Определяет язык по системной локали.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// Загружает TOML-пакет: плоская карта key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) полный код (например, ru-ru)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) базовый код (например, ru)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Встроенные языковые пакеты: работают и без каталога locales/.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ru-ru" | "ru" => parse_toml_to_map(include_str!("../locales/ru-ru.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn ru(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Ошибка",
        APP_EXIT => "Завершение работы.",
        MAIN_MENU_TITLE => "\n=== Теплотехнический расчёт градирни ===",
        MAIN_MENU_ENTER_DATA => "1) Ввод исходных данных и расчёт",
        MAIN_MENU_LOAD_FILE => "2) Расчёт по файлу исходных данных (TOML)",
        MAIN_MENU_SHOW_RESULTS => "3) Показать последние результаты",
        MAIN_MENU_SAVE_RESULTS => "4) Сохранить результаты в файл",
        MAIN_MENU_SETTINGS => "5) Настройки",
        MAIN_MENU_EXIT => "0) Выход",
        PROMPT_MENU_SELECT => "Выбор пункта меню: ",
        INVALID_SELECTION_RETRY => "Неверный ввод. Выберите ещё раз.",
        FORM_HEADING => "\n-- Исходные данные --",
        FORM_NOTE_DEFAULTS => "Пустой ввод оставляет значение по умолчанию (в скобках).",
        PROMPT_G1 => "Расход воды g1 [м³/ч]",
        PROMPT_N => "Количество секций n",
        PROMPT_T1 => "Температура воды на входе t1 [°C]",
        PROMPT_T2 => "Температура воды на выходе t2 [°C]",
        PROMPT_WIDTH => "Ширина градирни [м]",
        PROMPT_LENGTH => "Длина градирни [м]",
        PROMPT_FAN_DIAMETER => "Диаметр вентилятора [м]",
        PROMPT_WINDOW_HEIGHT => "Высота окон [м]",
        PROMPT_HUMIDITY => "Относительная влажность [%]",
        PROMPT_TEMPERATURE_DRY => "Температура по сухому термометру [°C]",
        PROMPT_BAROMETRIC => "Барометрическое давление [кПа]",
        PROMPT_CITY => "Город (пустой ввод — не указан): ",
        ERROR_INVALID_NUMBER => "Введите число.",
        ERROR_OUT_OF_RANGE => "Значение вне допустимого диапазона.",
        ERROR_T2_NOT_BELOW_T1 => "t₂ должна быть меньше t₁.",
        RESULTS_HEADING => "\n=== Результаты расчёта градирни ===",
        RESULTS_NONE_YET => "Результатов ещё нет: сначала выполните расчёт.",
        CHART_HEADING => "\n-- График зависимости расхода воздуха и давления --",
        CHART_TABLE_HEADER => "      t, °C      G_A, м³/ч        Pст, Па",
        PROMPT_INPUT_FILE => "Файл исходных данных (TOML): ",
        PROMPT_OUTPUT_FILE => "Файл для сохранения результатов: ",
        FILE_RESULTS_SAVED => "Результаты сохранены:",
        SETTINGS_HEADING => "\n-- Настройки --",
        SETTINGS_CURRENT_LANGUAGE => "Текущий язык:",
        SETTINGS_OPTIONS => "1) Русский  2) English",
        SETTINGS_PROMPT_CHANGE => "Номер для смены (Enter — отмена): ",
        SETTINGS_INVALID => "Неверный ввод, язык не изменён.",
        SETTINGS_SAVED => "Язык интерфейса изменён:",
        _ => "[нет перевода]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Cooling Tower Thermal Calculation ===",
        MAIN_MENU_ENTER_DATA => "1) Enter design data and calculate",
        MAIN_MENU_LOAD_FILE => "2) Calculate from a TOML input file",
        MAIN_MENU_SHOW_RESULTS => "3) Show last results",
        MAIN_MENU_SAVE_RESULTS => "4) Save results to a file",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu item: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FORM_HEADING => "\n-- Design data --",
        FORM_NOTE_DEFAULTS => "Empty input keeps the default value (in parentheses).",
        PROMPT_G1 => "Water flow g1 [m3/h]",
        PROMPT_N => "Number of sections n",
        PROMPT_T1 => "Inlet water temperature t1 [C]",
        PROMPT_T2 => "Outlet water temperature t2 [C]",
        PROMPT_WIDTH => "Tower width [m]",
        PROMPT_LENGTH => "Tower length [m]",
        PROMPT_FAN_DIAMETER => "Fan diameter [m]",
        PROMPT_WINDOW_HEIGHT => "Window height [m]",
        PROMPT_HUMIDITY => "Relative humidity [%]",
        PROMPT_TEMPERATURE_DRY => "Dry-bulb temperature [C]",
        PROMPT_BAROMETRIC => "Barometric pressure [kPa]",
        PROMPT_CITY => "City (empty = not set): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_OUT_OF_RANGE => "Value is out of the allowed range.",
        ERROR_T2_NOT_BELOW_T1 => "t2 must be below t1.",
        RESULTS_HEADING => "\n=== Cooling tower calculation results ===",
        RESULTS_NONE_YET => "No results yet: run a calculation first.",
        CHART_HEADING => "\n-- Air flow and pressure vs temperature --",
        CHART_TABLE_HEADER => "      t, C       G_A, m3/h        Pst, Pa",
        PROMPT_INPUT_FILE => "Input data file (TOML): ",
        PROMPT_OUTPUT_FILE => "File to save results to: ",
        FILE_RESULTS_SAVED => "Results saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Russian  2) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Interface language changed to:",
        _ => return None,
    })
}
