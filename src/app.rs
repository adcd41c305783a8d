use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::tower::{CalculationResults, EngineError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Ошибки уровня приложения.
#[derive(Debug)]
pub enum AppError {
    /// Ошибка ввода-вывода
    Io(std::io::Error),
    /// Ошибка загрузки/сохранения настроек
    Config(crate::config::ConfigError),
    /// Ошибка расчётного ядра
    Engine(EngineError),
    /// Ошибка разбора файла исходных данных
    InputParse(toml::de::Error),
    /// Ошибка сериализации результатов
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "ошибка ввода-вывода: {e}"),
            AppError::Config(e) => write!(f, "ошибка настроек: {e}"),
            AppError::Engine(e) => write!(f, "{e}"),
            AppError::InputParse(e) => write!(f, "ошибка разбора исходных данных: {e}"),
            AppError::Serialize(e) => write!(f, "ошибка сериализации результатов: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        AppError::Engine(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::InputParse(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value)
    }
}

/// Главный цикл CLI-приложения. Последние результаты живут только в
/// памяти до выхода: расчётное ядро ничего не сохраняет само.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut last_results: Option<CalculationResults> = None;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::EnterData => {
                if let Some(results) = ui_cli::handle_enter_data(tr)? {
                    last_results = Some(results);
                }
            }
            MenuChoice::LoadFile => {
                if let Some(results) = ui_cli::handle_load_file(tr)? {
                    last_results = Some(results);
                }
            }
            MenuChoice::ShowResults => match last_results.as_ref() {
                Some(results) => ui_cli::print_report(tr, results),
                None => println!("{}", tr.t(i18n::keys::RESULTS_NONE_YET)),
            },
            MenuChoice::SaveResults => {
                ui_cli::handle_save_results(tr, last_results.as_ref())?;
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
