use std::path::PathBuf;

use clap::Parser;

use cooling_tower_toolbox::{app, config, i18n, ui_cli};

/// Теплотехнический расчёт вентиляторной градирни.
#[derive(Debug, Parser)]
#[command(name = "cooling_tower_toolbox", version)]
struct Cli {
    /// Язык интерфейса: auto/ru/ru-ru/en/en-us
    #[arg(long, default_value = "auto")]
    lang: String,
    /// Файл исходных данных (TOML): рассчитать, напечатать отчёт и выйти
    #[arg(long)]
    input: Option<PathBuf>,
}

/// Точка входа: настройки, язык, затем пакетный режим или меню.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Ошибка: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if let Some(path) = cli.input {
        ui_cli::run_batch(&tr, &path)?;
        return Ok(());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}
