//! Расчётное ядро вынесено в библиотеку: CLI использует его напрямую, а
//! экспортные адаптеры (PDF/Word и т.п.) могут подключать крейт без
//! бинарника.

pub mod app;
pub mod config;
pub mod constants;
pub mod i18n;
pub mod tower;
pub mod ui_cli;
