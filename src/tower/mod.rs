//! Расчётное ядро градирни: библиотека формул, развёртка для графика,
//! входная/выходная записи и оркестратор.

pub mod chart;
pub mod engine;
pub mod formulas;
pub mod input;
pub mod results;

pub use engine::{compute_results, EngineError};
pub use input::CalculationInput;
pub use results::CalculationResults;
