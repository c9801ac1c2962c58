// dlrenamer state managers
// Managers handle stateful operations: the pattern builder's ordered token list.

pub mod pattern_builder;
