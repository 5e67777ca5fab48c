pub mod bars;
pub mod output;
