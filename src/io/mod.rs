pub mod scen;

pub use scen::{load_scen, ScenCase};
