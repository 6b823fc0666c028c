pub mod config;
pub mod habits;
pub mod run;

use habitclock_core::HabitKind;

pub fn parse_habit(name: &str) -> Result<HabitKind, Box<dyn std::error::Error>> {
    match name {
        "sitting" => Ok(HabitKind::Sitting),
        "eating" => Ok(HabitKind::Eating),
        other => Err(format!("unknown habit: {other} (expected \"sitting\" or \"eating\")").into()),
    }
}
