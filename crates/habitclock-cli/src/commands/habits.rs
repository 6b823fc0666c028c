use habitclock_core::{Config, HabitKind, Session};

/// Print every habit's configured profile as pretty JSON.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profiles: Vec<_> = HabitKind::all()
        .into_iter()
        .map(|kind| config.profile(kind))
        .collect();
    println!("{}", serde_json::to_string_pretty(&profiles)?);
    Ok(())
}

/// Print one habit's profile plus a fresh (idle) snapshot.
pub fn status(habit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let kind = super::parse_habit(habit)?;
    let session = Session::new(config.profile(kind))?;
    println!("{}", serde_json::to_string_pretty(session.profile())?);
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
