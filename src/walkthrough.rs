use crate::config::RollerConfig;
use crate::dice::{DiceRoller, RandomSource};
use crate::error::RollerError;
use crate::naming::{same_full_name, FullyNamed, Person, Starship};

/// Runs the sample sequence: named people and ships, an equality check
/// between ships, then `trials` dice rolls through `source`.
///
/// Returns the lines to show; printing them is left to the caller.
#[tracing::instrument(skip(source))]
pub fn run(settings: &RollerConfig, source: impl RandomSource) -> Result<Vec<String>, RollerError> {
    let roller = DiceRoller::new(settings.sides, source)?;
    let mut lines = Vec::new();

    let people = [Person::new("Johnny Hicks"), Person::new("Donna Mayfield")];
    for person in &people {
        lines.push(person.full_name());
    }

    let ncc1701 = Starship::new("Enterprise", Some("USS"));
    let lookalike = Starship::new("USS Enterprise", None);
    let firefly = Starship::new("Serenity", None);
    for ship in [&ncc1701, &lookalike, &firefly] {
        lines.push(ship.full_name());
    }

    for (a, b) in [(&ncc1701, &lookalike), (&ncc1701, &firefly)] {
        if same_full_name(a, b) {
            lines.push(format!("{} and {} are the same ship", a, b));
        }
    }

    for result in roller.roll_many(settings.trials) {
        lines.push(format!("Random dice roll is {}", result));
    }

    tracing::info!(trials = settings.trials, sides = settings.sides, "Walkthrough finished");
    Ok(lines)
}
