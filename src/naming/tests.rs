use super::*;

fn enterprise() -> Starship {
    Starship::new("Enterprise", Some("USS"))
}

#[test]
fn test_person_full_name_is_returned_unmodified() {
    let donna = Person::new("Donna Mayfield");
    assert_eq!(donna.full_name(), "Donna Mayfield");
    assert_eq!(donna.to_string(), "Donna Mayfield");
}

#[test]
fn test_starship_full_name_with_prefix() {
    let ship = enterprise();
    assert_eq!(ship.full_name(), "USS Enterprise");
    assert_eq!(ship.name(), "Enterprise");
    assert_eq!(ship.prefix(), Some("USS"));
}

#[test]
fn test_starship_full_name_without_prefix() {
    let ship = Starship::new("Serenity", None);
    assert_eq!(ship.full_name(), "Serenity");
    assert_eq!(ship.prefix(), None);
    assert_eq!(ship.to_string(), "Serenity");
}

#[test]
fn test_starships_with_same_computed_name_are_equal() {
    let a = enterprise();
    let b = Starship::new("USS Enterprise", None);
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[test]
fn test_starships_with_different_names_are_not_equal() {
    let serenity = Starship::new("Serenity", None);
    assert_ne!(serenity, enterprise());
}

#[test]
fn test_distinct_values_with_same_fields_are_equal() {
    assert_eq!(enterprise(), enterprise());
}

#[test]
fn test_same_full_name_across_types() {
    let person = Person::new("USS Enterprise");
    assert!(same_full_name(&person, &enterprise()));
    assert!(!same_full_name(&Person::new("Johnny Hicks"), &enterprise()));
}
