mod common;

use common::{Recorder, as_listener};
use pasture_core::{
    Calf, Cattle, Decoration, Direction, ElementError, ErrorSeverity, EventSource, Field,
    FieldError, Message, Notice, PastureError, Position, PropertyKey, Status, Value,
};

fn berta_at(field: &Field, position: Position) -> Cattle {
    let cattle = field.let_cattle_graze("Berta");
    cattle.set_position(position);
    cattle
}

#[test]
fn walk_turn_walk() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::new(2, 2));
    assert_eq!(berta.direction(), Direction::East);

    berta.move_forward().unwrap();
    assert_eq!(berta.position(), Position::new(3, 2));

    berta.rotate_right();
    assert_eq!(berta.direction(), Direction::South);

    berta.move_forward().unwrap();
    assert_eq!(berta.position(), Position::new(3, 3));
}

#[test]
fn blocked_move_is_stable_across_attempts() {
    let field = Field::new(3, 3).unwrap();
    let berta = berta_at(&field, Position::new(2, 1));
    let recorder = Recorder::new();
    berta.add_listener(as_listener(&recorder));

    for _ in 0..5 {
        berta.move_forward().unwrap();
        assert_eq!(berta.position(), Position::new(2, 1));
    }

    assert!(
        recorder
            .keys()
            .iter()
            .all(|key| *key == PropertyKey::Message)
    );
    assert_eq!(berta.message(), Message::Notice(Notice::NoFieldAhead));
}

#[test]
fn eat_then_milk_round_trip() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::new(1, 1));
    field.grow_grass(Position::new(1, 1));
    let field_events = Recorder::new();
    field.add_listener(as_listener(&field_events));

    berta.eat_grass().unwrap();
    assert_eq!(berta.milk_held(), 1);
    assert!(!field.is_grass_at(Position::new(1, 1)));
    assert!(field.grass().is_empty());
    assert_eq!(field_events.keys(), vec![PropertyKey::Grass]);

    field.place_calf(Position::new(1, 1));
    assert_eq!(berta.milk().unwrap(), 1);
    assert_eq!(berta.milk_held(), 0);

    assert_eq!(berta.milk().unwrap(), 0);
    assert_eq!(berta.message(), Message::Notice(Notice::MustEatFirst));
}

#[test]
fn milk_without_calf_keeps_the_milk() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::ORIGIN);
    field.grow_grass(Position::ORIGIN);
    berta.eat_grass().unwrap();

    assert_eq!(berta.milk().unwrap(), 0);
    assert_eq!(berta.message(), Message::Notice(Notice::NoCalf));
    assert!(berta.has_milk());
}

#[test]
fn listener_sees_the_transient_eating_status() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::ORIGIN);
    field.grow_grass(Position::ORIGIN);
    let recorder = Recorder::new();
    berta.add_listener(as_listener(&recorder));

    berta.eat_grass().unwrap();

    let statuses: Vec<_> = recorder
        .events()
        .iter()
        .filter(|event| event.key == PropertyKey::Status)
        .filter_map(|event| event.new.as_ref().and_then(Value::as_cattle).map(|c| c.status))
        .collect();
    assert_eq!(statuses, vec![Status::Eating, Status::Waiting]);
    assert_eq!(berta.status(), Status::Waiting);
}

#[test]
fn grass_leaves_the_field_between_milk_and_waiting() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::new(3, 2));
    field.grow_grass(Position::new(3, 2));
    let recorder = Recorder::new();
    field.add_listener(as_listener(&recorder));
    berta.add_listener(as_listener(&recorder));

    berta.eat_grass().unwrap();

    let events = recorder.events();
    assert_eq!(
        recorder.keys(),
        vec![
            PropertyKey::Status,
            PropertyKey::Milk,
            PropertyKey::Grass,
            PropertyKey::Status,
        ]
    );
    assert_eq!(events[2].source, EventSource::Field);
    assert!(events[2].is_removal());
    let status_of = |index: usize| {
        events[index]
            .new
            .as_ref()
            .and_then(Value::as_cattle)
            .map(|cattle| cattle.status)
    };
    assert_eq!(status_of(0), Some(Status::Eating));
    assert_eq!(status_of(3), Some(Status::Waiting));
}

#[test]
fn snapshots_carry_the_whole_cattle() {
    let field = Field::new(5, 5).unwrap();
    let berta = berta_at(&field, Position::ORIGIN);
    berta.set_direction(Direction::South);
    let recorder = Recorder::new();
    berta.add_listener(as_listener(&recorder));

    berta.move_forward().unwrap();

    let event = recorder.events().remove(0);
    let before = event.old.as_ref().and_then(Value::as_cattle).unwrap();
    let after = event.new.as_ref().and_then(Value::as_cattle).unwrap();
    assert_eq!(before.element.position, Position::ORIGIN);
    assert_eq!(after.element.position, Position::new(0, 1));
    assert_eq!(after.direction, Direction::South);
    assert_eq!(after.name, "Berta");
    assert_eq!(after.status, Status::Waiting);
}

#[test]
fn dropped_field_surfaces_as_internal_error() {
    let berta = {
        let field = Field::new(3, 3).unwrap();
        field.let_cattle_graze("Berta")
    };

    let error = berta.move_forward().unwrap_err();
    assert_eq!(error, ElementError::FieldDropped { id: berta.id() });
    assert_eq!(error.severity(), ErrorSeverity::Internal);
}

#[test]
fn unplaced_cattle_is_a_validation_error() {
    let stray = Cattle::new("Stray");
    let error = stray.smoke_grass().unwrap_err();
    assert_eq!(error, ElementError::Unplaced { id: stray.id() });
    assert_eq!(error.severity(), ErrorSeverity::Validation);
    assert_eq!(error.error_code(), "ELEMENT_UNPLACED");
}

#[test]
fn empty_field_is_rejected() {
    let error = Field::new(0, 4).unwrap_err();
    assert!(matches!(error, FieldError::EmptyDimension { .. }));
    assert_eq!(error.severity(), ErrorSeverity::Validation);
}

#[test]
fn calf_show_off_only_touches_the_message() {
    let field = Field::new(3, 3).unwrap();
    let calf: Calf = field.place_calf(Position::new(1, 2));
    let recorder = Recorder::new();
    calf.add_listener(as_listener(&recorder));

    calf.show_off();

    assert_eq!(recorder.keys(), vec![PropertyKey::Message]);
    assert_eq!(calf.position(), Position::new(1, 2));
}
