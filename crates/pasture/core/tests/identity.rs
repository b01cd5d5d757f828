use std::sync::Arc;

use pasture_core::{ElementId, Field, IdGenerator, Position};

#[test]
fn ids_increase_strictly_below_the_ceiling() {
    let ids = IdGenerator::new();
    let minted: Vec<ElementId> = (0..10_000).map(|_| ids.next_id()).collect();
    assert!(minted.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(minted[0], ElementId(1));
}

#[test]
fn wrap_goes_to_one() {
    let ids = IdGenerator::with_ceiling(2);
    assert_eq!(ids.next_id(), ElementId(1));
    assert_eq!(ids.next_id(), ElementId(2));
    assert_eq!(ids.next_id(), ElementId(1));
}

#[test]
fn fields_sharing_a_generator_never_reuse_ids() {
    let ids = Arc::new(IdGenerator::new());
    let north = Field::with_generator(3, 3, Arc::clone(&ids)).unwrap();
    let south = Field::with_generator(3, 3, Arc::clone(&ids)).unwrap();

    let a = north.grow_grass(Position::ORIGIN);
    let b = south.grow_grass(Position::ORIGIN);
    let c = north.let_cattle_graze("Vera");

    assert_eq!([a.id(), b.id(), c.id()], [ElementId(1), ElementId(2), ElementId(3)]);
    assert_eq!(ids.peek(), ElementId(4));
}
