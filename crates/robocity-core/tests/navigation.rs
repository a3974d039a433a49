use std::cell::RefCell;
use std::rc::Rc;

use robocity_core::testing::{NavigationEvent, RecordingNavigationObserver};
use robocity_core::{
    City, Direction, ExecutionError, Item, NavigationModule, Place, PlaceId, Rotation, Street,
};

/// `west` <-EAST- `hub` -NORTH-> `north`, the northern street closed with code "k1".
fn crossroads() -> (City, PlaceId, PlaceId, PlaceId) {
    let mut city = City::new();
    let hub = city.add_place(Place::new("Hub", false, "crossing"));
    let north = city.add_place(Place::new("North", false, "up there"));
    let west = city.add_place(Place::new("West", false, "over there"));
    city.add_street(Street::with_code(hub, Direction::North, north, false, "k1"));
    city.add_street(Street::new(west, Direction::East, hub));
    (city, hub, north, west)
}

fn observed(nav: &mut NavigationModule) -> Rc<RefCell<RecordingNavigationObserver>> {
    let recorder = Rc::new(RefCell::new(RecordingNavigationObserver::default()));
    nav.add_observer(recorder.clone());
    recorder
}

#[test]
fn missing_street_is_none_and_move_fails_in_place() {
    let (city, hub, _, _) = crossroads();
    assert!(city.look_for_street(hub, Direction::South).is_none());

    let mut nav = NavigationModule::new(city, hub, Direction::South);
    let recorder = observed(&mut nav);

    assert_eq!(
        nav.move_forward(),
        Err(ExecutionError::NoStreet {
            direction: Direction::South
        })
    );
    assert_eq!(nav.current_place_id(), hub);
    assert_eq!(nav.heading(), Direction::South);
    assert!(recorder.borrow().events.is_empty());
}

#[test]
fn closed_street_blocks_the_move() {
    let (city, hub, _, _) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::North);

    assert_eq!(nav.move_forward(), Err(ExecutionError::StreetClosed));
    assert_eq!(nav.current_place_id(), hub);
}

#[test]
fn streets_are_walkable_from_the_far_end() {
    let (city, hub, _, west) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::West);
    let recorder = observed(&mut nav);

    nav.move_forward().expect("hub to west");
    assert_eq!(nav.current_place_id(), west);

    let recorded = recorder.borrow();
    assert!(matches!(
        &recorded.events[..],
        [NavigationEvent::RobotArrived(Direction::West, view)] if view.name == "West"
    ));
}

#[test]
fn move_undo_retraces_without_turning() {
    let (city, _, _, west) = crossroads();
    let mut nav = NavigationModule::new(city, west, Direction::East);
    let recorder = observed(&mut nav);

    nav.move_forward().expect("west to hub");
    nav.move_undo().expect("back to west");

    assert_eq!(nav.current_place_id(), west);
    assert_eq!(nav.heading(), Direction::East);
    let headings: Vec<Direction> = recorder
        .borrow()
        .events
        .iter()
        .filter_map(|e| match e {
            NavigationEvent::RobotArrived(d, _) => Some(*d),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![Direction::East, Direction::West]);
}

#[test]
fn unknown_rotation_still_reports_the_heading() {
    let (city, hub, _, _) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::North);
    let recorder = observed(&mut nav);

    nav.rotate(Rotation::Unknown);
    nav.rotate(Rotation::Right);

    assert_eq!(nav.heading(), Direction::East);
    assert_eq!(
        recorder.borrow().events,
        vec![
            NavigationEvent::HeadingChanged(Direction::North),
            NavigationEvent::HeadingChanged(Direction::East),
        ]
    );
}

#[test]
fn drop_fires_place_changed_and_rejects_collisions() {
    let (city, hub, _, _) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::North);
    let recorder = observed(&mut nav);

    assert!(nav.drop_at_current_place(Item::generic("bolt", "")));
    assert!(!nav.drop_at_current_place(Item::generic("BOLT", "")));
    assert!(nav.exists_at_current_place("Bolt"));

    let picked = nav.pick_from_current_place("bolt").expect("bolt was dropped");
    assert_eq!(picked.id(), "bolt");
    assert!(!nav.exists_at_current_place("bolt"));

    assert_eq!(recorder.borrow().events.len(), 1);
    assert!(matches!(
        &recorder.borrow().events[0],
        NavigationEvent::PlaceChanged(view) if view.items == vec!["bolt".to_owned()]
    ));
}

#[test]
fn code_toggles_the_street_ahead() {
    let (city, hub, north, _) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::North);

    let street = nav.heading_street_mut().expect("street north of hub");
    assert!(street.open("K1"));
    nav.move_forward().expect("door is open now");
    assert_eq!(nav.current_place_id(), north);
}

#[test]
fn scan_and_init_only_notify() {
    let (city, hub, _, _) = crossroads();
    let mut nav = NavigationModule::new(city, hub, Direction::Unknown);
    assert_eq!(nav.heading(), Direction::North);
    let recorder = observed(&mut nav);

    nav.init_navigation();
    nav.scan_current_place();

    let recorded = recorder.borrow();
    let events = &recorded.events;
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        NavigationEvent::NavigationInitialized(view, Direction::North) if view.name == "Hub"
    ));
    assert!(matches!(&events[1], NavigationEvent::PlaceScanned(view) if view.is_empty()));
    assert_eq!(nav.current_place_id(), hub);
}

#[test]
#[should_panic(expected = "is not part of the city")]
fn foreign_initial_place_is_rejected() {
    let (city, _, _, _) = crossroads();
    NavigationModule::new(city, PlaceId(42), Direction::North);
}
