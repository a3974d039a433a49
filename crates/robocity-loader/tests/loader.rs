use std::io::Write;

use robocity_core::{Direction, ItemKind};
use robocity_loader::{load_city, load_city_from_path, load_city_from_reader, CityFormatError};

const SMALL_MAP: &str = "\
BeginCity
BeginPlaces
place 0 Entrada Estamos_en_la_entrada noSpaceShip
place 1 Callao \"In this square you find the cinemas\" noSpaceShip
place 2 Nave The_spaceship spaceShip
EndPlaces
BeginStreets
street 0 place 0 south place 1 open
street 1 place 1 east place 2 closed onetwothree
EndStreets
BeginItems
fuel 0 Petrol from_old_heatings 10 3 place 0
fuel 1 Battery to_get_cracking -50 1 place 0
codecard 2 Card \"The key is too easy\" onetwothree place 1
garbage 3 Newspapers News_on_sport 30 place 1
EndItems
EndCity
";

#[test]
fn loads_places_streets_and_items() {
    let loaded = load_city(SMALL_MAP).expect("valid map");
    let city = &loaded.city;

    assert_eq!(city.place_count(), 3);
    assert_eq!(city.street_count(), 2);

    let start = &city[loaded.initial_place];
    assert_eq!(start.name(), "Entrada");
    assert_eq!(start.description(), "Estamos en la entrada");
    assert!(!start.is_spaceship());
    assert_eq!(
        start.find_item("battery").map(|i| i.kind().clone()),
        Some(ItemKind::Fuel {
            power: -50,
            times: 1
        })
    );

    let street = city
        .look_for_street(loaded.initial_place, Direction::South)
        .expect("street 0");
    let callao = street.next_place(loaded.initial_place).expect("other end");
    assert_eq!(city[callao].description(), "In this square you find the cinemas");
    assert_eq!(
        city[callao].find_item("card").map(|i| i.description()),
        Some("The key is too easy")
    );

    let door = city
        .look_for_street(callao, Direction::East)
        .expect("street 1");
    assert!(!door.is_open());
    assert_eq!(door.code(), "onetwothree");
    assert!(city[door.next_place(callao).expect("ship")].is_spaceship());
}

#[test]
fn keywords_ignore_case_and_blank_lines_are_skipped() {
    let map = "\nbegincity\n\nBEGINPLACES\nPlace 0 Solo Alone SPACESHIP\nendplaces\n\nendcity\n";
    let loaded = load_city(map).expect("valid map");
    assert!(loaded.city[loaded.initial_place].is_spaceship());
}

#[test]
fn reports_the_offending_line() {
    let cases: [(&str, usize); 6] = [
        // Place numbered out of order.
        ("BeginCity\nBeginPlaces\nplace 1 A a noSpaceShip\nEndPlaces\nEndCity", 3),
        // Street towards an undefined place.
        (
            "BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\nEndPlaces\nBeginStreets\nstreet 0 place 0 north place 4 open\nEndStreets\nEndCity",
            6,
        ),
        // Closed street without a code.
        (
            "BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\nplace 1 B b noSpaceShip\nEndPlaces\nBeginStreets\nstreet 0 place 0 north place 1 closed\nEndStreets\nEndCity",
            7,
        ),
        // Item in a place twice.
        (
            "BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\nEndPlaces\nBeginItems\ngarbage 0 Can tin 1 place 0\ngarbage 1 CAN tin 1 place 0\nEndItems\nEndCity",
            7,
        ),
        // Unknown section.
        ("BeginCity\nBeginRobots\nEndCity", 2),
        // Bad spaceship marker.
        ("BeginCity\nBeginPlaces\nplace 0 A a maybe\nEndPlaces\nEndCity", 3),
    ];
    for (map, line) in cases {
        let err = load_city(map).expect_err(map);
        assert_eq!(err.line(), Some(line), "{err}");
    }
}

#[test]
fn street_state_is_read_by_position() {
    let map = "BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\nplace 1 B b noSpaceShip\nEndPlaces\nBeginStreets\nstreet 0 place 0 north place 1 closed open\nEndStreets\nEndCity";
    let loaded = load_city(map).expect("a code may read `open`");
    let street = &loaded.city.streets()[0];
    assert!(!street.is_open());
    assert_eq!(street.code(), "open");

    let open_with_code = map.replace("closed open", "open secret");
    assert!(matches!(
        load_city(&open_with_code),
        Err(CityFormatError::Malformed { line: 7, .. })
    ));
}

#[test]
fn unknown_direction_is_rejected() {
    let map = "BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\nplace 1 B b noSpaceShip\nEndPlaces\nBeginStreets\nstreet 0 place 0 up place 1 open\nEndStreets\nEndCity";
    assert!(matches!(
        load_city(map),
        Err(CityFormatError::UnknownDirection { line: 7, .. })
    ));
}

#[test]
fn truncated_and_empty_maps_fail() {
    assert!(matches!(
        load_city("BeginCity\nBeginPlaces\nplace 0 A a noSpaceShip\n"),
        Err(CityFormatError::UnexpectedEnd {
            expected: "EndPlaces",
            ..
        })
    ));
    assert!(matches!(
        load_city("BeginCity\nEndCity"),
        Err(CityFormatError::NoPlaces)
    ));
    assert!(matches!(
        load_city("place 0 A a noSpaceShip"),
        Err(CityFormatError::MissingHeader { line: 1 })
    ));
    assert!(matches!(
        load_city(""),
        Err(CityFormatError::MissingHeader { .. })
    ));
}

#[test]
fn loads_from_reader_and_path() {
    let loaded = load_city_from_reader(SMALL_MAP.as_bytes()).expect("valid map");
    assert_eq!(loaded.city.place_count(), 3);

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SMALL_MAP.as_bytes()).expect("write map");
    let loaded = load_city_from_path(file.path()).expect("valid map");
    assert_eq!(loaded.city.street_count(), 2);

    let dir = tempfile::tempdir().expect("temp dir");
    assert!(matches!(
        load_city_from_path(dir.path().join("missing.txt")),
        Err(CityFormatError::Io(_))
    ));
}
