//! `robocity-loader`: builds a [`City`] from the plain-text map format.
//!
//! ```text
//! BeginCity
//! BeginPlaces
//! place 0 Sol Puerta_del_Sol noSpaceShip
//! place 1 Callao "Cinemas and shops" spaceShip
//! EndPlaces
//! BeginStreets
//! street 0 place 0 west place 1 closed opensesame
//! EndStreets
//! BeginItems
//! fuel 0 Battery to_get_cracking 10 1 place 0
//! codecard 1 Card The_key_is_too_easy opensesame place 0
//! EndItems
//! EndCity
//! ```
//!
//! Records in every section are numbered from 0 without gaps. The first place is where the
//! robot starts.
#![forbid(unsafe_code)]

mod error;
mod fields;

use std::io::Read;
use std::path::Path;

use robocity_core::{City, Direction, Item, Place, PlaceId, Street};

pub use error::CityFormatError;
use fields::Field;

/// A constructed city plus the robot's starting place.
#[derive(Debug)]
pub struct LoadedCity {
    pub city: City,
    pub initial_place: PlaceId,
}

pub fn load_city(text: &str) -> Result<LoadedCity, CityFormatError> {
    Loader::default().run(text)
}

pub fn load_city_from_reader(mut reader: impl Read) -> Result<LoadedCity, CityFormatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_city(&text)
}

pub fn load_city_from_path(path: impl AsRef<Path>) -> Result<LoadedCity, CityFormatError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    load_city(&text)
}

#[derive(Default)]
struct Loader {
    city: City,
    places: Vec<PlaceId>,
    items: usize,
}

type Lines<'a> = std::iter::Enumerate<std::str::Lines<'a>>;

impl Loader {
    fn run(mut self, text: &str) -> Result<LoadedCity, CityFormatError> {
        let mut lines = text.lines().enumerate();

        let (line, header) = next_record(&mut lines).ok_or(CityFormatError::MissingHeader { line: 1 })?;
        if !header.eq_ignore_ascii_case("BeginCity") {
            return Err(CityFormatError::MissingHeader { line });
        }

        loop {
            let (line, marker) = next_record(&mut lines).ok_or(CityFormatError::UnexpectedEnd {
                line: text.lines().count() + 1,
                expected: "EndCity",
            })?;
            let end = if marker.eq_ignore_ascii_case("BeginPlaces") {
                "EndPlaces"
            } else if marker.eq_ignore_ascii_case("BeginStreets") {
                "EndStreets"
            } else if marker.eq_ignore_ascii_case("BeginItems") {
                "EndItems"
            } else if marker.eq_ignore_ascii_case("EndCity") {
                break;
            } else {
                return Err(CityFormatError::UnknownSection {
                    line,
                    found: marker.to_owned(),
                });
            };
            self.section(&mut lines, end, text)?;
        }

        let initial_place = *self.places.first().ok_or(CityFormatError::NoPlaces)?;
        tracing::debug!(
            places = self.city.place_count(),
            streets = self.city.street_count(),
            items = self.items,
            "city loaded"
        );
        Ok(LoadedCity {
            city: self.city,
            initial_place,
        })
    }

    fn section(
        &mut self,
        lines: &mut Lines<'_>,
        end: &'static str,
        text: &str,
    ) -> Result<(), CityFormatError> {
        loop {
            let (line, record) = next_record(lines).ok_or(CityFormatError::UnexpectedEnd {
                line: text.lines().count() + 1,
                expected: end,
            })?;
            if record.eq_ignore_ascii_case(end) {
                return Ok(());
            }
            let fields = fields::split(record).ok_or_else(|| CityFormatError::Malformed {
                line,
                record: "map",
                reason: "unterminated quote".to_owned(),
            })?;
            match end {
                "EndPlaces" => self.place(line, &fields)?,
                "EndStreets" => self.street(line, &fields)?,
                _ => self.item(line, &fields)?,
            }
        }
    }

    fn place(&mut self, line: usize, fields: &[Field<'_>]) -> Result<(), CityFormatError> {
        let [kind, number, name, description, ship] = fields else {
            return Err(malformed(line, "place", "expected 5 fields"));
        };
        if !kind.is("place") {
            return Err(malformed(line, "place", "record must start with `place`"));
        }
        self.check_sequence(line, "place", number, self.places.len())?;
        let spaceship = if ship.is("spaceShip") {
            true
        } else if ship.is("noSpaceShip") {
            false
        } else {
            return Err(malformed(line, "place", "expected spaceShip or noSpaceShip"));
        };
        let id = self
            .city
            .add_place(Place::new(name.text, spaceship, description.description()));
        self.places.push(id);
        Ok(())
    }

    fn street(&mut self, line: usize, fields: &[Field<'_>]) -> Result<(), CityFormatError> {
        // The state sits at a fixed position, so a code may itself read `open`.
        let (head, state, code) = match fields {
            [head @ .., state] if head.len() == 7 => (head, state, None),
            [head @ .., state, code] if head.len() == 7 => (head, state, Some(code.text)),
            _ => return Err(malformed(line, "street", "expected 8 or 9 fields")),
        };
        let [kind, number, from_kw, from, direction, to_kw, to] = head else {
            return Err(malformed(line, "street", "expected 8 or 9 fields"));
        };
        if !kind.is("street") || !from_kw.is("place") || !to_kw.is("place") {
            return Err(malformed(
                line,
                "street",
                "expected `street <n> place <a> <direction> place <b>`",
            ));
        }
        let code = match code {
            None if state.is("open") => None,
            Some(code) if state.is("closed") => Some(code),
            _ => return Err(malformed(line, "street", "expected `open` or `closed <code>`")),
        };
        self.check_sequence(line, "street", number, self.city.street_count())?;
        let from = self.place_ref(line, from)?;
        let to = self.place_ref(line, to)?;
        let direction = match Direction::parse(direction.text) {
            Direction::Unknown => {
                return Err(CityFormatError::UnknownDirection {
                    line,
                    found: direction.text.to_owned(),
                })
            }
            direction => direction,
        };
        let street = match code {
            None => Street::new(from, direction, to),
            Some(code) => Street::with_code(from, direction, to, false, code),
        };
        self.city.add_street(street);
        Ok(())
    }

    fn item(&mut self, line: usize, fields: &[Field<'_>]) -> Result<(), CityFormatError> {
        let (item, place_kw, place) = match fields {
            [kind, number, id, description, power, times, place_kw, place] if kind.is("fuel") => {
                self.check_sequence(line, "item", number, self.items)?;
                let power = signed(line, "fuel", power)?;
                let times = signed(line, "fuel", times)?;
                (
                    Item::fuel(id.text, description.description(), power, times),
                    place_kw,
                    place,
                )
            }
            [kind, number, id, description, recycled, place_kw, place] if kind.is("garbage") => {
                self.check_sequence(line, "item", number, self.items)?;
                let recycled = signed(line, "garbage", recycled)?;
                (
                    Item::garbage(id.text, description.description(), recycled),
                    place_kw,
                    place,
                )
            }
            [kind, number, id, description, code, place_kw, place] if kind.is("codecard") => {
                self.check_sequence(line, "item", number, self.items)?;
                (
                    Item::code_card(id.text, description.description(), code.text),
                    place_kw,
                    place,
                )
            }
            _ => {
                return Err(malformed(
                    line,
                    "item",
                    "expected a fuel, garbage or codecard record",
                ))
            }
        };
        if !place_kw.is("place") {
            return Err(malformed(line, "item", "expected `place <n>` at the end"));
        }
        let target = self.place_ref(line, place)?;
        let id = item.id().to_owned();
        if !self.city[target].add_item(item) {
            return Err(CityFormatError::DuplicateItem {
                line,
                place: target.0,
                id,
            });
        }
        self.items += 1;
        Ok(())
    }

    fn check_sequence(
        &self,
        line: usize,
        record: &'static str,
        number: &Field<'_>,
        expected: usize,
    ) -> Result<(), CityFormatError> {
        let found = index(line, record, number)?;
        if found != expected {
            return Err(CityFormatError::OutOfSequence {
                line,
                record,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn place_ref(&self, line: usize, field: &Field<'_>) -> Result<PlaceId, CityFormatError> {
        let place = index(line, "place reference", field)?;
        self.places
            .get(place)
            .copied()
            .ok_or(CityFormatError::UnknownPlace { line, place })
    }
}

/// Next non-blank line, trimmed, with its 1-based number.
fn next_record<'a>(lines: &mut Lines<'a>) -> Option<(usize, &'a str)> {
    lines
        .map(|(i, l)| (i + 1, l.trim()))
        .find(|(_, l)| !l.is_empty())
}

fn malformed(line: usize, record: &'static str, reason: &str) -> CityFormatError {
    CityFormatError::Malformed {
        line,
        record,
        reason: reason.to_owned(),
    }
}

fn index(line: usize, record: &'static str, field: &Field<'_>) -> Result<usize, CityFormatError> {
    field
        .text
        .parse()
        .map_err(|_| malformed(line, record, &format!("{:?} is not a number", field.text)))
}

fn signed(line: usize, record: &'static str, field: &Field<'_>) -> Result<i32, CityFormatError> {
    field
        .text
        .parse()
        .map_err(|_| malformed(line, record, &format!("{:?} is not a number", field.text)))
}
