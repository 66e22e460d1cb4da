use crate::{BandList, BandName};

/// The bands on the bingo card, in display order.
pub const CATALOG: [&str; 36] = [
    "Led Zeppelin",
    "Queen",
    "The Beatles",
    "The Rolling Stones",
    "AC/DC",
    "Pink Floyd",
    "Metallica",
    "Nirvana",
    "Guns N' Roses",
    "U2",
    "Red Hot Chili Peppers",
    "Foo Fighters",
    "Green Day",
    "Pearl Jam",
    "Aerosmith",
    "Iron Maiden",
    "Black Sabbath",
    "Deep Purple",
    "Van Halen",
    "Rush",
    "Def Leppard",
    "Bon Jovi",
    "Journey",
    "Eagles",
    "The Who",
    "Jimi Hendrix Experience",
    "Cream",
    "The Doors",
    "Dire Straits",
    "Fleetwood Mac",
    "Lynyrd Skynyrd",
    "The Clash",
    "Ramones",
    "ZZ Top",
    "KISS",
    "Soundgarden",
];

/// Build a fresh copy of the catalog.
pub fn catalog() -> BandList {
    CATALOG.iter().copied().map(BandName::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_36_bands() {
        assert_eq!(catalog().len(), 36);
    }

    #[test]
    fn test_catalog_order() {
        let list = catalog();
        let first: Vec<&str> = list.iter().take(4).map(BandName::as_str).collect();
        assert_eq!(
            first,
            vec!["Led Zeppelin", "Queen", "The Beatles", "The Rolling Stones"]
        );
        assert_eq!(list.get(35).unwrap(), "Soundgarden");
    }

    #[test]
    fn test_catalog_copies_are_equal() {
        assert_eq!(catalog(), catalog());
    }
}
