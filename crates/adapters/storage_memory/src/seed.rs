//! Destinations loaded into the store at startup.

use bucketlist_domain::id::PlaceId;
use bucketlist_domain::place::Place;

const SEED: [(&str, &str, &str, bool); 5] = [
    (
        "Santorini",
        "Greece",
        "Beautiful white and blue architecture with stunning sunsets over the Aegean Sea",
        true,
    ),
    (
        "Kyoto",
        "Japan",
        "Ancient temples, traditional gardens, and historic geisha districts",
        false,
    ),
    (
        "Machu Picchu",
        "Peru",
        "Ancient Incan citadel set high in the Andes Mountains",
        false,
    ),
    (
        "Northern Lights",
        "Iceland",
        "Spectacular aurora borealis dancing across the Arctic sky",
        true,
    ),
    (
        "Great Barrier Reef",
        "Australia",
        "World's largest coral reef system with incredible marine biodiversity",
        false,
    ),
];

/// The seed places, numbered from 1.
#[must_use]
pub fn places() -> Vec<Place> {
    let ids = std::iter::successors(Some(PlaceId::FIRST), |id| id.next());
    SEED.iter()
        .zip(ids)
        .map(|(&(name, country, description, visited), id)| Place {
            id,
            name: name.to_string(),
            country: country.to_string(),
            description: description.to_string(),
            visited,
        })
        .collect()
}
