//! Animal model and the fixed seed data set.

use menagerie_core::animal::AnimalFields;
use menagerie_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `animals` table.
///
/// Serialized with camelCase field names to match the wire format used
/// by form submissions and the seed endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: DbId,
    pub animal_type: String,
    pub species: String,
    pub extinct: bool,
    pub location: String,
    pub life_expectancy: f64,
    pub img: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fixed sample set inserted by the seed endpoint.
///
/// Order matters: rows are inserted (and returned) in this order.
pub fn starter_animals() -> Vec<AnimalFields> {
    vec![
        AnimalFields {
            animal_type: "Alaskan Malamute".into(),
            species: "Mammal".into(),
            extinct: false,
            location: "North western shores of Alaska".into(),
            life_expectancy: 12.0,
            img: "https://th.bing.com/th/id/OIP.71YMq1iZdBbDfpU-4hZzuQHaJQ?pid=ImgDet&rs=1".into(),
        },
        AnimalFields {
            animal_type: "Black Bear".into(),
            species: "Mammal".into(),
            extinct: false,
            location: "North America".into(),
            life_expectancy: 20.0,
            img: "https://www.pennlive.com/resizer/-99YM8S7uezC3Nv-0CzAEmXzEGs=/1280x0/smart/cloudfront-us-east-1.images.arcpublishing.com/advancelocal/BYXCODRDEZE35KDS3QVOQBQYMM.jpg".into(),
        },
        AnimalFields {
            animal_type: "Bald Eagle".into(),
            species: "Bird".into(),
            extinct: false,
            location: "North America".into(),
            life_expectancy: 30.0,
            img: "https://immortal.org/wp-content/uploads/2016/03/bald-eagle-1075023_1920.jpg".into(),
        },
        AnimalFields {
            animal_type: "Musky".into(),
            species: "Fish".into(),
            extinct: false,
            location: "North America".into(),
            life_expectancy: 15.0,
            img: "https://th.bing.com/th/id/R.2ace0f56f4a95ab8085e7116de8ae316?rik=7xWxn1kQDwiUkg&riu=http%3a%2f%2fwww.ducks.ca%2fassets%2f2019%2f03%2f26c410797a34e28cd495301e001107f3-1000x0-c-default.jpg&ehk=eF5Ke%2foQa1RPqOZX81wSiU7e2sFBqpOTCavkWNkmm0o%3d&risl=&pid=ImgRaw&r=0".into(),
        },
        AnimalFields {
            animal_type: "King Cobra".into(),
            species: "Reptile".into(),
            extinct: false,
            location: "Africa and Asia".into(),
            life_expectancy: 20.0,
            img: "https://upload.wikimedia.org/wikipedia/commons/4/4d/12_-_The_Mystical_King_Cobra_and_Coffee_Forests.jpg".into(),
        },
    ]
}
