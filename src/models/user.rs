//! User data structures.

use serde::{Deserialize, Deserializer, Serialize};

use super::Post;

/// A user fetched from the user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: u64,

    /// Full display name
    pub name: String,

    /// Login handle, used in report lines
    pub username: String,

    /// Contact email
    pub email: String,

    /// Postal address including geolocation
    pub address: Address,

    /// Phone number
    pub phone: String,

    /// Personal website
    pub website: String,

    /// Employer
    pub company: Company,

    /// Posts authored by this user. Empty until the join stage runs.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A user's postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geolocation,
}

/// Geographic coordinates in floating-point degrees.
///
/// The upstream API serializes `lat`/`lng` as JSON strings, so
/// deserialization accepts both string and number forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Geolocation {
    #[serde(deserialize_with = "coord_from_string_or_number")]
    pub lat: f64,

    #[serde(deserialize_with = "coord_from_string_or_number")]
    pub lng: f64,
}

/// A user's employer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,

    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,

    pub bs: String,
}

fn coord_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coord {
        Number(f64),
        Text(String),
    }

    match Coord::deserialize(deserializer)? {
        Coord::Number(value) => Ok(value),
        Coord::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_with_string_coordinates() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert!((user.address.geo.lat - (-37.3159)).abs() < 1e-9);
        assert!((user.address.geo.lng - 81.1496).abs() < 1e-9);
        assert!(user.posts.is_empty());
    }

    #[test]
    fn test_deserialize_numeric_coordinates() {
        let geo: Geolocation = serde_json::from_str(r#"{"lat": 12.5, "lng": -3.25}"#).unwrap();
        assert!((geo.lat - 12.5).abs() < 1e-9);
        assert!((geo.lng - (-3.25)).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_rejects_garbage_coordinates() {
        let result = serde_json::from_str::<Geolocation>(r#"{"lat": "north", "lng": "0"}"#);
        assert!(result.is_err());
    }
}
