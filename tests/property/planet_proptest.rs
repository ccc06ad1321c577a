//! Property-based tests for planet serialization

use planetary_api::shared::Planet;
use proptest::prelude::*;

fn planet_strategy() -> impl Strategy<Value = Planet> {
    (
        any::<i64>(),
        "[A-Za-z]{1,12}",
        proptest::option::of("Class [A-Z]"),
        proptest::option::of("[A-Za-z]{1,8}"),
        proptest::option::of(0.0f64..1e30),
        proptest::option::of(0.0f64..1e6),
        proptest::option::of(0.0f64..1e10),
    )
        .prop_map(
            |(planet_id, planet_name, planet_type, home_star, mass, radius, distance)| Planet {
                planet_id,
                planet_name,
                planet_type,
                home_star,
                mass,
                radius,
                distance,
            },
        )
}

proptest! {
    #[test]
    fn test_planet_always_has_seven_fields(planet in planet_strategy()) {
        let json = serde_json::to_value(&planet).unwrap();
        let object = json.as_object().unwrap();

        prop_assert_eq!(object.len(), 7);
        prop_assert_eq!(object["planet_name"].as_str(), Some(planet.planet_name.as_str()));
        prop_assert_eq!(object["mass"].is_null(), planet.mass.is_none());
    }
}
