use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A [Member] is a family member as stored and served by the API.
/// Fields that are not known are kept as-is and serialized flat, next to the known ones.
#[derive(Debug, Getters, PartialEq, Serialize, Deserialize, Clone)]
pub struct Member {
    id: u32,
    first_name: String,
    last_name: String,
    age: Number,
    lucky_numbers: Vec<Number>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Member {
    pub fn new(
        id: u32,
        first_name: String,
        last_name: String,
        age: Number,
        lucky_numbers: Vec<Number>,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            age,
            lucky_numbers,
            extra,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    #[cfg(test)]
    use serde_json::json;

    pub const MEMBER_ID: u32 = 1;
    pub const MEMBER_FIRST_NAME: &str = "Bo";
    pub const MEMBER_LAST_NAME: &str = "Jackson";

    pub fn get_expected_member() -> Member {
        Member {
            id: MEMBER_ID,
            first_name: MEMBER_FIRST_NAME.to_owned(),
            last_name: MEMBER_LAST_NAME.to_owned(),
            age: Number::from(10),
            lucky_numbers: vec![Number::from(3), Number::from(7)],
            extra: Map::new(),
        }
    }

    #[test]
    fn should_serialize_extra_fields_flat() {
        let mut extra = Map::new();
        extra.insert("nickname".to_owned(), json!("Bobo"));
        let member = Member::new(
            2,
            "Bo".to_owned(),
            "Jackson".to_owned(),
            Number::from(10),
            vec![Number::from(3)],
            extra,
        );

        let result = serde_json::to_value(&member).unwrap();

        assert_eq!(
            json!({"id": 2, "first_name": "Bo", "last_name": "Jackson", "age": 10, "lucky_numbers": [3], "nickname": "Bobo"}),
            result
        );
    }

    #[test]
    fn should_deserialize_member() {
        let json = r#"{"id":1,"first_name":"Bo","last_name":"Jackson","age":10,"lucky_numbers":[3,7]}"#;

        let result: Member = serde_json::from_str(json).unwrap();

        assert_eq!(get_expected_member(), result);
    }

    #[test]
    fn should_keep_unknown_fields_when_deserializing() {
        let json = r#"{"id":1,"first_name":"Bo","last_name":"Jackson","age":10.5,"lucky_numbers":[],"pets":["Rex"]}"#;

        let result: Member = serde_json::from_str(json).unwrap();

        assert_eq!(Some(&json!(["Rex"])), result.extra().get("pets"));
        assert_eq!(Some(10.5), result.age().as_f64());
    }
}
