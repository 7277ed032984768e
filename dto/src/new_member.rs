use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A member that has not been stored yet.
/// Its id is optional: when missing, the store assigns one.
#[derive(Debug, Getters, Dissolve, PartialEq, Serialize, Deserialize, Clone)]
pub struct NewMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    age: Number,
    lucky_numbers: Vec<Number>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl NewMember {
    pub fn new(
        id: Option<u32>,
        first_name: String,
        last_name: Option<String>,
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

    impl NewMember {
        pub fn new_test(first_name: &str, age: i64, lucky_numbers: &[i64]) -> Self {
            NewMember {
                id: None,
                first_name: first_name.to_owned(),
                last_name: None,
                age: Number::from(age),
                lucky_numbers: lucky_numbers.iter().map(|n| Number::from(*n)).collect(),
                extra: Map::new(),
            }
        }

        pub fn with_id(mut self, id: u32) -> Self {
            self.id = Some(id);
            self
        }

        pub fn with_last_name(mut self, last_name: &str) -> Self {
            self.last_name = Some(last_name.to_owned());
            self
        }

        pub fn with_extra(mut self, key: &str, value: Value) -> Self {
            self.extra.insert(key.to_owned(), value);
            self
        }
    }

    pub fn bo() -> NewMember {
        NewMember::new_test("Bo", 10, &[3, 7])
    }

    #[test]
    fn should_not_serialize_missing_optional_fields() {
        let result = serde_json::to_value(bo()).unwrap();

        assert_eq!(
            json!({"first_name": "Bo", "age": 10, "lucky_numbers": [3, 7]}),
            result
        );
    }
}
