use crate::member::Result;
use crate::member::error::MemberError::{InvalidFields, MissingFields};
use dto::new_member::NewMember;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    String,
    Number,
    NumberList,
    Id,
}

impl FieldShape {
    fn describe(&self) -> &'static str {
        match self {
            FieldShape::String => "a string",
            FieldShape::Number => "a number",
            FieldShape::NumberList => "a list of numbers",
            FieldShape::Id => "a non-negative integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    name: &'static str,
    shape: FieldShape,
    required: bool,
}

impl FieldRule {
    const fn required(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            shape,
            required: true,
        }
    }

    const fn optional(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            shape,
            required: false,
        }
    }

    fn violation(&self) -> String {
        format!("{} must be {}", self.name, self.shape.describe())
    }
}

const FIRST_NAME: FieldRule = FieldRule::required("first_name", FieldShape::String);
const AGE: FieldRule = FieldRule::required("age", FieldShape::Number);
const LUCKY_NUMBERS: FieldRule = FieldRule::required("lucky_numbers", FieldShape::NumberList);
const ID: FieldRule = FieldRule::optional("id", FieldShape::Id);
const LAST_NAME: FieldRule = FieldRule::optional("last_name", FieldShape::String);

/// Fields a new member is checked against. Any other field is kept verbatim.
pub const MEMBER_SCHEMA: [FieldRule; 5] = [FIRST_NAME, AGE, LUCKY_NUMBERS, ID, LAST_NAME];

/// Turn a JSON body into a [NewMember].
///
/// Missing required fields are reported first, on their own.
/// Otherwise, every field of the wrong shape is reported at once.
/// `null` counts as absent for optional fields.
pub fn validate_new_member(body: Value) -> Result<NewMember> {
    let mut fields = match body {
        Value::Object(fields) => fields,
        _ => return Err(MissingFields(required_field_names(|_| true))),
    };

    let missing_fields = required_field_names(|name| !fields.contains_key(name));
    if !missing_fields.is_empty() {
        return Err(MissingFields(missing_fields));
    }

    let mut violations = vec![];
    let first_name = take(&mut fields, &FIRST_NAME, &mut violations, as_string);
    let age = take(&mut fields, &AGE, &mut violations, as_number);
    let lucky_numbers = take(&mut fields, &LUCKY_NUMBERS, &mut violations, as_number_list);
    let id = take(&mut fields, &ID, &mut violations, as_id);
    let last_name = take(&mut fields, &LAST_NAME, &mut violations, as_string);

    match (first_name, age, lucky_numbers) {
        (Some(first_name), Some(age), Some(lucky_numbers)) if violations.is_empty() => Ok(
            NewMember::new(id, first_name, last_name, age, lucky_numbers, fields),
        ),
        _ => Err(InvalidFields(violations)),
    }
}

fn required_field_names<F: Fn(&str) -> bool>(predicate: F) -> Vec<String> {
    MEMBER_SCHEMA
        .iter()
        .filter(|rule| rule.required && predicate(rule.name))
        .map(|rule| rule.name.to_owned())
        .collect()
}

fn take<T, F>(
    fields: &mut Map<String, Value>,
    rule: &FieldRule,
    violations: &mut Vec<String>,
    convert: F,
) -> Option<T>
where
    F: FnOnce(Value) -> Option<T>,
{
    match fields.remove(rule.name) {
        None | Some(Value::Null) if !rule.required => None,
        None => None,
        Some(value) => {
            let converted = convert(value);
            if converted.is_none() {
                violations.push(rule.violation());
            }
            converted
        }
    }
}

fn as_string(value: Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value),
        _ => None,
    }
}

fn as_number(value: Value) -> Option<Number> {
    match value {
        Value::Number(value) => Some(value),
        _ => None,
    }
}

fn as_number_list(value: Value) -> Option<Vec<Number>> {
    match value {
        Value::Array(values) => values.into_iter().map(as_number).collect(),
        _ => None,
    }
}

fn as_id(value: Value) -> Option<u32> {
    value.as_u64().and_then(|id| u32::try_from(id).ok())
}
