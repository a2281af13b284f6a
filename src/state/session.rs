use serde_json::{Map, Value};
use std::fmt;

/// Store key of the persisted login record
pub const LOGGED_KEY: &str = "logged";
const ID_FIELD: &str = "id";

/// Value sent as `user_id` when nobody is logged in
pub const UNAUTHENTICATED_ID: &str = "-1";

/// Identity of the user as handed out by the server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Token {
    #[default]
    Unauthenticated,
    User(String),
}

impl Token {
    /// Token from a login/register reply body
    pub fn from_reply(body: &str) -> Self {
        let id = body.trim();
        if id.is_empty() || id == UNAUTHENTICATED_ID {
            Self::Unauthenticated
        } else {
            Self::User(id.to_owned())
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    /// Form value for `user_id`/`userId` fields
    pub fn as_form_value(&self) -> &str {
        match self {
            Self::Unauthenticated => UNAUTHENTICATED_ID,
            Self::User(id) => id,
        }
    }

    /// Read the token out of a persisted `logged` record. Numeric ids are
    /// accepted as well as strings.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        match record.get(ID_FIELD) {
            Some(Value::String(id)) => Self::from_reply(id),
            Some(Value::Number(id)) => Self::from_reply(&id.to_string()),
            _ => Self::Unauthenticated,
        }
    }

    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(ID_FIELD.to_owned(), Value::String(self.as_form_value().to_owned()));
        record
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_is_trimmed() {
        assert_eq!(Token::from_reply(" 17\n"), Token::User("17".into()));
        assert_eq!(Token::from_reply("   "), Token::Unauthenticated);
    }

    #[test]
    fn test_form_value_sentinel() {
        assert_eq!(Token::Unauthenticated.as_form_value(), "-1");
        assert_eq!(Token::User("5".into()).to_string(), "5");
    }

    #[test]
    fn test_record_accepts_numbers() {
        let record = json!({ "id": 9 }).as_object().cloned().unwrap();
        assert_eq!(Token::from_record(&record), Token::User("9".into()));

        let record = json!({ "other": true }).as_object().cloned().unwrap();
        assert_eq!(Token::from_record(&record), Token::Unauthenticated);
    }

    #[test]
    fn test_record_shape() {
        let record = Token::User("abc".into()).to_record();
        assert_eq!(Value::Object(record), json!({ "id": "abc" }));
    }
}
