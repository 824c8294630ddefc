//! Wire records for `org.kde.krunner1`.

use std::collections::HashMap;

use dbusrunner_core::domain::{PropertyValue, RemoteAction, RemoteMatch};
use serde::Serialize;
use zbus::zvariant::{Type, Value};

/// Signature `(sssida{sv})`.
#[derive(Debug, Serialize, Type)]
pub struct WireMatch {
    pub data: String,
    pub text: String,
    pub icon: String,
    pub category: i32,
    pub relevance: f64,
    pub properties: HashMap<String, Value<'static>>,
}

impl From<&RemoteMatch> for WireMatch {
    fn from(m: &RemoteMatch) -> Self {
        Self {
            data: m.id.clone(),
            text: m.text.clone(),
            icon: m.icon_name.clone(),
            category: m.query_type.code(),
            relevance: m.relevance.value(),
            properties: m
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), to_value(v)))
                .collect(),
        }
    }
}

fn to_value(v: &PropertyValue) -> Value<'static> {
    match v {
        PropertyValue::Str(s) => Value::from(s.clone()),
        PropertyValue::Bool(b) => Value::from(*b),
        PropertyValue::StrList(items) => Value::from(items.clone()),
        PropertyValue::Int(i) => Value::from(*i),
        PropertyValue::Double(d) => Value::from(*d),
    }
}

/// Signature `(sss)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Type)]
pub struct WireAction {
    pub id: String,
    pub text: String,
    pub icon: String,
}

impl From<&RemoteAction> for WireAction {
    fn from(a: &RemoteAction) -> Self {
        Self {
            id: a.id.clone(),
            text: a.text.clone(),
            icon: a.icon_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbusrunner_core::domain::{QueryType, Relevance};

    #[test]
    fn signatures_match_the_krunner_contract() {
        assert_eq!(WireMatch::SIGNATURE.to_string(), "(sssida{sv})");
        assert_eq!(WireAction::SIGNATURE.to_string(), "(sss)");
        assert_eq!(<Vec<WireMatch>>::SIGNATURE.to_string(), "a(sssida{sv})");
        assert_eq!(<Vec<WireAction>>::SIGNATURE.to_string(), "a(sss)");
    }

    #[test]
    fn match_fields_map_in_order() {
        let m = RemoteMatch::builder("Hello", "Hello from X!")
            .icon("document-edit")
            .query_type(QueryType::ExactMatch)
            .relevance(Relevance::MAX)
            .subtext("Demo Subtext")
            .multiline(true)
            .urls(vec!["https://kde.org".to_owned()])
            .build();

        let wire = WireMatch::from(&m);
        assert_eq!(wire.data, "Hello");
        assert_eq!(wire.text, "Hello from X!");
        assert_eq!(wire.icon, "document-edit");
        assert_eq!(wire.category, 100);
        assert_eq!(wire.relevance, 1.0);
        assert_eq!(wire.properties["subtext"], Value::from("Demo Subtext"));
        assert_eq!(wire.properties["multiline"], Value::from(true));
        assert_eq!(wire.properties["urls"].value_signature().to_string(), "as");
    }

    #[test]
    fn unknown_category_passes_through() {
        let m = RemoteMatch::builder("a", "b")
            .query_type(QueryType::from_code(42))
            .build();
        assert_eq!(WireMatch::from(&m).category, 42);
    }
}
