use std::collections::HashMap;
use std::fmt;

/// Aggregated per-map properties, merged across every tracked entity.
/// Keys are unique; the most recent write wins.
pub type PropertyMap = HashMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(value) => write!(f, "{value}"),
            PropertyValue::Flag(value) => write!(f, "{value}"),
            PropertyValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Flag(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value as f64)
    }
}

/// Collaborator notified after every aggregate mutation the registry makes
/// on behalf of an entity or the external trigger. The borrow is the
/// post-mutation state, so a consumer reacting to a trigger-driven clear
/// sees the aggregate already empty.
pub trait PropertyConsumer {
    fn on_properties_changed(&mut self, properties: &PropertyMap);
}

impl<F> PropertyConsumer for F
where
    F: FnMut(&PropertyMap),
{
    fn on_properties_changed(&mut self, properties: &PropertyMap) {
        self(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(
            PropertyValue::from("door"),
            PropertyValue::Text("door".to_string())
        );
        assert_eq!(PropertyValue::from(true), PropertyValue::Flag(true));
        assert_eq!(PropertyValue::from(5), PropertyValue::Number(5.0));
        assert_eq!(PropertyValue::from(0.25), PropertyValue::Number(0.25));
    }

    #[test]
    fn closures_act_as_consumers() {
        let mut seen = 0usize;
        {
            let mut consumer = |properties: &PropertyMap| {
                seen = properties.len();
            };
            let mut map = PropertyMap::new();
            map.insert("open".to_string(), PropertyValue::Flag(true));
            consumer.on_properties_changed(&map);
        }
        assert_eq!(seen, 1);
    }
}
