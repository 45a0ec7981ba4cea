//! Shared chart vocabulary: series descriptors and data helpers.

use pergola_core::{Props, Value};

/// One plotted series: the record field it reads, and optional display
/// attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: Option<String>,
    pub label: Option<String>,
    pub extra: Props,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn to_wire(&self) -> Value {
        let mut object = Props::new();
        object.set("name", self.name.clone());
        object.maybe("color", self.color.clone());
        object.maybe("label", self.label.clone());
        object.merge(self.extra.clone());
        object.into()
    }
}

impl From<&str> for ChartSeries {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Serialize a series list to its wire array.
pub fn wire_series<I>(series: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<ChartSeries>,
{
    Value::Array(series.into_iter().map(|s| s.into().to_wire()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_wire_shape() {
        assert_eq!(
            wire_series(["apples", "pears"]),
            json!([{"name": "apples"}, {"name": "pears"}])
        );
        assert_eq!(
            wire_series([ChartSeries::new("sales").color("indigo.6")]),
            json!([{"name": "sales", "color": "indigo.6"}])
        );
    }
}
