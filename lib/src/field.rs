use std::fmt::Display;

/// A single text value pulled out of a record by an extractor.
///
/// Absent values and empty strings are both treated as "no value" and are
/// never indexed or matched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field(Option<String>);

/// The searchable values of one record.
pub type Fields = Vec<Field>;

impl Field {
    #[inline]
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(Some(value.into()))
    }

    #[inline]
    pub fn empty() -> Self {
        Self(None)
    }

    /// Stringifies any displayable value, e.g. numeric ids or counters.
    pub fn display<T: Display + ?Sized>(value: &T) -> Self {
        Self(Some(value.to_string()))
    }

    /// The value, if present and non-empty.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref().filter(|value| !value.is_empty())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value().is_none()
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<&String> for Field {
    fn from(value: &String) -> Self {
        Self(Some(value.clone()))
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<Option<&str>> for Field {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(String::from))
    }
}

impl From<&Option<String>> for Field {
    fn from(value: &Option<String>) -> Self {
        Self(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn test_field_empty_values_are_absent() {
        assert_eq!(Field::from("").value(), None);
        assert_eq!(Field::from(None::<String>).value(), None);
        assert!(Field::empty().is_empty());
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::display(&42_u32).value(), Some("42"));
        assert_eq!(Field::from(Some("Open")).value(), Some("Open"));
    }
}
