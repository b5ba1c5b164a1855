#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostCategory {
    Technology,
    Health,
    Lifestyle,
}

impl PostCategory {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Lifestyle => "Lifestyle",
        }
    }

    pub fn all() -> [PostCategory; 3] {
        [Self::Technology, Self::Health, Self::Lifestyle]
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_and_are_case_sensitive() {
        for category in PostCategory::all() {
            assert_eq!(PostCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(PostCategory::from_value("technology"), None);
        assert_eq!(PostCategory::from_value("Banana"), None);
    }
}
