/// Outcome of reading one record from an upstream service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The upstream returned the record
    Found(T),
    /// The upstream answered with a non-success status
    NotFound,
}

impl<T> Lookup<T> {
    /// Converts into an `Option`, discarding the not-found case
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_conversions() {
        let found: Lookup<i32> = Some(3).into();
        assert_eq!(found, Lookup::Found(3));
        assert_eq!(found.found(), Some(3));

        let missing: Lookup<i32> = None.into();
        assert_eq!(missing, Lookup::NotFound);
        assert_eq!(missing.found(), None);
    }
}
