use serde::{Deserialize, Serialize};

/// Query-string parameters of `GET /api/hospitals`
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl HospitalSearchParams {
    pub fn new(q: impl Into<String>, city: Option<String>) -> Self {
        Self {
            q: Some(q.into()),
            city,
        }
        .normalized()
    }

    /// Build params from raw query-string pairs
    ///
    /// The first `q` and the first `city` win; repeats and unknown keys are
    /// ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "city" if params.city.is_none() => params.city = Some(value),
                _ => {}
            }
        }
        params.normalized()
    }

    /// Drop empty values so they impose no constraint
    pub fn normalized(self) -> Self {
        Self {
            q: self.q.filter(|q| !q.is_empty()),
            city: self.city.filter(|c| !c.is_empty()),
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query().is_none() && self.city().is_none()
    }
}
