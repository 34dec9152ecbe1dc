use crate::models::{Hospital, HospitalSearchParams};

/// Case-insensitive substring test
#[inline]
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Check if a hospital's city contains the requested city name
///
/// Partial names match, so `台` matches every city spelled with it.
#[inline]
pub fn matches_city(hospital: &Hospital, city: &str) -> bool {
    contains_ignore_case(hospital.city.name(), &city.to_lowercase())
}

/// Check if the free-text query appears in any searchable field
///
/// Searched fields: name, city, district, address.
#[inline]
pub fn matches_query(hospital: &Hospital, query: &str) -> bool {
    let q = query.to_lowercase();

    contains_ignore_case(&hospital.name, &q)
        || contains_ignore_case(hospital.city.name(), &q)
        || contains_ignore_case(&hospital.district, &q)
        || contains_ignore_case(&hospital.address, &q)
}

/// Check both constraints; an absent or empty one always passes
#[inline]
pub fn matches_search(hospital: &Hospital, params: &HospitalSearchParams) -> bool {
    if let Some(city) = params.city() {
        if !matches_city(hospital, city) {
            return false;
        }
    }

    if let Some(query) = params.query() {
        if !matches_query(hospital, query) {
            return false;
        }
    }

    true
}

/// Filter hospitals by the search parameters, keeping dataset order
pub fn filter_hospitals<'a, I>(hospitals: I, params: &HospitalSearchParams) -> Vec<Hospital>
where
    I: IntoIterator<Item = &'a Hospital>,
{
    hospitals
        .into_iter()
        .filter(|hospital| matches_search(hospital, params))
        .cloned()
        .collect()
}
