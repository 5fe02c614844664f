//! Census API mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! ACS directory and profile responses. Endpoints are registered with the mockito
//! server and verify they were called the expected number of times.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

static SUBJECT_PATH: &str = "/2019/acs/acs5/subject";
static PROFILE_PATH: &str = "/2019/acs/acs5/profile";

static PROFILE_VARIABLES: &str = "NAME,DP05_0001E,DP05_0018E,DP03_0062E,DP04_0089E";

pub struct CensusFixtures<'a> {
    pub server: &'a mut ServerGuard,
}

impl<'a> CensusFixtures<'a> {
    /// Create a mock endpoint for the state directory.
    ///
    /// # Arguments
    /// - `states` - `(name, state FIPS code)` pairs to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_state_directory_endpoint(
        &mut self,
        states: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        let mut rows: Vec<Value> = vec![json!(["NAME", "state"])];
        rows.extend(states.iter().map(|(name, code)| json!([name, code])));

        self.server
            .mock("GET", SUBJECT_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("get".into(), "NAME".into()),
                Matcher::UrlEncoded("for".into(), "state:*".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(rows).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the place directory of one state.
    ///
    /// # Arguments
    /// - `state_code` - State FIPS code the places belong to
    /// - `places` - `(label, place FIPS code)` pairs to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_place_directory_endpoint(
        &mut self,
        state_code: &str,
        places: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        let mut rows: Vec<Value> = vec![json!(["NAME", "state", "place"])];
        rows.extend(
            places
                .iter()
                .map(|(name, place_code)| json!([name, state_code, place_code])),
        );

        self.server
            .mock("GET", SUBJECT_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("get".into(), "NAME".into()),
                Matcher::UrlEncoded("for".into(), "place:*".into()),
                Matcher::UrlEncoded("in".into(), format!("state:{}", state_code)),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(rows).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a single place lookup.
    ///
    /// # Arguments
    /// - `place_code` / `state_code` - FIPS codes of the place
    /// - `name` - Census label to return, e.g. `"Chicago city, Illinois"`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_place_lookup_endpoint(
        &mut self,
        place_code: &str,
        state_code: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        let rows = json!([
            ["NAME", "state", "place"],
            [name, state_code, place_code],
        ]);

        self.server
            .mock("GET", SUBJECT_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("get".into(), "NAME".into()),
                Matcher::UrlEncoded("for".into(), format!("place:{}", place_code)),
                Matcher::UrlEncoded("in".into(), format!("state:{}", state_code)),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rows.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a single place lookup that 404s.
    pub fn create_place_lookup_not_found_endpoint(
        &mut self,
        place_code: &str,
        state_code: &str,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", SUBJECT_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("get".into(), "NAME".into()),
                Matcher::UrlEncoded("for".into(), format!("place:{}", place_code)),
                Matcher::UrlEncoded("in".into(), format!("state:{}", state_code)),
            ]))
            .with_status(404)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a place's demographic profile.
    ///
    /// # Arguments
    /// - `place_code` / `state_code` - FIPS codes of the place
    /// - `name` - Census label to return
    /// - `values` - Population, median age, median income, median home value
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_profile_endpoint(
        &mut self,
        place_code: &str,
        state_code: &str,
        name: &str,
        values: [&str; 4],
        expected_requests: usize,
    ) -> Mock {
        let rows = json!([
            [
                "NAME",
                "DP05_0001E",
                "DP05_0018E",
                "DP03_0062E",
                "DP04_0089E",
                "state",
                "place"
            ],
            [
                name, values[0], values[1], values[2], values[3], state_code, place_code
            ],
        ]);

        self.server
            .mock("GET", PROFILE_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("get".into(), PROFILE_VARIABLES.into()),
                Matcher::UrlEncoded("for".into(), format!("place:{}", place_code)),
                Matcher::UrlEncoded("in".into(), format!("state:{}", state_code)),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rows.to_string())
            .expect(expected_requests)
            .create()
    }
}
