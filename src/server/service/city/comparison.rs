use reloc_client::{model::PlaceEntry, CensusClient, WeatherClient};

use crate::{
    model::city::{CityComparisonSide, CityQueryDto, ComparisonDto},
    server::{
        error::{city::CityError, Error},
        service::city::{census::CensusService, geocode::GeocodeService, weather::WeatherService},
    },
};

/// Orchestrates the lookups behind a two-city comparison.
pub struct ComparisonService<'a> {
    census_client: &'a CensusClient,
    weather_client: &'a WeatherClient,
}

impl<'a> ComparisonService<'a> {
    /// Creates a new instance of [`ComparisonService`]
    pub fn new(census_client: &'a CensusClient, weather_client: &'a WeatherClient) -> Self {
        Self {
            census_client,
            weather_client,
        }
    }

    /// Compares two cities, resolving both before fetching any display data.
    ///
    /// Both resolutions run up front so a typo in either city rejects the
    /// request before a single weather call is spent.
    pub async fn compare(
        &self,
        current: &CityQueryDto,
        destination: &CityQueryDto,
    ) -> Result<ComparisonDto, Error> {
        validate_query(current)?;
        validate_query(destination)?;

        let geocode_service = GeocodeService::new(self.census_client);

        let current_place = geocode_service.resolve(&current.city, &current.state).await?;
        let destination_place = geocode_service
            .resolve(&destination.city, &destination.state)
            .await?;

        let current_side = self.assemble_side(&current_place, &current.state_abbr).await?;
        let destination_side = self
            .assemble_side(&destination_place, &destination.state_abbr)
            .await?;

        Ok(ComparisonDto {
            current: current_side,
            destination: destination_side,
        })
    }

    async fn assemble_side(
        &self,
        place: &PlaceEntry,
        state_abbr: &str,
    ) -> Result<CityComparisonSide, Error> {
        let census = CensusService::new(self.census_client)
            .get_record(place)
            .await?;
        let weather = WeatherService::new(self.weather_client)
            .get_snapshot(&census.city, state_abbr)
            .await?;

        Ok(CityComparisonSide { census, weather })
    }
}

fn validate_query(query: &CityQueryDto) -> Result<(), Error> {
    if query.city.trim().is_empty()
        || query.state.trim().is_empty()
        || query.state_abbr.trim().is_empty()
    {
        return Err(CityError::MissingField.into());
    }

    Ok(())
}
