//! Search state: the latest reading (or error) plus the display selection.

use std::collections::BTreeSet;

use crate::{
    error::QueryError,
    model::{CityName, WeatherReading},
    provider::WeatherProvider,
    selection::{DisplaySelection, Field},
};

/// What the caller should currently show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// No search has succeeded or failed yet.
    Empty,
    Failed(&'a QueryError),
    Ready(&'a WeatherReading),
}

#[derive(Debug)]
pub struct WeatherQuery {
    provider: Box<dyn WeatherProvider>,
    reading: Option<WeatherReading>,
    error: Option<QueryError>,
    selection: DisplaySelection,
    last_city: Option<CityName>,
}

impl WeatherQuery {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            reading: None,
            error: None,
            selection: DisplaySelection::new(),
            last_city: None,
        }
    }

    /// Issue one request for `city`.
    ///
    /// On success the reading is replaced and `fields` becomes the active filter.
    /// On failure the previous reading is dropped so it cannot be shown as current.
    pub async fn fetch(
        &mut self,
        city: &CityName,
        fields: BTreeSet<Field>,
    ) -> Result<&WeatherReading, QueryError> {
        self.last_city = Some(city.clone());
        match self.provider.current(city).await {
            Ok(reading) => {
                tracing::debug!(%city, resolved = %reading.city, "weather lookup succeeded");
                self.selection.set_fields(fields);
                self.error = None;
                Ok(self.reading.insert(reading))
            }
            Err(err) => {
                tracing::warn!(%city, error = %format!("{err:#}"), "weather lookup failed");
                self.reading = None;
                self.error = Some(QueryError::NotFound);
                Err(QueryError::NotFound)
            }
        }
    }

    /// Like [`fetch`](Self::fetch), but raw input; blank input is a no-op returning `Ok(None)`.
    pub async fn search(
        &mut self,
        input: &str,
        fields: BTreeSet<Field>,
    ) -> Result<Option<&WeatherReading>, QueryError> {
        let Some(city) = CityName::new(input) else {
            return Ok(None);
        };
        self.fetch(&city, fields).await.map(Some)
    }

    /// Drop every filter and re-run the last search unfiltered.
    ///
    /// Without a previous search only the filters are cleared and `Ok(None)` is returned.
    pub async fn clear_filters(&mut self) -> Result<Option<&WeatherReading>, QueryError> {
        self.selection.clear_all();
        let Some(city) = self.last_city.clone() else {
            return Ok(None);
        };
        self.fetch(&city, BTreeSet::new()).await.map(Some)
    }

    /// City of the most recent request, whether or not it succeeded.
    pub fn last_city(&self) -> Option<&CityName> {
        self.last_city.as_ref()
    }

    pub fn view(&self) -> View<'_> {
        match (&self.error, &self.reading) {
            (Some(err), _) => View::Failed(err),
            (None, Some(reading)) => View::Ready(reading),
            (None, None) => View::Empty,
        }
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    pub fn selection(&self) -> &DisplaySelection {
        &self.selection
    }

    /// Unit, variant and filter changes never trigger a request.
    pub fn selection_mut(&mut self) -> &mut DisplaySelection {
        &mut self.selection
    }
}
